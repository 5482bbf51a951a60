//! HTTP client for the Luna API.
//!
//! The game must stay playable without a server: any failure during login
//! yields an offline session, and saving from an offline session is skipped.

use crate::games::progress::Progress;
use crate::models::{LoginRequest, LoginResponse, SuccessResponse, User};
use reqwest::Client;
use std::fmt;
use tracing::{info, warn};

#[derive(Debug)]
pub enum ClientError {
    Http(reqwest::Error),
    Status(reqwest::StatusCode),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Http(err) => write!(f, "request failed: {err}"),
            ClientError::Status(status) => write!(f, "server answered {status}"),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Http(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Online(User),
    Offline { name: String },
}

#[derive(Debug, Clone)]
pub struct Session {
    pub mode: Mode,
    pub progress: Progress,
}

impl Session {
    pub fn is_online(&self) -> bool {
        matches!(self.mode, Mode::Online(_))
    }

    pub fn name(&self) -> &str {
        match &self.mode {
            Mode::Online(user) => &user.name,
            Mode::Offline { name } => name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LunaClient {
    base_url: String,
    http: Client,
}

impl LunaClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub async fn login(&self, name: &str) -> Session {
        match self.try_login(name).await {
            Ok(response) => {
                info!("{}", response.message);
                Session {
                    progress: Progress::from_user(&response.user),
                    mode: Mode::Online(response.user),
                }
            }
            Err(err) => {
                warn!("login failed, continuing offline: {err}");
                Session {
                    mode: Mode::Offline { name: name.to_string() },
                    progress: Progress::default(),
                }
            }
        }
    }

    async fn try_login(&self, name: &str) -> Result<LoginResponse, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/login", self.base_url))
            .json(&LoginRequest {
                name: Some(name.to_string()),
            })
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    /// Sends the session's counters. Returns false for offline sessions.
    pub async fn save_progress(&self, session: &Session) -> Result<bool, ClientError> {
        let Mode::Online(user) = &session.mode else {
            warn!("offline session for {}, progress kept locally", session.name());
            return Ok(false);
        };

        let response = self
            .http
            .post(format!("{}/api/save-progress", self.base_url))
            .json(&session.progress.to_request(user.id))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }
        let body: SuccessResponse = response.json().await?;
        Ok(body.success)
    }

    pub async fn fetch_user(&self, id: i64) -> Result<Option<User>, ClientError> {
        let response = self
            .http
            .get(format!("{}/api/user/{id}", self.base_url))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }
        Ok(response.json().await?)
    }
}
