use luna::client::LunaClient;
use luna::games::GameKind;
use luna::models::{DailyLog, LoginResponse, User};
use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::Once;
    use std::sync::atomic::{AtomicI32, Ordering};

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_temp_path(suffix: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("luna_http_{}_{}{suffix}", std::process::id(), nanos));
    path
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/health")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let database = unique_temp_path(".db");
    let public_dir = unique_temp_path("_public");
    std::fs::create_dir_all(&public_dir).expect("create public dir");
    std::fs::write(public_dir.join("app.js"), "console.log('luna');").expect("write static file");

    let child = Command::new(env!("CARGO_BIN_EXE_luna"))
        .env("PORT", port.to_string())
        .env("DATABASE_URL", format!("sqlite://{}", database.display()))
        .env("PUBLIC_DIR", &public_dir)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn login(client: &Client, base_url: &str, name: &str) -> LoginResponse {
    client
        .post(format!("{base_url}/api/login"))
        .json(&json!({ "name": name }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_login_is_idempotent_per_name() {
    let server = shared_server().await;
    let client = Client::new();

    let first = login(&client, &server.base_url, "Ola").await;
    let second = login(&client, &server.base_url, "Ola").await;
    assert_eq!(first.user.id, second.user.id);
    assert_eq!(second.user.name, "Ola");
    assert!(second.message.contains("Ola"));

    let other = login(&client, &server.base_url, "Tymek").await;
    assert_ne!(other.user.id, first.user.id);
}

#[tokio::test]
async fn http_login_requires_name() {
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/login", server.base_url))
        .json(&json!({ "name": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn http_save_progress_persists_submitted_fields() {
    let server = shared_server().await;
    let client = Client::new();
    let user = login(&client, &server.base_url, "Kuba").await.user;

    let response = client
        .post(format!("{}/api/save-progress", server.base_url))
        .json(&json!({
            "userId": user.id,
            "stars": 5,
            "visual": 10,
            "auditory": 8,
            "tactile": 6,
            "memory": 4,
        }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "success": true }));

    let stored: Option<User> = client
        .get(format!("{}/api/user/{}", server.base_url, user.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let stored = stored.expect("user row");
    assert_eq!(stored.stars, 5);
    assert_eq!(stored.visual_score, 10);
    assert_eq!(stored.auditory_score, 8);
    assert_eq!(stored.tactile_score, 6);
    assert_eq!(stored.memory_score, 4);
}

#[tokio::test]
async fn http_unknown_user_is_null() {
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/user/987654", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert!(body.is_null());

    let response = client
        .post(format!("{}/api/save-progress", server.base_url))
        .json(&json!({
            "userId": 987654,
            "stars": 1,
            "visual": 0,
            "auditory": 0,
            "tactile": 0,
            "memory": 0,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn http_logs_round_trip() {
    let server = shared_server().await;
    let client = Client::new();
    let user = login(&client, &server.base_url, "Zosia").await.user;

    let today = chrono::Local::now().date_naive();
    let yesterday = (today - chrono::Duration::days(1)).to_string();
    let today = today.to_string();
    for (date, mood) in [(yesterday.as_str(), 2), (today.as_str(), 4)] {
        let created: Value = client
            .post(format!("{}/api/logs", server.base_url))
            .json(&json!({
                "userId": user.id,
                "date": date,
                "mood": mood,
                "tags": ["sen", "przedszkole"],
                "note": "spokojny dzień",
            }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(created["success"], json!(true));
        assert!(created["id"].as_i64().is_some());
    }

    let logs: Vec<DailyLog> = client
        .get(format!("{}/api/logs/{}", server.base_url, user.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].date, today);
    assert_eq!(logs[0].mood, 4);
    assert_eq!(logs[1].tags, vec!["sen".to_string(), "przedszkole".to_string()]);

    let summary: Value = client
        .get(format!("{}/api/logs/{}/summary", server.base_url, user.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(summary["last_7_days"].as_array().map(Vec::len), Some(7));
    assert_eq!(summary["top_tags"][0]["count"], json!(2));
}

#[tokio::test]
async fn http_malformed_input_is_bad_request_with_json_error() {
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/login", server.base_url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].is_string());

    let response = client
        .get(format!("{}/api/user/abc", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].is_string());

    let user = login(&client, &server.base_url, "Lena").await.user;
    let response = client
        .post(format!("{}/api/logs", server.base_url))
        .json(&json!({ "userId": user.id, "date": "03/01/2026", "mood": 3 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], json!("date must be YYYY-MM-DD"));
}

#[tokio::test]
async fn http_log_without_date_is_dated_today() {
    let server = shared_server().await;
    let client = Client::new();
    let user = login(&client, &server.base_url, "Igor").await.user;

    let before = chrono::Local::now().date_naive().to_string();
    let response = client
        .post(format!("{}/api/logs", server.base_url))
        .json(&json!({ "userId": user.id, "mood": 4 }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let after = chrono::Local::now().date_naive().to_string();

    let logs: Vec<DailyLog> = client
        .get(format!("{}/api/logs/{}", server.base_url, user.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].date == before || logs[0].date == after);
    assert!(logs[0].tags.is_empty());
    assert_eq!(logs[0].note, "");
}

#[tokio::test]
async fn http_summary_ignores_future_dated_logs() {
    let server = shared_server().await;
    let client = Client::new();
    let user = login(&client, &server.base_url, "Ksawery").await.user;

    let today = chrono::Local::now().date_naive().to_string();
    let mut entries = vec![(today.clone(), 4)];
    entries.extend((0..150).map(|_| ("2099-12-31".to_string(), 1)));
    for (date, mood) in entries {
        let response = client
            .post(format!("{}/api/logs", server.base_url))
            .json(&json!({ "userId": user.id, "date": date, "mood": mood }))
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success());
    }

    let summary: Value = client
        .get(format!("{}/api/logs/{}/summary", server.base_url, user.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let last_day = &summary["last_7_days"][6];
    assert_eq!(last_day["date"], json!(today));
    assert_eq!(last_day["entries"], json!(1));
    assert_eq!(last_day["avg_mood"], json!(4.0));
}

#[tokio::test]
async fn http_log_for_unknown_user_is_rejected() {
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/logs", server.base_url))
        .json(&json!({ "userId": 555555, "mood": 3 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn http_serves_landing_page_and_static_files() {
    let server = shared_server().await;
    let client = Client::new();

    let index = client.get(format!("{}/", server.base_url)).send().await.unwrap();
    assert!(index.status().is_success());
    assert!(index.text().await.unwrap().contains("exercise-card"));

    let script = client
        .get(format!("{}/app.js", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(script.status().is_success());
    assert_eq!(script.text().await.unwrap(), "console.log('luna');");

    let exercises: Value = client
        .get(format!("{}/api/exercises", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(exercises.as_array().map(Vec::len), Some(5));
}

#[tokio::test]
async fn client_session_saves_played_exercises() {
    let server = shared_server().await;
    let client = LunaClient::new(server.base_url.clone());

    let mut session = client.login("Antek").await;
    assert!(session.is_online());
    session.progress.complete(GameKind::Drawing, 0);
    session.progress.complete(GameKind::ColorMatch, 1);
    assert!(client.save_progress(&session).await.unwrap());

    let luna::client::Mode::Online(user) = &session.mode else {
        panic!("expected online session");
    };
    let stored = client.fetch_user(user.id).await.unwrap().expect("user row");
    assert_eq!(stored.stars, 2);
    assert_eq!(stored.tactile_score, 10);
    assert_eq!(stored.visual_score, 8);

    let again = client.login("Antek").await;
    assert_eq!(again.progress, session.progress);
}
