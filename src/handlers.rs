use crate::errors::AppError;
use crate::games::catalogue;
use crate::models::{
    DailyLog, ExerciseInfo, LogCreatedResponse, LoginRequest, LoginResponse, MoodSummaryResponse, NewLogRequest,
    SaveProgressRequest, SuccessResponse, User,
};
use crate::state::AppState;
use crate::stats::{build_summary_at, summary_window};
use crate::storage::{self, RECENT_LOG_LIMIT};
use crate::ui::render_index;
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    response::Html,
};
use chrono::{Local, NaiveDate};
use tracing::info;

pub async fn index() -> Html<String> {
    Html(render_index(&catalogue()))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn exercises() -> Json<Vec<ExerciseInfo>> {
    Json(catalogue())
}

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AppError> {
    let Json(payload) = payload?;
    let name = payload.name.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(AppError::bad_request("name is required"));
    }

    let (user, created) = storage::login(&state.pool, name).await?;
    let message = if created {
        info!(user_id = user.id, "created user {name}");
        format!("Welcome, {name}!")
    } else {
        format!("Welcome back, {name}!")
    };

    Ok(Json(LoginResponse { message, user }))
}

pub async fn save_progress(
    State(state): State<AppState>,
    payload: Result<Json<SaveProgressRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, AppError> {
    let Json(payload) = payload?;
    if !storage::save_progress(&state.pool, &payload).await? {
        return Err(AppError::not_found(format!("user {} not found", payload.user_id)));
    }

    Ok(Json(SuccessResponse { success: true }))
}

/// Unknown ids answer `null` rather than an error.
pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Option<User>>, AppError> {
    let Path(id) = id?;
    Ok(Json(storage::find_user(&state.pool, id).await?))
}

pub async fn create_log(
    State(state): State<AppState>,
    payload: Result<Json<NewLogRequest>, JsonRejection>,
) -> Result<Json<LogCreatedResponse>, AppError> {
    let Json(payload) = payload?;
    let date = match payload.date.as_deref().map(str::trim) {
        Some(date) if !date.is_empty() => NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| AppError::bad_request("date must be YYYY-MM-DD"))?
            .to_string(),
        _ => today_string(),
    };

    if storage::find_user(&state.pool, payload.user_id).await?.is_none() {
        return Err(AppError::not_found(format!("user {} not found", payload.user_id)));
    }

    let id = storage::insert_log(&state.pool, &date, &payload).await?;
    Ok(Json(LogCreatedResponse { success: true, id }))
}

pub async fn list_logs(
    State(state): State<AppState>,
    user_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<DailyLog>>, AppError> {
    let Path(user_id) = user_id?;
    Ok(Json(storage::recent_logs(&state.pool, user_id, RECENT_LOG_LIMIT).await?))
}

pub async fn mood_summary(
    State(state): State<AppState>,
    user_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MoodSummaryResponse>, AppError> {
    let Path(user_id) = user_id?;
    let today = Local::now().date_naive();
    let (from, to) = summary_window(today);
    let logs = storage::logs_between(&state.pool, user_id, from, to).await?;
    Ok(Json(build_summary_at(today, &logs)))
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}
