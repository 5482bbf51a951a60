use crate::models::{DailyLog, DailyLogRow, NewLogRequest, SaveProgressRequest, User};
use chrono::NaiveDate;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::str::FromStr;
use tracing::info;

pub const RECENT_LOG_LIMIT: i64 = 30;

const CREATE_USERS: &str = "
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        stars INTEGER NOT NULL DEFAULT 0,
        visual_score INTEGER NOT NULL DEFAULT 0,
        auditory_score INTEGER NOT NULL DEFAULT 0,
        tactile_score INTEGER NOT NULL DEFAULT 0,
        memory_score INTEGER NOT NULL DEFAULT 0
    )";

const CREATE_DAILY_LOGS: &str = "
    CREATE TABLE IF NOT EXISTS daily_logs (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL REFERENCES users(id),
        date TEXT NOT NULL,
        mood INTEGER NOT NULL,
        tags TEXT NOT NULL DEFAULT '[]',
        note TEXT NOT NULL DEFAULT ''
    )";

const USER_COLUMNS: &str =
    "id, name, stars, visual_score, auditory_score, tactile_score, memory_score";

pub async fn connect(url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .foreign_keys(true);

    // Every connection to `:memory:` opens its own database.
    let max_connections = if url.contains(":memory:") { 1 } else { 5 };
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    init_schema(&pool).await?;
    info!("database ready at {url}");
    Ok(pool)
}

pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_USERS).execute(pool).await?;
    sqlx::query(CREATE_DAILY_LOGS).execute(pool).await?;
    Ok(())
}

/// Returns the user named `name`, creating it on first sight. The flag is
/// true when this call inserted the row.
pub async fn login(pool: &SqlitePool, name: &str) -> Result<(User, bool), sqlx::Error> {
    let inserted = sqlx::query("INSERT INTO users (name, stars) VALUES (?, 0) ON CONFLICT(name) DO NOTHING")
        .bind(name)
        .execute(pool)
        .await?;

    let user = sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE name = ?"))
        .bind(name)
        .fetch_one(pool)
        .await?;

    Ok((user, inserted.rows_affected() == 1))
}

pub async fn find_user(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Overwrites the stored counters. Returns false when no such user exists.
pub async fn save_progress(pool: &SqlitePool, update: &SaveProgressRequest) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE users SET stars = ?, visual_score = ?, auditory_score = ?, tactile_score = ?, memory_score = ?
         WHERE id = ?",
    )
    .bind(update.stars)
    .bind(update.visual)
    .bind(update.auditory)
    .bind(update.tactile)
    .bind(update.memory)
    .bind(update.user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn insert_log(pool: &SqlitePool, date: &str, log: &NewLogRequest) -> Result<i64, sqlx::Error> {
    let tags = serde_json::to_string(&log.tags).map_err(|err| sqlx::Error::Encode(Box::new(err)))?;
    let result = sqlx::query("INSERT INTO daily_logs (user_id, date, mood, tags, note) VALUES (?, ?, ?, ?, ?)")
        .bind(log.user_id)
        .bind(date)
        .bind(log.mood)
        .bind(tags)
        .bind(&log.note)
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

/// Newest entries first, at most `limit` of them.
pub async fn recent_logs(pool: &SqlitePool, user_id: i64, limit: i64) -> Result<Vec<DailyLog>, sqlx::Error> {
    let rows = sqlx::query_as::<_, DailyLogRow>(
        "SELECT id, user_id, date, mood, tags, note FROM daily_logs
         WHERE user_id = ? ORDER BY date DESC, id DESC LIMIT ?",
    )
    .bind(user_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    decode_logs(rows)
}

/// Entries dated within `from..=to`, oldest first.
pub async fn logs_between(
    pool: &SqlitePool,
    user_id: i64,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<DailyLog>, sqlx::Error> {
    let rows = sqlx::query_as::<_, DailyLogRow>(
        "SELECT id, user_id, date, mood, tags, note FROM daily_logs
         WHERE user_id = ? AND date >= ? AND date <= ? ORDER BY date, id",
    )
    .bind(user_id)
    .bind(from.to_string())
    .bind(to.to_string())
    .fetch_all(pool)
    .await?;

    decode_logs(rows)
}

fn decode_logs(rows: Vec<DailyLogRow>) -> Result<Vec<DailyLog>, sqlx::Error> {
    rows.into_iter()
        .map(|row| DailyLog::try_from(row).map_err(|err| sqlx::Error::Decode(Box::new(err))))
        .collect()
}
