use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub stars: i64,
    pub visual_score: i64,
    pub auditory_score: i64,
    pub tactile_score: i64,
    pub memory_score: i64,
}

/// Row shape of `daily_logs`; `tags` holds a JSON array.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DailyLogRow {
    pub id: i64,
    pub user_id: i64,
    pub date: String,
    pub mood: i64,
    pub tags: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLog {
    pub id: i64,
    pub user_id: i64,
    pub date: String,
    pub mood: i64,
    pub tags: Vec<String>,
    pub note: String,
}

impl TryFrom<DailyLogRow> for DailyLog {
    type Error = serde_json::Error;

    fn try_from(row: DailyLogRow) -> Result<Self, Self::Error> {
        let tags = if row.tags.trim().is_empty() {
            Vec::new()
        } else {
            serde_json::from_str(&row.tags)?
        };
        Ok(Self {
            id: row.id,
            user_id: row.user_id,
            date: row.date,
            mood: row.mood,
            tags,
            note: row.note,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveProgressRequest {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub stars: i64,
    pub visual: i64,
    pub auditory: i64,
    pub tactile: i64,
    pub memory: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLogRequest {
    #[serde(rename = "userId")]
    pub user_id: i64,
    #[serde(default)]
    pub date: Option<String>,
    pub mood: i64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LogCreatedResponse {
    pub success: bool,
    pub id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DailyMoodPoint {
    pub date: String,
    pub entries: u32,
    pub avg_mood: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WeeklyMoodPoint {
    pub week: String,
    pub start_date: String,
    pub end_date: String,
    pub entries: u32,
    pub avg_mood: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TagCount {
    pub tag: String,
    pub count: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MoodSummaryResponse {
    pub last_7_days: Vec<DailyMoodPoint>,
    pub weekly_averages: Vec<WeeklyMoodPoint>,
    pub top_tags: Vec<TagCount>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExerciseInfo {
    pub category: String,
    pub title: String,
    pub game: String,
}
