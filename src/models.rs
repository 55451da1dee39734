use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Dates are ISO `YYYY-MM-DD` strings; `created_at` is RFC 3339.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Progress {
    pub id: String,
    pub goal_id: String,
    pub date: String,
    pub completed: bool,
    pub notes: Option<String>,
}

/// The persisted document: two id-keyed tables.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TrackerData {
    pub goals: BTreeMap<String, Goal>,
    pub progress: BTreeMap<String, Progress>,
}

#[derive(Debug, Deserialize)]
pub struct CreateGoalRequest {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProgressRequest {
    pub completed: bool,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct DayCell {
    pub day: i64,
    pub date: String,
    pub completed: bool,
    pub is_today: bool,
    pub is_future: bool,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub goal_id: String,
    pub total_days: u32,
    pub completed_days: u32,
    pub completion_rate: u8,
    pub current_streak: u32,
    pub best_streak: u32,
    pub elapsed_percent: u8,
    pub days: Vec<DayCell>,
}
