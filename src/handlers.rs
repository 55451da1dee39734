use crate::errors::AppError;
use crate::goals;
use crate::models::{
    CreateGoalRequest, Goal, HealthResponse, Progress, StatusResponse, SummaryResponse,
    UpdateProgressRequest,
};
use crate::state::AppState;
use crate::stats::build_summary;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::{Local, Utc};

pub async fn index() -> Html<String> {
    Html(render_index(&today_string()))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

pub async fn list_goals(State(state): State<AppState>) -> Result<Json<Vec<Goal>>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(goals::list_goals(&data)))
}

pub async fn create_goal(
    State(state): State<AppState>,
    Json(payload): Json<CreateGoalRequest>,
) -> Result<(StatusCode, Json<Goal>), AppError> {
    let title = payload.title.trim();
    if title.is_empty() {
        return Err(AppError::bad_request("title must not be empty"));
    }

    let today = Local::now().date_naive();
    let mut data = state.data.lock().await;
    let goal = goals::create_goal(&mut data, title, payload.description, today);

    // A goal is either fully on disk or absent.
    if let Err(err) = persist_data(&state.data_path, &data).await {
        goals::delete_goal(&mut data, &goal.id);
        return Err(err);
    }

    Ok((StatusCode::CREATED, Json(goal)))
}

pub async fn get_progress(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Progress>>, AppError> {
    let data = state.data.lock().await;
    if !data.goals.contains_key(&id) {
        return Err(AppError::not_found(format!("goal '{id}' not found")));
    }
    Ok(Json(goals::goal_progress(&data, &id)))
}

pub async fn get_summary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SummaryResponse>, AppError> {
    let data = state.data.lock().await;
    let goal = data
        .goals
        .get(&id)
        .ok_or_else(|| AppError::not_found(format!("goal '{id}' not found")))?;
    let rows = goals::goal_progress(&data, &id);
    Ok(Json(build_summary(goal, &rows)))
}

pub async fn update_progress(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateProgressRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    let mut data = state.data.lock().await;
    let prior = match data.progress.get_mut(&id) {
        Some(row) => {
            let prior = row.clone();
            row.completed = payload.completed;
            row.notes = payload.notes;
            prior
        }
        None => return Err(AppError::not_found(format!("progress '{id}' not found"))),
    };

    if let Err(err) = persist_data(&state.data_path, &data).await {
        if let Some(row) = data.progress.get_mut(&id) {
            *row = prior;
        }
        return Err(err);
    }

    Ok(Json(StatusResponse {
        message: "Progress updated successfully".to_string(),
    }))
}

pub async fn delete_goal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StatusResponse>, AppError> {
    let mut data = state.data.lock().await;
    if goals::delete_goal(&mut data, &id) {
        persist_data(&state.data_path, &data).await?;
    }

    Ok(Json(StatusResponse {
        message: "Goal deleted successfully".to_string(),
    }))
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}
