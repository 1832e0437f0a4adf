use crate::domain::models::{ProgressSummary, WorkoutData};
use crate::error::ApiError;
use crate::state::SharedState;
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Deserialize)]
struct LogWorkoutRequest {
    user_id: String,
    #[serde(default)]
    workout_data: WorkoutData,
}

#[derive(Serialize)]
struct LogWorkoutResponse {
    success: bool,
}

fn default_metric() -> String {
    "strength".to_string()
}

fn default_time_range() -> String {
    "30days".to_string()
}

#[derive(Deserialize)]
struct StatsQuery {
    #[serde(default = "default_metric")]
    metric: String,
    #[serde(default = "default_time_range")]
    time_range: String,
}

#[derive(Serialize)]
struct StatsResponse {
    success: bool,
    stats: ProgressSummary,
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/log", post(log_workout))
        .route("/stats/:user_id", get(stats))
        .with_state(state)
}

fn parse_user_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::BadRequest(format!("invalid user id: {raw}")))
}

async fn log_workout(
    State(state): State<SharedState>,
    Json(payload): Json<Value>,
) -> Result<Json<LogWorkoutResponse>, ApiError> {
    let request: LogWorkoutRequest =
        serde_json::from_value(payload).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let user_id = parse_user_id(&request.user_id)?;

    state.coach.record_workout(user_id, &request.workout_data).await?;
    Ok(Json(LogWorkoutResponse { success: true }))
}

async fn stats(
    Path(user_id): Path<String>,
    Query(query): Query<StatsQuery>,
    State(state): State<SharedState>,
) -> Result<Json<StatsResponse>, ApiError> {
    let user_id = parse_user_id(&user_id)?;

    let stats = state
        .coach
        .progress_stats(user_id, &query.metric, &query.time_range)
        .await?;
    Ok(Json(StatsResponse {
        success: true,
        stats,
    }))
}
