use crate::domain::models::{UserProfile, WorkoutPlan};
use crate::error::ApiError;
use crate::state::SharedState;
use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct GeneratePlanResponse {
    success: bool,
    plan: WorkoutPlan,
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/generate", post(generate))
        .with_state(state)
}

async fn generate(
    State(state): State<SharedState>,
    Json(payload): Json<Value>,
) -> Result<Json<GeneratePlanResponse>, ApiError> {
    let profile: UserProfile =
        serde_json::from_value(payload).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    tracing::debug!(
        days_per_week = profile.days_per_week,
        fitness_level = %profile.fitness_level,
        session_duration = profile.session_duration,
        "generating workout plan"
    );

    let plan = state.coach.generate_plan(&profile, &mut rand::thread_rng());
    Ok(Json(GeneratePlanResponse {
        success: true,
        plan,
    }))
}
