use crate::domain::models::{BodyMetrics, NutritionTarget};
use crate::error::ApiError;
use crate::state::SharedState;
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Deserialize)]
struct NutritionRequest {
    #[serde(default)]
    metrics: BodyMetrics,
    #[serde(default)]
    activity_level: Option<String>,
    #[serde(default)]
    goal: Option<String>,
}

#[derive(Serialize)]
struct NutritionResponse {
    success: bool,
    plan: NutritionTarget,
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/calculate", post(calculate))
        .with_state(state)
}

async fn calculate(
    State(state): State<SharedState>,
    Json(payload): Json<Value>,
) -> Result<Json<NutritionResponse>, ApiError> {
    let request: NutritionRequest =
        serde_json::from_value(payload).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let plan = state.coach.nutrition_targets(
        &request.metrics,
        request.activity_level.as_deref().unwrap_or("moderate"),
        request.goal.as_deref().unwrap_or("maintain"),
    );
    Ok(Json(NutritionResponse {
        success: true,
        plan,
    }))
}
