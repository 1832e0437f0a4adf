use crate::state::SharedState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

fn default_context() -> String {
    "general".to_string()
}

#[derive(Deserialize)]
struct MotivationQuery {
    #[serde(default = "default_context")]
    context: String,
}

#[derive(Serialize)]
struct MotivationResponse {
    success: bool,
    message: String,
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/api/motivation", get(get_motivation))
        .with_state(state)
}

async fn get_motivation(
    Query(query): Query<MotivationQuery>,
    State(state): State<SharedState>,
) -> Json<MotivationResponse> {
    let message = state.coach.motivation(&query.context, &mut rand::thread_rng());
    Json(MotivationResponse {
        success: true,
        message,
    })
}
