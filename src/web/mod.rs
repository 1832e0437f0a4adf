pub mod motivation;
pub mod nutrition;
pub mod progress;
pub mod workout;

use crate::state::SharedState;
use axum::{routing::get, Router};

async fn health() -> &'static str {
    "OK"
}

pub fn routes(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/workout", workout::router(state.clone()))
        .nest("/api/nutrition", nutrition::router(state.clone()))
        .nest("/api/progress", progress::router(state.clone()))
        .merge(motivation::router(state))
}
