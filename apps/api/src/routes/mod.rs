pub mod ats_score;
pub mod health;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/ats_score", get(ats_score::handle_ats_score))
        .with_state(state)
}
