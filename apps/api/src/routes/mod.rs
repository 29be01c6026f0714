pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::screening::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/ai/resume/filter", post(handlers::handle_filter_resumes))
        .route("/tpo/jobs", get(handlers::handle_list_jobs))
        .with_state(state)
}
