pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::documents::handlers as document_handlers;
use crate::scoring::handlers as scoring_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/resumes/upload",
            post(document_handlers::handle_upload_resume),
        )
        .route(
            "/api/v1/jobs/upload",
            post(document_handlers::handle_upload_job),
        )
        .route(
            "/api/v1/resumes/improve",
            post(scoring_handlers::handle_improve),
        )
        .with_state(state)
}
