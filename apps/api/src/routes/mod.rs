pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::extraction::handlers::handle_parse_resume;
use crate::state::AppState;
use crate::uploads::handle_upload_logo;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health_handler))
        .route("/health", get(health::health_handler))
        .route("/parse-resume", post(handle_parse_resume))
        .route("/upload-logo", post(handle_upload_logo))
        .with_state(state)
}
