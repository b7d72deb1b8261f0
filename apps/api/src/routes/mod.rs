pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::info_handler))
        .route("/templates", get(handlers::handle_list_templates))
        .route("/generate", post(handlers::handle_generate))
        .route("/generate-pdf", post(handlers::handle_generate_pdf))
        .with_state(state)
}
