pub mod health;
pub mod page;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::assessment::handlers::handle_generate_assessment;
use crate::errors::AppError;
use crate::report::handlers::handle_export_pdf;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::intake_form_page))
        .route("/health", get(health::health_handler))
        // Assessment Bridge
        .route("/api/generate-assessment", post(handle_generate_assessment))
        // Report export
        .route("/api/assessment/pdf", post(handle_export_pdf))
        .fallback(not_found)
        .with_state(state)
}
