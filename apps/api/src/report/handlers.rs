//! Axum route handler for PDF export.

use axum::{
    body::Bytes,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::assessment::handlers::{parse_json_object, AssessmentPayload};
use crate::errors::AppError;
use crate::report::pdf::render_pdf;
use crate::report::rows::Report;

pub const EXPORT_FILENAME: &str = "assessment.pdf";

/// POST /api/assessment/pdf
///
/// Renders the given assessment text as a paginated PDF download.
pub async fn handle_export_pdf(body: Bytes) -> Result<Response, AppError> {
    let AssessmentPayload { assessment } = parse_json_object(&body)?;

    if assessment.trim().is_empty() {
        return Err(AppError::Validation("assessment cannot be empty".to_string()));
    }

    let report = Report::parse(assessment);
    let rows = report.rows.len();

    let bytes = tokio::task::spawn_blocking(move || render_pdf(&report))
        .await
        .map_err(|e| AppError::Internal(e.into()))??;

    info!(rows, bytes = bytes.len(), "Rendered assessment PDF");

    Ok((
        [
            (CONTENT_TYPE, "application/pdf".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILENAME}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}
