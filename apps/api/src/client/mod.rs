//! HTTP client for the assessment service, used by the CLI front end.
//!
//! Mirrors what the browser form does: post the intake as JSON, read back
//! `assessment`, and fetch the PDF export on demand.

pub mod session;

use std::path::Path;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::assessment::handlers::AssessmentPayload;
use crate::assessment::intake::IntakeRecord;
use crate::report::rows::ReportRow;

pub use session::{submit, IntakeSession, Settled, SubmissionToken};

const REQUEST_TIMEOUT_SECS: u64 = 180;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Clone)]
pub struct BridgeClient {
    http: Client,
    base_url: String,
}

impl BridgeClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// POSTs the intake and returns the generated assessment text.
    pub async fn submit(&self, record: &IntakeRecord) -> Result<String, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/generate-assessment", self.base_url))
            .json(record)
            .send()
            .await?;

        let response = check_status(response).await?;
        let payload: AssessmentPayload = response.json().await?;
        Ok(payload.assessment)
    }

    /// Requests the PDF rendering of `assessment`.
    pub async fn export_pdf(&self, assessment: &str) -> Result<Vec<u8>, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/assessment/pdf", self.base_url))
            .json(&AssessmentPayload {
                assessment: assessment.to_string(),
            })
            .send()
            .await?;

        let response = check_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|e| e.error)
        .unwrap_or(body);
    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

/// Formats rows as a two-column plain-text table.
pub fn format_table(rows: &[ReportRow]) -> String {
    let width = rows
        .iter()
        .map(|r| r.label.chars().count())
        .chain(std::iter::once("Field".len()))
        .max()
        .unwrap_or(0);

    let mut out = format!("{:<width$}  Details\n", "Field");
    out.push_str(&format!("{}  {}\n", "-".repeat(width), "-".repeat(7)));
    for row in rows {
        out.push_str(&format!("{:<width$}  {}\n", row.label, row.detail));
    }
    out
}

/// Writes exported PDF bytes to `path`, creating parent directories.
pub fn save_export(path: &Path, bytes: &[u8]) -> Result<(), ClientError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}
