//! Axum route handlers for the Assessment Bridge.

use axum::{body::Bytes, extract::State, Json};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::assessment::bridge::generate_assessment;
use crate::assessment::intake::IntakeSubmission;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// `{ "assessment": "..." }`: the bridge's success body and the export request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentPayload {
    pub assessment: String,
}

/// Parses a request body that must be a JSON object.
///
/// The `Content-Type` header is not checked. Arrays, scalars and `null` are
/// rejected before deserializing, so a positional array can never fill a struct.
pub(crate) fn parse_json_object<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| AppError::Validation(format!("invalid JSON body: {e}")))?;
    if !value.is_object() {
        return Err(AppError::Validation(
            "request body must be a JSON object".to_string(),
        ));
    }
    serde_json::from_value(value)
        .map_err(|e| AppError::Validation(format!("invalid request body: {e}")))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate-assessment
///
/// Validates the intake, relays it to the upstream model, and returns the
/// generated narrative. Missing or blank fields are rejected before any
/// upstream call is made.
pub async fn handle_generate_assessment(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AssessmentPayload>, AppError> {
    let submission: IntakeSubmission = parse_json_object(&body)?;
    let record = submission.into_record()?;

    info!(
        diagnosis_len = record.diagnosis.len(),
        history_of_trauma_len = record.history_of_trauma.len(),
        symptoms_len = record.symptoms.len(),
        history_of_problem_len = record.history_of_problem.len(),
        treatment_plan_len = record.treatment_plan.len(),
        "Received intake submission"
    );

    let assessment = generate_assessment(&record, state.generator.as_ref()).await?;

    Ok(Json(AssessmentPayload { assessment }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validation_message(err: AppError) -> String {
        match err {
            AppError::Validation(message) => message,
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_json_object_accepts_object() {
        let payload: AssessmentPayload = parse_json_object(br#"{"assessment": "Diagnosis: GAD"}"#).unwrap();
        assert_eq!(payload.assessment, "Diagnosis: GAD");
    }

    #[test]
    fn test_parse_json_object_rejects_positional_array() {
        let err = parse_json_object::<IntakeSubmission>(br#"["a","b","c","d","e"]"#).unwrap_err();
        assert_eq!(validation_message(err), "request body must be a JSON object");
    }

    #[test]
    fn test_parse_json_object_rejects_null_and_scalars() {
        for body in [&b"null"[..], b"42", br#""text""#, b"true"] {
            let err = parse_json_object::<IntakeSubmission>(body).unwrap_err();
            assert_eq!(validation_message(err), "request body must be a JSON object");
        }
    }

    #[test]
    fn test_parse_json_object_reports_syntax_errors() {
        let err = parse_json_object::<IntakeSubmission>(b"{not json").unwrap_err();
        assert!(validation_message(err).starts_with("invalid JSON body"));
    }

    #[test]
    fn test_parse_json_object_reports_type_errors() {
        let err = parse_json_object::<AssessmentPayload>(br#"{"assessment": 7}"#).unwrap_err();
        assert!(validation_message(err).starts_with("invalid request body"));
    }
}
