//! Form-side state for one intake: field values, the loading flag, and the
//! latest result.
//!
//! Submissions are tracked with a single-slot token. Starting a new submission
//! supersedes any in-flight one; a response that settles with an older token
//! is discarded.

use thiserror::Error;
use tracing::warn;

use crate::assessment::intake::{IncompleteIntake, IntakeField, IntakeRecord};
use crate::client::{BridgeClient, ClientError};
use crate::report::rows::{parse_rows, ReportRow};

/// Identifies one submission. Only the most recently issued token can settle.
#[derive(Debug, PartialEq, Eq)]
pub struct SubmissionToken(u64);

/// What `IntakeSession::settle` did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    /// The assessment was stored.
    Updated,
    /// The request failed; the previous result is kept.
    Failed,
    /// A newer submission was started; the outcome was ignored.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown intake field '{0}'")]
pub struct UnknownField(pub String);

#[derive(Debug, Default)]
pub struct IntakeSession {
    record: IntakeRecord,
    assessment: Option<String>,
    loading: bool,
    latest: u64,
}

impl IntakeSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates a field by its wire name (`diagnosis`, `historyOfTrauma`, ...).
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), UnknownField> {
        let field = IntakeField::from_wire_name(name).ok_or_else(|| UnknownField(name.to_string()))?;
        self.set(field, value);
        Ok(())
    }

    pub fn set(&mut self, field: IntakeField, value: impl Into<String>) {
        *self.record.field_mut(field) = value.into();
    }

    pub fn record(&self) -> &IntakeRecord {
        &self.record
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn assessment(&self) -> Option<&str> {
        self.assessment.as_deref()
    }

    /// Rows of the current assessment, empty when there is none.
    pub fn rows(&self) -> Vec<ReportRow> {
        self.assessment.as_deref().map(parse_rows).unwrap_or_default()
    }

    /// Starts a submission: checks required fields, raises the loading flag,
    /// and returns the token plus a snapshot of the record to send.
    pub fn begin_submit(&mut self) -> Result<(SubmissionToken, IntakeRecord), IncompleteIntake> {
        self.record.validate()?;
        self.latest += 1;
        self.loading = true;
        Ok((SubmissionToken(self.latest), self.record.clone()))
    }

    /// Applies the outcome of the submission identified by `token`.
    pub fn settle(
        &mut self,
        token: SubmissionToken,
        outcome: Result<String, ClientError>,
    ) -> Settled {
        if token.0 != self.latest {
            return Settled::Stale;
        }
        self.loading = false;
        match outcome {
            Ok(assessment) => {
                self.assessment = Some(assessment);
                Settled::Updated
            }
            Err(e) => {
                warn!("Assessment request failed: {e}");
                Settled::Failed
            }
        }
    }
}

/// Runs one full submission of `session` through `client`.
pub async fn submit(
    session: &mut IntakeSession,
    client: &BridgeClient,
) -> Result<Settled, IncompleteIntake> {
    let (token, record) = session.begin_submit()?;
    let outcome = client.submit(&record).await;
    Ok(session.settle(token, outcome))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> IntakeSession {
        let mut session = IntakeSession::new();
        for field in IntakeField::ALL {
            session.set(field, format!("{} value", field.label()));
        }
        session
    }

    fn failure() -> ClientError {
        ClientError::Status {
            status: 500,
            message: "Failed to generate assessment.".into(),
        }
    }

    #[test]
    fn test_set_field_by_wire_name() {
        let mut session = IntakeSession::new();
        session.set_field("historyOfTrauma", "Assault, 2021").unwrap();
        assert_eq!(session.record().history_of_trauma, "Assault, 2021");
    }

    #[test]
    fn test_set_field_rejects_unknown_name() {
        let mut session = IntakeSession::new();
        let err = session.set_field("allergies", "none").unwrap_err();
        assert_eq!(err, UnknownField("allergies".into()));
    }

    #[test]
    fn test_begin_submit_requires_every_field() {
        let mut session = IntakeSession::new();
        session.set(IntakeField::Diagnosis, "PTSD");
        let err = session.begin_submit().unwrap_err();
        assert_eq!(err.missing.len(), 4);
        assert!(!session.is_loading());
    }

    #[test]
    fn test_submit_cycle_sets_and_clears_loading() {
        let mut session = filled();
        let (token, record) = session.begin_submit().unwrap();
        assert!(session.is_loading());
        assert_eq!(&record, session.record());

        let settled = session.settle(token, Ok("Diagnosis: PTSD".into()));
        assert_eq!(settled, Settled::Updated);
        assert!(!session.is_loading());
        assert_eq!(session.assessment(), Some("Diagnosis: PTSD"));
    }

    #[test]
    fn test_failure_keeps_previous_assessment() {
        let mut session = filled();
        let (token, _) = session.begin_submit().unwrap();
        session.settle(token, Ok("Diagnosis: PTSD".into()));

        let (token, _) = session.begin_submit().unwrap();
        assert_eq!(session.settle(token, Err(failure())), Settled::Failed);
        assert!(!session.is_loading());
        assert_eq!(session.assessment(), Some("Diagnosis: PTSD"));
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut session = filled();
        let (first, _) = session.begin_submit().unwrap();
        let (second, _) = session.begin_submit().unwrap();

        assert_eq!(session.settle(first, Ok("Diagnosis: old".into())), Settled::Stale);
        assert!(session.is_loading());
        assert_eq!(session.assessment(), None);

        assert_eq!(session.settle(second, Ok("Diagnosis: new".into())), Settled::Updated);
        assert!(!session.is_loading());
        assert_eq!(session.assessment(), Some("Diagnosis: new"));
    }

    #[test]
    fn test_late_stale_response_cannot_overwrite_newer_result() {
        let mut session = filled();
        let (first, _) = session.begin_submit().unwrap();
        let (second, _) = session.begin_submit().unwrap();

        session.settle(second, Ok("Diagnosis: new".into()));
        assert_eq!(session.settle(first, Ok("Diagnosis: old".into())), Settled::Stale);
        assert_eq!(session.assessment(), Some("Diagnosis: new"));
    }

    #[test]
    fn test_rows_follow_current_assessment() {
        let mut session = filled();
        assert!(session.rows().is_empty());

        let (token, _) = session.begin_submit().unwrap();
        session.settle(token, Ok("Diagnosis: Anxiety\nnoise\nSymptoms: Insomnia".into()));
        let rows = session.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].label, "Symptoms");
        assert_eq!(rows[1].detail, "Insomnia");
    }
}
