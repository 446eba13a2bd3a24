//! Intake record: the five free-text fields captured by the form.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the five intake fields, addressable by its JSON wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntakeField {
    Diagnosis,
    HistoryOfTrauma,
    Symptoms,
    HistoryOfProblem,
    TreatmentPlan,
}

impl IntakeField {
    /// Form order.
    pub const ALL: [IntakeField; 5] = [
        IntakeField::Diagnosis,
        IntakeField::HistoryOfTrauma,
        IntakeField::Symptoms,
        IntakeField::HistoryOfProblem,
        IntakeField::TreatmentPlan,
    ];

    pub fn wire_name(self) -> &'static str {
        match self {
            IntakeField::Diagnosis => "diagnosis",
            IntakeField::HistoryOfTrauma => "historyOfTrauma",
            IntakeField::Symptoms => "symptoms",
            IntakeField::HistoryOfProblem => "historyOfProblem",
            IntakeField::TreatmentPlan => "treatmentPlan",
        }
    }

    /// Human-readable label shown next to the form input.
    pub fn label(self) -> &'static str {
        match self {
            IntakeField::Diagnosis => "Diagnosis",
            IntakeField::HistoryOfTrauma => "History of Trauma",
            IntakeField::Symptoms => "Symptoms",
            IntakeField::HistoryOfProblem => "History of Problem",
            IntakeField::TreatmentPlan => "Treatment Plan",
        }
    }

    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.wire_name() == name)
    }
}

impl fmt::Display for IntakeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// A complete intake. Every field is expected to be non-blank once validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeRecord {
    pub diagnosis: String,
    pub history_of_trauma: String,
    pub symptoms: String,
    pub history_of_problem: String,
    pub treatment_plan: String,
}

impl IntakeRecord {
    pub fn field(&self, field: IntakeField) -> &str {
        match field {
            IntakeField::Diagnosis => &self.diagnosis,
            IntakeField::HistoryOfTrauma => &self.history_of_trauma,
            IntakeField::Symptoms => &self.symptoms,
            IntakeField::HistoryOfProblem => &self.history_of_problem,
            IntakeField::TreatmentPlan => &self.treatment_plan,
        }
    }

    pub fn field_mut(&mut self, field: IntakeField) -> &mut String {
        match field {
            IntakeField::Diagnosis => &mut self.diagnosis,
            IntakeField::HistoryOfTrauma => &mut self.history_of_trauma,
            IntakeField::Symptoms => &mut self.symptoms,
            IntakeField::HistoryOfProblem => &mut self.history_of_problem,
            IntakeField::TreatmentPlan => &mut self.treatment_plan,
        }
    }

    /// Fields that are empty or whitespace-only, in form order.
    pub fn missing_fields(&self) -> Vec<IntakeField> {
        IntakeField::ALL
            .into_iter()
            .filter(|f| self.field(*f).trim().is_empty())
            .collect()
    }

    pub fn validate(&self) -> Result<(), IncompleteIntake> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(IncompleteIntake { missing })
        }
    }
}

/// Raised when one or more required fields are absent or blank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing fields: {}", join_fields(.missing))]
pub struct IncompleteIntake {
    pub missing: Vec<IntakeField>,
}

impl IncompleteIntake {
    /// The missing fields by their form labels, e.g. `"Symptoms, Treatment Plan"`.
    pub fn missing_labels(&self) -> String {
        self.missing
            .iter()
            .map(|f| f.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn join_fields(fields: &[IntakeField]) -> String {
    fields
        .iter()
        .map(|f| f.wire_name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The intake as it arrives on the wire. Any field may be absent or null.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeSubmission {
    pub diagnosis: Option<String>,
    pub history_of_trauma: Option<String>,
    pub symptoms: Option<String>,
    pub history_of_problem: Option<String>,
    pub treatment_plan: Option<String>,
}

impl IntakeSubmission {
    /// Converts to a validated `IntakeRecord`. Values are kept verbatim.
    pub fn into_record(self) -> Result<IntakeRecord, IncompleteIntake> {
        let record = IntakeRecord {
            diagnosis: self.diagnosis.unwrap_or_default(),
            history_of_trauma: self.history_of_trauma.unwrap_or_default(),
            symptoms: self.symptoms.unwrap_or_default(),
            history_of_problem: self.history_of_problem.unwrap_or_default(),
            treatment_plan: self.treatment_plan.unwrap_or_default(),
        };
        record.validate()?;
        Ok(record)
    }
}
