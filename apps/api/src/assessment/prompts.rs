// Prompt text for the assessment bridge.

use crate::assessment::intake::IntakeRecord;

/// Opening instruction sent ahead of the intake fields.
pub const ASSESSMENT_INSTRUCTION: &str =
    "Based on the following information, generate a comprehensive medical assessment:";

/// Builds the generation prompt. Field values are interpolated verbatim in a
/// single pass: no escaping, no length cap, no placeholder re-expansion.
pub fn build_assessment_prompt(record: &IntakeRecord) -> String {
    format!(
        "{ASSESSMENT_INSTRUCTION}\n\n\
         Diagnosis: {}\n\
         History of Trauma: {}\n\
         Symptoms: {}\n\
         History of the Problem: {}\n\
         Treatment Plan: {}\n",
        record.diagnosis,
        record.history_of_trauma,
        record.symptoms,
        record.history_of_problem,
        record.treatment_plan,
    )
}
