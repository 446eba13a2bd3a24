//! Bridge between a validated intake and the upstream text generator.

use tracing::info;

use crate::assessment::intake::IntakeRecord;
use crate::assessment::prompts::build_assessment_prompt;
use crate::errors::AppError;
use crate::llm_client::TextGenerator;

/// Generates the assessment narrative for one intake.
///
/// One upstream call per invocation. A non-success upstream response or a
/// transport failure surfaces as `AppError::Upstream`.
pub async fn generate_assessment(
    record: &IntakeRecord,
    generator: &dyn TextGenerator,
) -> Result<String, AppError> {
    let prompt = build_assessment_prompt(record);
    info!(prompt_chars = prompt.chars().count(), "Requesting assessment from upstream model");

    let assessment = generator.generate(&prompt).await?;
    info!(assessment_chars = assessment.chars().count(), "Assessment generated");

    Ok(assessment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::prompts::ASSESSMENT_INSTRUCTION;
    use crate::llm_client::stub::StubGenerator;

    fn record() -> IntakeRecord {
        IntakeRecord {
            diagnosis: "PTSD".into(),
            history_of_trauma: "Combat deployment".into(),
            symptoms: "Nightmares".into(),
            history_of_problem: "Two years".into(),
            treatment_plan: "Prolonged exposure therapy".into(),
        }
    }

    #[tokio::test]
    async fn test_generate_assessment_relays_text() {
        let stub = StubGenerator::replying("Diagnosis: PTSD");
        let text = generate_assessment(&record(), &stub).await.unwrap();
        assert_eq!(text, "Diagnosis: PTSD");
    }

    #[tokio::test]
    async fn test_generate_assessment_sends_one_prompt() {
        let stub = StubGenerator::replying("ok");
        generate_assessment(&record(), &stub).await.unwrap();

        let prompts = stub.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].starts_with(ASSESSMENT_INSTRUCTION));
        assert!(prompts[0].contains("Treatment Plan: Prolonged exposure therapy"));
    }

    #[tokio::test]
    async fn test_generate_assessment_upstream_failure() {
        let stub = StubGenerator::failing(500);
        let err = generate_assessment(&record(), &stub).await.unwrap_err();
        assert!(matches!(err, AppError::Upstream(_)));
    }
}
