//! Inference client: the single point of entry for all calls to the hosted
//! text-generation model.
//!
//! ARCHITECTURAL RULE: No other module may call the inference API directly.
//! All generation requests MUST go through `TextGenerator`.
//!
//! Generation parameters are hardcoded; only the endpoint is configurable.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};

/// Default hosted model endpoint.
pub const DEFAULT_INFERENCE_URL: &str = "https://api-inference.huggingface.co/models/gpt2";
/// Returned in place of the model output when the upstream payload carries no text.
pub const NO_ASSESSMENT_PLACEHOLDER: &str = "No assessment generated.";

const MAX_LENGTH: u32 = 300;
const TEMPERATURE: f32 = 0.7;
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
    options: InferenceOptions,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    max_length: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct InferenceOptions {
    use_cache: bool,
}

/// A backend that turns a prompt into generated text.
///
/// Carried in `AppState` as `Arc<dyn TextGenerator>`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Client for the hosted inference API. One POST per call, no retries.
#[derive(Clone)]
pub struct InferenceClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl InferenceClient {
    pub fn new(api_key: String, endpoint: String) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            api_key,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TextGenerator for InferenceClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = InferenceRequest {
            inputs: prompt,
            parameters: GenerationParameters {
                max_length: MAX_LENGTH,
                temperature: TEMPERATURE,
            },
            options: InferenceOptions { use_cache: false },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Inference API returned {}: {}", status, body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        debug!("Inference API response: {} bytes", body.len());

        Ok(extract_generated_text(&body))
    }
}

/// Pulls `[0].generated_text` out of an inference response body.
///
/// Anything else (non-JSON, not an array, missing or empty field) yields
/// `NO_ASSESSMENT_PLACEHOLDER`.
pub fn extract_generated_text(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get(0)?
                .get("generated_text")?
                .as_str()
                .map(str::to_owned)
        })
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NO_ASSESSMENT_PLACEHOLDER.to_string())
}
