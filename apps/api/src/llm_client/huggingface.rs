//! Hugging Face inference API provider (single-shot text generation).

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::llm_client::prompts::JOB_MATCHER_SYSTEM;
use crate::llm_client::{api_error, non_empty, CompletionProvider, LlmError};

const HF_API_BASE: &str = "https://api-inference.huggingface.co/models";
pub const DEFAULT_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.2";
const TEMPERATURE: f32 = 0.5;
const MAX_NEW_TOKENS: u32 = 1024;

#[derive(Debug, Serialize)]
struct GenerationRequest {
    inputs: String,
    parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    max_new_tokens: u32,
    temperature: f32,
    return_full_text: bool,
}

/// The inference API answers with a list for most text-generation models and a
/// bare object for some.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GenerationResponse {
    Batch(Vec<Generated>),
    Single(Generated),
}

#[derive(Debug, Deserialize)]
struct Generated {
    generated_text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HfError {
    error: String,
}

#[derive(Clone)]
pub struct HuggingFaceProvider {
    client: Client,
    api_key: String,
    model: String,
}

impl HuggingFaceProvider {
    pub fn new(client: Client, api_key: String, model: String) -> Self {
        Self {
            client,
            api_key,
            model,
        }
    }

    fn endpoint(&self) -> String {
        format!("{HF_API_BASE}/{}", self.model)
    }

    fn request(prompt: &str) -> GenerationRequest {
        GenerationRequest {
            inputs: format!("{JOB_MATCHER_SYSTEM}\n\n{prompt}"),
            parameters: GenerationParameters {
                max_new_tokens: MAX_NEW_TOKENS,
                temperature: TEMPERATURE,
                return_full_text: false,
            },
        }
    }
}

fn generated_text(response: GenerationResponse) -> Result<String, LlmError> {
    let text = match response {
        GenerationResponse::Batch(items) => items.into_iter().next().and_then(|g| g.generated_text),
        GenerationResponse::Single(item) => item.generated_text,
    };
    non_empty(text)
}

fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<HfError>(body).ok().map(|e| e.error)
}

#[async_trait]
impl CompletionProvider for HuggingFaceProvider {
    fn name(&self) -> &'static str {
        "huggingface"
    }

    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&Self::request(prompt))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response, error_message).await);
        }

        let body = response.text().await?;
        debug!("Hugging Face call succeeded: {} bytes", body.len());

        generated_text(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_includes_model_path() {
        let provider = HuggingFaceProvider::new(
            Client::new(),
            "key".to_string(),
            DEFAULT_MODEL.to_string(),
        );
        assert_eq!(
            provider.endpoint(),
            "https://api-inference.huggingface.co/models/mistralai/Mistral-7B-Instruct-v0.2"
        );
    }

    #[test]
    fn test_request_prepends_system_instruction() {
        let body = serde_json::to_value(HuggingFaceProvider::request("match me")).unwrap();
        let inputs = body["inputs"].as_str().unwrap();
        assert!(inputs.starts_with(JOB_MATCHER_SYSTEM));
        assert!(inputs.ends_with("match me"));
        assert_eq!(body["parameters"]["return_full_text"], false);
        assert_eq!(body["parameters"]["max_new_tokens"], 1024);
    }

    #[test]
    fn test_batch_response_uses_first_generation() {
        let response: GenerationResponse =
            serde_json::from_str(r#"[{"generated_text": "first"}, {"generated_text": "second"}]"#)
                .unwrap();
        assert_eq!(generated_text(response).unwrap(), "first");
    }

    #[test]
    fn test_single_object_response_is_accepted() {
        let response: GenerationResponse =
            serde_json::from_str(r#"{"generated_text": "only"}"#).unwrap();
        assert_eq!(generated_text(response).unwrap(), "only");
    }

    #[test]
    fn test_empty_batch_is_empty_content() {
        let response: GenerationResponse = serde_json::from_str("[]").unwrap();
        assert!(matches!(generated_text(response), Err(LlmError::EmptyContent)));
    }

    #[test]
    fn test_error_message_is_extracted() {
        assert_eq!(
            error_message(r#"{"error": "Model is currently loading"}"#).as_deref(),
            Some("Model is currently loading")
        );
    }
}
