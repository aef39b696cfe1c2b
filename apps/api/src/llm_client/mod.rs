/// LLM client: the pluggable text-generation capability behind recommendations.
///
/// Every provider satisfies one contract, "prompt string in, completion string
/// out". The concrete provider is chosen by `AI_PROVIDER` at startup and
/// injected into the recommendation engine as `Arc<dyn CompletionProvider>`.
///
/// Calls are attempted exactly once. The HTTP client carries a request timeout.
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use thiserror::Error;

use crate::config::{AiConfig, AiProvider};

pub mod huggingface;
#[cfg(test)]
pub mod mock;
pub mod openai;
pub mod prompts;

pub use huggingface::HuggingFaceProvider;
pub use openai::OpenAiProvider;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// A text-generation service. Implementations must not retry.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Short provider label for logs.
    fn name(&self) -> &'static str;

    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Builds the configured provider once at process start.
pub fn build_provider(config: &AiConfig) -> Result<Arc<dyn CompletionProvider>> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .context("Failed to build HTTP client")?;

    let provider: Arc<dyn CompletionProvider> = match config.provider {
        AiProvider::OpenAi => Arc::new(OpenAiProvider::new(
            client,
            config.api_key.clone(),
            config.model.clone(),
        )),
        AiProvider::HuggingFace => Arc::new(HuggingFaceProvider::new(
            client,
            config.api_key.clone(),
            config.model.clone(),
        )),
    };

    Ok(provider)
}

/// Turns a non-success response into `LlmError::Api`, preferring the message
/// extracted by `extract` over the raw body.
async fn api_error(response: Response, extract: fn(&str) -> Option<String>) -> LlmError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let message = extract(&body).unwrap_or(body);
    LlmError::Api { status, message }
}

/// Rejects blank completions.
fn non_empty(text: Option<String>) -> Result<String, LlmError> {
    match text {
        Some(t) if !t.trim().is_empty() => Ok(t),
        _ => Err(LlmError::EmptyContent),
    }
}
