use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use smartcalc_logging::RequestLogger;

use crate::config::BackendType;

pub mod anthropic;
pub mod gemini;
pub mod openai_compat;

/// Chat message (OpenAI-style roles: system, user, assistant)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system".to_string(), content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_string(), content: content.into() }
    }
}

/// LLM client trait - unified interface for all providers
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Single non-streaming completion; returns the assistant's text
    async fn chat_completion(&self, messages: &[ChatMessage]) -> Result<String>;

    /// Model name sent with each request
    fn model(&self) -> &str;

    fn backend(&self) -> BackendType;
}

/// POST a JSON body and return the response text.
///
/// Non-success statuses become errors carrying the provider's error body.
pub(crate) async fn post_json(
    request: reqwest::RequestBuilder,
    url: &str,
    body: &serde_json::Value,
    logger: &RequestLogger,
    model: &str,
    api_key: &str,
    provider: &str,
) -> Result<String> {
    let timestamp = logger.request(url, model, body, api_key);

    let response = request
        .header("Content-Type", "application/json")
        .json(body)
        .send()
        .await
        .with_context(|| format!("Failed to reach {} at {}", provider, url))?;

    let status = response.status();
    let response_text = response
        .text()
        .await
        .with_context(|| format!("Failed to read {} response body", provider))?;
    logger.response(&status, &response_text, model, timestamp);

    if !status.is_success() {
        return Err(anyhow::anyhow!("{} API error: {} - {}", provider, status, response_text));
    }

    Ok(response_text)
}
