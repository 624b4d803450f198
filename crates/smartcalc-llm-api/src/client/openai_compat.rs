use anyhow::{Context, Result};
use async_trait::async_trait;
use smartcalc_logging::RequestLogger;

use crate::client::{post_json, ChatMessage, LlmClient};
use crate::config::BackendType;

/// Client for OpenAI-compatible chat completion endpoints.
///
/// Serves OpenAI itself, Groq and self-hosted llama.cpp servers; only the
/// URL, key and backend label differ.
pub struct OpenAiCompatClient {
    backend: BackendType,
    api_key: Option<String>,
    model: String,
    api_url: String,
    logger: RequestLogger,
    client: reqwest::Client,
}

impl OpenAiCompatClient {
    pub fn new(
        backend: BackendType,
        api_key: Option<String>,
        model: String,
        api_url: String,
        logger: RequestLogger,
    ) -> Self {
        Self {
            backend,
            api_key: api_key.filter(|k| !k.is_empty()),
            model,
            api_url,
            logger,
            client: reqwest::Client::new(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl LlmClient for OpenAiCompatClient {
    async fn chat_completion(&self, messages: &[ChatMessage]) -> Result<String> {
        let body = build_request(&self.model, messages);

        let mut request = self.client.post(&self.api_url);
        if let Some(key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {}", key));
        }

        let response_text = post_json(
            request,
            &self.api_url,
            &body,
            &self.logger,
            &self.model,
            self.api_key.as_deref().unwrap_or_default(),
            self.backend.display_name(),
        )
        .await?;

        parse_response(&response_text)
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn backend(&self) -> BackendType {
        self.backend
    }
}

/// Build a chat completions request body
pub fn build_request(model: &str, messages: &[ChatMessage]) -> serde_json::Value {
    serde_json::json!({
        "model": model,
        "messages": messages,
        "temperature": 0.2,
        "max_tokens": 2000
    })
}

/// Extract the assistant text from a chat completions response
pub fn parse_response(response_text: &str) -> Result<String> {
    let chat_response: serde_json::Value = serde_json::from_str(response_text)
        .context("Chat completions response is not valid JSON")?;

    chat_response["choices"][0]["message"]["content"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("No content in response"))
}
