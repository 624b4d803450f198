use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use smartcalc_logging::RequestLogger;

use crate::client::{post_json, ChatMessage, LlmClient};
use crate::config::BackendType;

const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 2000;

/// Anthropic client using the native Messages API
pub struct AnthropicClient {
    api_key: String,
    model: String,
    base_url: String,
    logger: RequestLogger,
    client: reqwest::Client,
}

impl AnthropicClient {
    pub fn new(api_key: String, model: String, base_url: String, logger: RequestLogger) -> Self {
        // Ensure base_url doesn't end with a slash
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            api_key,
            model,
            base_url,
            logger,
            client: reqwest::Client::new(),
        }
    }

    fn get_messages_url(&self) -> String {
        if self.base_url.ends_with("/v1/messages") {
            self.base_url.clone()
        } else {
            format!("{}/v1/messages", self.base_url)
        }
    }
}

#[async_trait]
impl LlmClient for AnthropicClient {
    async fn chat_completion(&self, messages: &[ChatMessage]) -> Result<String> {
        let url = self.get_messages_url();
        let body = build_request(&self.model, messages);

        let request = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION);

        let response_text = post_json(
            request,
            &url,
            &body,
            &self.logger,
            &self.model,
            &self.api_key,
            BackendType::Anthropic.display_name(),
        )
        .await?;

        parse_response(&response_text)
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn backend(&self) -> BackendType {
        BackendType::Anthropic
    }
}

/// Build a Messages API request body.
///
/// System messages are lifted into the top-level `system` field; any role
/// other than user/assistant is sent as user.
pub fn build_request(model: &str, messages: &[ChatMessage]) -> Value {
    let system: Vec<&str> = messages
        .iter()
        .filter(|m| m.role == "system")
        .map(|m| m.content.as_str())
        .collect();

    let conversation: Vec<Value> = messages
        .iter()
        .filter(|m| m.role != "system")
        .map(|m| {
            let role = if m.role == "assistant" { "assistant" } else { "user" };
            serde_json::json!({
                "role": role,
                "content": [{ "type": "text", "text": m.content }]
            })
        })
        .collect();

    let mut body = serde_json::json!({
        "model": model,
        "max_tokens": MAX_TOKENS,
        "messages": conversation
    });
    if !system.is_empty() {
        body["system"] = Value::String(system.join("\n\n"));
    }
    body
}

/// Concatenate the text blocks of a Messages API response
pub fn parse_response(response_text: &str) -> Result<String> {
    let response: Value = serde_json::from_str(response_text)
        .context("Anthropic response is not valid JSON")?;

    let blocks = response["content"]
        .as_array()
        .ok_or_else(|| anyhow::anyhow!("No content in response"))?;

    let text: String = blocks
        .iter()
        .filter(|block| block["type"] == "text")
        .filter_map(|block| block["text"].as_str())
        .collect();

    if text.is_empty() {
        return Err(anyhow::anyhow!("No text content in response"));
    }
    Ok(text)
}
