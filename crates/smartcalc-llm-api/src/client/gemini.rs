use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use smartcalc_logging::RequestLogger;

use crate::client::{post_json, ChatMessage, LlmClient};
use crate::config::BackendType;

/// Google Gemini client using the `generateContent` REST endpoint
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
    logger: RequestLogger,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String, base_url: String, logger: RequestLogger) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            api_key,
            model,
            base_url,
            logger,
            client: reqwest::Client::new(),
        }
    }

    /// Full endpoint URL. A base URL that already names a method is used as-is.
    pub fn get_generate_url(&self) -> String {
        if self.base_url.contains(":generateContent") {
            self.base_url.clone()
        } else {
            format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
        }
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn chat_completion(&self, messages: &[ChatMessage]) -> Result<String> {
        let url = self.get_generate_url();
        let body = build_request(messages);

        let request = self.client.post(&url).header("x-goog-api-key", &self.api_key);

        let response_text = post_json(
            request,
            &url,
            &body,
            &self.logger,
            &self.model,
            &self.api_key,
            BackendType::Gemini.display_name(),
        )
        .await?;

        parse_response(&response_text)
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn backend(&self) -> BackendType {
        BackendType::Gemini
    }
}

/// Build a `generateContent` request body.
///
/// System messages become `systemInstruction`; assistant turns use the
/// `model` role.
pub fn build_request(messages: &[ChatMessage]) -> Value {
    let system: Vec<Value> = messages
        .iter()
        .filter(|m| m.role == "system")
        .map(|m| serde_json::json!({ "text": m.content }))
        .collect();

    let contents: Vec<Value> = messages
        .iter()
        .filter(|m| m.role != "system")
        .map(|m| {
            let role = if m.role == "assistant" { "model" } else { "user" };
            serde_json::json!({
                "role": role,
                "parts": [{ "text": m.content }]
            })
        })
        .collect();

    let mut body = serde_json::json!({
        "contents": contents,
        "generationConfig": { "temperature": 0.2 }
    });
    if !system.is_empty() {
        body["systemInstruction"] = serde_json::json!({ "parts": system });
    }
    body
}

/// Concatenate the text parts of the first candidate
pub fn parse_response(response_text: &str) -> Result<String> {
    let response: Value = serde_json::from_str(response_text)
        .context("Gemini response is not valid JSON")?;

    if let Some(reason) = response["promptFeedback"]["blockReason"].as_str() {
        return Err(anyhow::anyhow!("Prompt blocked by Gemini: {}", reason));
    }

    let parts = response["candidates"][0]["content"]["parts"]
        .as_array()
        .ok_or_else(|| anyhow::anyhow!("No candidates in response"))?;

    let text: String = parts.iter().filter_map(|part| part["text"].as_str()).collect();
    if text.is_empty() {
        return Err(anyhow::anyhow!("No text content in response"));
    }
    Ok(text)
}
