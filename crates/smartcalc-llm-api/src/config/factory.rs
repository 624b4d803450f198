use anyhow::Result;
use smartcalc_logging::RequestLogger;
use std::env;
use std::sync::Arc;

use crate::client::anthropic::AnthropicClient;
use crate::client::gemini::GeminiClient;
use crate::client::openai_compat::OpenAiCompatClient;
use crate::client::LlmClient;
use crate::config::{get_default_url_for_backend, normalize_api_url, BackendType};

/// Client factory for creating LLM clients
pub struct ClientFactory;

impl ClientFactory {
    /// Create an LLM client for the given backend.
    ///
    /// # Arguments
    /// * `backend` - The backend type to use
    /// * `api_key` - API key; falls back to the backend's environment variables
    /// * `model` - Model name; falls back to the backend default
    /// * `api_url` - Custom API URL; falls back to the backend default
    /// * `logger` - Request logging settings for the client
    ///
    /// # Errors
    /// Fails when the backend needs an API key and none is configured, or
    /// when llama.cpp is selected without a URL.
    pub fn create(
        backend: BackendType,
        api_key: Option<String>,
        model: Option<String>,
        api_url: Option<String>,
        logger: RequestLogger,
    ) -> Result<Arc<dyn LlmClient>> {
        let model = model
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| backend.default_model().to_string());
        let api_key = api_key
            .filter(|k| !k.is_empty())
            .or_else(|| Self::api_key_from_env(backend));

        if backend.requires_api_key() && api_key.is_none() {
            return Err(anyhow::anyhow!(
                "No API key configured for {} (set {} or SMARTCALC_API_KEY)",
                backend.display_name(),
                backend.api_key_env_vars().join(" or ")
            ));
        }

        let custom_url = api_url.is_some();
        let url = api_url
            .or_else(|| get_default_url_for_backend(&backend))
            .ok_or_else(|| anyhow::anyhow!("llama.cpp backend requires an API URL (e.g. http://localhost:8080)"))?;

        let client: Arc<dyn LlmClient> = match backend {
            BackendType::Gemini => Arc::new(GeminiClient::new(api_key.unwrap_or_default(), model, url, logger)),
            BackendType::Anthropic => Arc::new(AnthropicClient::new(api_key.unwrap_or_default(), model, url, logger)),
            BackendType::OpenAI | BackendType::Groq | BackendType::Llama => {
                // Custom endpoints may be given as a bare host
                let url = if custom_url { normalize_api_url(&url) } else { url };
                Arc::new(OpenAiCompatClient::new(backend, api_key, model, url, logger))
            }
        };

        Ok(client)
    }

    /// Guess the backend from a URL: anything mentioning a hosted provider
    /// maps to it, other URLs are treated as llama.cpp servers.
    pub fn detect_backend(api_url: &str) -> BackendType {
        if api_url.contains("generativelanguage") || api_url.contains("googleapis") {
            BackendType::Gemini
        } else if api_url.contains("anthropic") {
            BackendType::Anthropic
        } else if api_url.contains("groq") {
            BackendType::Groq
        } else if api_url.contains("openai") {
            BackendType::OpenAI
        } else {
            BackendType::Llama
        }
    }

    fn api_key_from_env(backend: BackendType) -> Option<String> {
        backend
            .api_key_env_vars()
            .iter()
            .find_map(|var| env::var(var).ok().filter(|v| !v.is_empty()))
    }
}
