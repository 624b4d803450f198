pub mod factory;
pub use factory::ClientFactory;

/// Backend type for the solver model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendType {
    Gemini,
    Anthropic,
    OpenAI,
    Groq,
    Llama,
}

impl BackendType {
    /// Parse backend type from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "gemini" | "google" => Some(Self::Gemini),
            "anthropic" | "claude" => Some(Self::Anthropic),
            "openai" => Some(Self::OpenAI),
            "groq" => Some(Self::Groq),
            "llama" | "llamacpp" | "llama.cpp" | "llama-cpp" => Some(Self::Llama),
            _ => None,
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::Anthropic => "anthropic",
            Self::OpenAI => "openai",
            Self::Groq => "groq",
            Self::Llama => "llama",
        }
    }

    /// Human-readable provider name for messages
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Gemini => "Gemini",
            Self::Anthropic => "Anthropic",
            Self::OpenAI => "OpenAI",
            Self::Groq => "Groq",
            Self::Llama => "llama.cpp",
        }
    }

    /// Model used when none is configured
    pub fn default_model(&self) -> &'static str {
        match self {
            Self::Gemini => DEFAULT_GEMINI_MODEL,
            Self::Anthropic => DEFAULT_ANTHROPIC_MODEL,
            Self::OpenAI => DEFAULT_OPENAI_MODEL,
            Self::Groq => DEFAULT_GROQ_MODEL,
            // llama.cpp serves whatever model it was started with
            Self::Llama => "local",
        }
    }

    /// Provider-specific environment variables holding the API key, in
    /// lookup order
    pub fn api_key_env_vars(&self) -> &'static [&'static str] {
        match self {
            Self::Gemini => &["GEMINI_API_KEY", "GOOGLE_API_KEY", "API_KEY"],
            Self::Anthropic => &["ANTHROPIC_API_KEY", "ANTHROPIC_AUTH_TOKEN"],
            Self::OpenAI => &["OPENAI_API_KEY"],
            Self::Groq => &["GROQ_API_KEY"],
            Self::Llama => &[],
        }
    }

    /// Whether requests are rejected without an API key
    pub fn requires_api_key(&self) -> bool {
        !matches!(self, Self::Llama)
    }

    pub fn all() -> [Self; 5] {
        [Self::Gemini, Self::Anthropic, Self::OpenAI, Self::Groq, Self::Llama]
    }
}

/// Default Gemini API base URL
pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";

/// Default Anthropic API URL
pub const ANTHROPIC_API_URL: &str = "https://api.anthropic.com";

/// Default OpenAI API URL
pub const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Default Groq API URL
pub const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-5-sonnet-20241022";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_GROQ_MODEL: &str = "openai/gpt-oss-120b";

/// Get the default URL for a given backend type
pub fn get_default_url_for_backend(backend: &BackendType) -> Option<String> {
    match backend {
        BackendType::Gemini => Some(GEMINI_API_URL.to_string()),
        BackendType::Anthropic => Some(ANTHROPIC_API_URL.to_string()),
        BackendType::OpenAI => Some(OPENAI_API_URL.to_string()),
        BackendType::Groq => Some(GROQ_API_URL.to_string()),
        BackendType::Llama => None, // llama.cpp has no default URL
    }
}

/// Parse a model specification: `model@backend(api_url)`, `model@backend` or `model`.
/// Returns (model_name, backend, api_url).
pub fn parse_model_spec(spec: &str) -> (String, Option<BackendType>, Option<String>) {
    let (model, backend_part) = match spec.split_once('@') {
        Some((model, rest)) => (model, Some(rest)),
        None => (spec, None),
    };

    let mut backend = None;
    let mut api_url = None;
    if let Some(backend_part) = backend_part {
        if let Some((backend_name, url)) = backend_part.split_once('(') {
            backend = BackendType::from_str(backend_name);
            let url = url.strip_suffix(')').unwrap_or(url);
            if !url.is_empty() {
                api_url = Some(url.to_string());
            }
        } else {
            backend = BackendType::from_str(backend_part);
        }
    }

    (model.to_string(), backend, api_url)
}

/// Normalize API URL by ensuring it has the correct path for OpenAI-compatible endpoints
pub fn normalize_api_url(url: &str) -> String {
    // If URL already contains a path with "completions", use it as-is
    if url.contains("/completions") || url.contains("/chat") {
        return url.to_string();
    }

    if url.ends_with('/') {
        format!("{}v1/chat/completions", url)
    } else {
        format!("{}/v1/chat/completions", url)
    }
}
