use anyhow::Result;

pub mod helpers;
pub use helpers::{create_solver, get_config_from_env, EnvConfig, UnavailableSolver};

// Re-export types from smartcalc-llm-api
pub use smartcalc_llm_api::{parse_model_spec, BackendType};

use crate::cli::Cli;
use crate::messages::Locale;

/// Solver backend selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub backend: BackendType,

    /// Custom endpoint; `None` uses the backend default
    pub api_url: Option<String>,

    /// `None` falls back to the backend's provider key variables
    pub api_key: Option<String>,

    /// `None` uses the backend default model
    pub model: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend: BackendType::Gemini,
            api_url: None,
            api_key: None,
            model: None,
        }
    }
}

impl ClientConfig {
    /// Model that will actually be requested
    pub fn effective_model(&self) -> String {
        self.model
            .clone()
            .unwrap_or_else(|| self.backend.default_model().to_string())
    }
}

/// Application configuration derived from CLI arguments and environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub client_config: ClientConfig,
    pub locale: Locale,
    pub voice_command: Option<String>,
    pub verbose: bool,
    pub log_requests: bool,
}

/// Merge CLI flags over `SMARTCALC_*` environment values.
///
/// Precedence: CLI flags > SMARTCALC_* env > defaults. Provider key
/// variables (GEMINI_API_KEY etc.) are consulted later, when the client is
/// built.
pub fn resolve_config(cli: &Cli, env: &EnvConfig) -> Result<AppConfig> {
    let model_spec = cli.model.clone().or_else(|| env.model.clone());
    let (model, spec_backend, spec_url) = match model_spec.as_deref() {
        Some(spec) => {
            let (model, backend, url) = parse_model_spec(spec);
            (Some(model).filter(|m| !m.is_empty()), backend, url)
        }
        None => (None, None, None),
    };

    let cli_backend = cli.backend.as_deref().map(parse_backend).transpose()?;
    let env_backend = env.backend.as_deref().map(parse_backend).transpose()?;
    let api_url = cli.api_url.clone().or(spec_url).or_else(|| env.api_url.clone());

    let backend = cli_backend
        .or(spec_backend)
        .or(env_backend)
        .or_else(|| api_url.as_deref().map(smartcalc_llm_api::ClientFactory::detect_backend))
        .unwrap_or(BackendType::Gemini);

    let api_key = cli.api_key.clone().or_else(|| env.api_key.clone());

    let locale = match cli.lang.as_deref().or(env.lang.as_deref()) {
        Some(lang) => Locale::from_str(lang)
            .ok_or_else(|| anyhow::anyhow!("Unsupported language '{}' (expected ar or en)", lang))?,
        None => Locale::default(),
    };

    Ok(AppConfig {
        client_config: ClientConfig {
            backend,
            api_url,
            api_key,
            model,
        },
        locale,
        voice_command: cli.voice_command.clone().or_else(|| env.voice_command.clone()),
        verbose: cli.verbose,
        log_requests: cli.log_requests,
    })
}

fn parse_backend(name: &str) -> Result<BackendType> {
    BackendType::from_str(name).ok_or_else(|| {
        let known: Vec<&str> = BackendType::all().iter().map(|b| b.as_str()).collect();
        anyhow::anyhow!("Unknown backend '{}' (expected one of: {})", name, known.join(", "))
    })
}
