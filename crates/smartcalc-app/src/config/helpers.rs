use anyhow::Result;
use async_trait::async_trait;
use std::env;
use std::sync::Arc;

use smartcalc_llm_api::{ClientFactory, LlmSolver, MathSolver};
use smartcalc_logging::RequestLogger;

use crate::config::ClientConfig;

/// Values of the SMARTCALC_* environment variables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvConfig {
    pub backend: Option<String>,
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub lang: Option<String>,
    pub voice_command: Option<String>,
}

/// Read configuration from SMARTCALC_* environment variables.
/// Empty values are treated as unset.
pub fn get_config_from_env() -> EnvConfig {
    let var = |name: &str| env::var(name).ok().filter(|v| !v.trim().is_empty());

    EnvConfig {
        backend: var("SMARTCALC_BACKEND"),
        api_url: var("SMARTCALC_API_URL"),
        api_key: var("SMARTCALC_API_KEY"),
        model: var("SMARTCALC_MODEL"),
        lang: var("SMARTCALC_LANG"),
        voice_command: var("SMARTCALC_VOICE_COMMAND"),
    }
}

/// Build the solver for a client configuration
pub fn create_solver(config: &ClientConfig, logger: RequestLogger) -> Result<Arc<dyn MathSolver>> {
    let client = ClientFactory::create(
        config.backend,
        config.api_key.clone(),
        config.model.clone(),
        config.api_url.clone(),
        logger,
    )?;
    Ok(Arc::new(LlmSolver::new(client)))
}

/// Solver standing in for a backend that could not be configured.
/// Every solve fails with the configuration problem.
pub struct UnavailableSolver {
    reason: String,
}

impl UnavailableSolver {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

#[async_trait]
impl MathSolver for UnavailableSolver {
    async fn solve(&self, _prompt: &str) -> Result<String> {
        Err(anyhow::anyhow!("Solver unavailable: {}", self.reason))
    }
}
