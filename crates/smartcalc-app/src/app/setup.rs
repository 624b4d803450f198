use anyhow::Result;
use colored::Colorize;
use std::sync::Arc;

use smartcalc_llm_api::MathSolver;
use smartcalc_logging::{mask_secret, RequestLogger};

use crate::cli::Cli;
use crate::config::{create_solver, get_config_from_env, resolve_config, AppConfig, UnavailableSolver};
use crate::voice::{CommandRecognizer, SpeechRecognizer, VoiceInput};

/// Set up application configuration from CLI arguments and environment
pub fn setup_from_cli(cli: &Cli) -> Result<AppConfig> {
    let config = resolve_config(cli, &get_config_from_env())?;

    if config.verbose {
        let client = &config.client_config;
        println!("{}", format!("🔧 DEBUG: backend: {}", client.backend.as_str()).bright_black());
        println!("{}", format!("🔧 DEBUG: model: {}", client.effective_model()).bright_black());
        println!("{}", format!("🔧 DEBUG: API URL: {:?}", client.api_url).bright_black());
        println!(
            "{}",
            format!("🔧 DEBUG: API key: {}", mask_secret(client.api_key.as_deref().unwrap_or_default())).bright_black()
        );
        println!("{}", format!("🔧 DEBUG: language: {}", config.locale.code()).bright_black());
    }

    Ok(config)
}

/// Request logger matching the verbosity flags
pub fn request_logger(config: &AppConfig) -> RequestLogger {
    RequestLogger::new(config.verbose, config.log_requests)
}

/// Solver for interactive use. A backend that cannot be configured still
/// yields a solver; its solves fail like any other unavailable service.
pub fn solver_or_unavailable(config: &AppConfig) -> Arc<dyn MathSolver> {
    match create_solver(&config.client_config, request_logger(config)) {
        Ok(solver) => solver,
        Err(e) => {
            eprintln!("{} {}", "⚠️  AI assistant unavailable:".yellow(), e);
            Arc::new(UnavailableSolver::new(e.to_string()))
        }
    }
}

/// Voice input for the configured transcriber command, if any
pub fn voice_input(config: &AppConfig) -> VoiceInput {
    let recognizer = config.voice_command.as_ref().map(|command| {
        Box::new(CommandRecognizer::new(command.clone(), config.locale.speech_lang())) as Box<dyn SpeechRecognizer>
    });
    VoiceInput::new(recognizer)
}
