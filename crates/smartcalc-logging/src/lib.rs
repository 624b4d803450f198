// Logging module - request/response debug output for the AI solver
pub mod request_logger;

use anyhow::{Context, Result};
use std::path::PathBuf;

pub use request_logger::{
    log_request,
    log_request_to_file,
    log_response,
    log_response_to_file,
    RequestLogger,
};

/// Safely truncate a string to a maximum number of characters
pub fn safe_truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        // Reserve space for "..." suffix
        let trunc_chars = max_chars.saturating_sub(3);
        format!("{}...", s.chars().take(trunc_chars).collect::<String>())
    }
}

/// Show only the first few characters of a secret
pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return "(none)".to_string();
    }
    format!("{}***", secret.chars().take(4).collect::<String>())
}

/// Get or create the base smartcalc directory (~/.smartcalc)
pub fn get_smartcalc_dir() -> Result<PathBuf> {
    let home_dir = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .context("Failed to get home directory")?;

    let smartcalc_dir = PathBuf::from(home_dir).join(".smartcalc");

    if !smartcalc_dir.exists() {
        std::fs::create_dir_all(&smartcalc_dir)
            .context("Failed to create smartcalc directory")?;
    }

    Ok(smartcalc_dir)
}

/// Get or create the logs directory (~/.smartcalc/logs)
pub fn get_logs_dir() -> Result<PathBuf> {
    let logs_dir = get_smartcalc_dir()?.join("logs");

    if !logs_dir.exists() {
        std::fs::create_dir_all(&logs_dir)
            .context("Failed to create logs directory")?;
    }

    Ok(logs_dir)
}
