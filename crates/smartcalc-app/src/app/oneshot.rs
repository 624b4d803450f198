use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::json;

use smartcalc_core::ImportAction;

use crate::app::setup::request_logger;
use crate::config::{create_solver, AppConfig};
use crate::messages::Locale;
use crate::session::{SmartCalc, SolveOutcome};
use crate::voice::VoiceInput;

/// Press `keys` on a fresh calculator
pub fn run_keys(keys: &str, locale: Locale) -> Result<SmartCalc> {
    let mut calc = SmartCalc::new(locale, VoiceInput::unsupported());
    calc.press_str(keys)
        .with_context(|| format!("Invalid key sequence '{}'", keys))?;
    Ok(calc)
}

/// Machine-readable view of a calculator after a key sequence
pub fn keys_report(calc: &SmartCalc) -> serde_json::Value {
    json!({
        "state": calc.state().snapshot(),
        "pending": calc.pending(),
        "display": calc.display(),
        "history": calc.history(),
    })
}

/// `smartcalc keys`: print the display (or JSON) after pressing keys
pub fn run_keys_mode(keys: &str, json_output: bool, config: &AppConfig) -> Result<()> {
    let calc = run_keys(keys, config.locale)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&keys_report(&calc))?);
        return Ok(());
    }

    let pending = calc.pending();
    if !pending.is_empty() {
        println!("{}", pending.bright_black());
    }
    println!("{}", calc.display().bold());
    Ok(())
}

/// Answer of a single solve and what it would import
#[derive(Debug)]
pub struct SolveReport {
    pub answer: String,
    pub import: Option<ImportAction>,
}

/// One solve round trip with the configured backend
pub async fn solve_once(config: &AppConfig, prompt: &str) -> Result<SolveReport> {
    let solver = create_solver(&config.client_config, request_logger(config))?;
    let mut calc = SmartCalc::new(config.locale, VoiceInput::unsupported());
    calc.set_prompt(prompt);

    match calc.solve(solver.as_ref()).await {
        SolveOutcome::Answered => Ok(SolveReport {
            answer: calc.panel().result.clone().unwrap_or_default(),
            import: calc.import_preview(),
        }),
        SolveOutcome::Skipped => Err(anyhow::anyhow!("Prompt is empty")),
        SolveOutcome::Failed(e) => Err(e),
    }
}

/// `smartcalc solve`: print the answer and the import preview
pub async fn run_solve_mode(config: &AppConfig, prompt: &str) -> Result<()> {
    match solve_once(config, prompt).await {
        Ok(report) => {
            println!("{}", config.locale.answer_title().bright_blue().bold());
            println!("{}", report.answer);
            if let Some(action) = report.import {
                println!("{} {}", "↳".bright_black(), action.describe().bright_green());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", config.locale.solve_failed().bright_red());
            if config.verbose {
                eprintln!("{}", format!("🔧 DEBUG: solve failed: {:#}", e).bright_black());
            }
            Err(anyhow::anyhow!("Solve failed"))
        }
    }
}
