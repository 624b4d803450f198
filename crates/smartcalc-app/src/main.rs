use anyhow::Result;
use clap::{CommandFactory, Parser};

use smartcalc::app::{run_keys_mode, run_repl_mode, run_solve_mode, setup_from_cli};
use smartcalc::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        clap_complete::generate(*shell, &mut Cli::command(), "smartcalc", &mut std::io::stdout());
        return Ok(());
    }

    // Set up application configuration from CLI and environment
    let config = setup_from_cli(&cli)?;

    match &cli.command {
        Some(Commands::Keys { keys, json }) => run_keys_mode(keys, *json, &config),
        Some(Commands::Solve { prompt }) => run_solve_mode(&config, &prompt.join(" ")).await,
        Some(Commands::Completions { .. }) => Ok(()),
        None => run_repl_mode(config).await,
    }
}
