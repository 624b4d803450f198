use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// CLI arguments for smartcalc
#[derive(Parser, Debug)]
#[command(name = "smartcalc")]
#[command(about = "SmartCalc - keypad calculator with an AI math assistant")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Solver backend (gemini, anthropic, openai, groq, llama)
    /// Can also be set via SMARTCALC_BACKEND
    #[arg(long, value_name = "BACKEND")]
    pub backend: Option<String>,

    /// API URL for the solver backend (required for llama.cpp)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// API key for the solver backend
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Model name; also accepts `model@backend` and `model@backend(url)`
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Interface language (ar, en). Default: ar
    #[arg(long, value_name = "LANG")]
    pub lang: Option<String>,

    /// Speech transcriber command for voice input; prints one transcript per line.
    /// Receives the speech language in SMARTCALC_SPEECH_LANG
    #[arg(long, value_name = "COMMAND")]
    pub voice_command: Option<String>,

    /// Enable verbose debug output (shows HTTP requests, responses and solver errors)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Write every solver request and response to ~/.smartcalc/logs
    #[arg(long)]
    pub log_requests: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press a sequence of keypad keys and print the display (e.g. "2+3*4=")
    Keys {
        /// Keys to press: digits, '.', + - * / × ÷, '=', '%', 'n' or '+/-' (sign), 'c' or 'AC' (clear)
        #[arg(allow_hyphen_values = true)]
        keys: String,
        /// Print calculator state and history as JSON
        #[arg(long)]
        json: bool,
    },
    /// Ask the AI assistant a single question
    Solve {
        /// The question, e.g. "15% of 1500"
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        prompt: Vec<String>,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
