//! SmartCalc application library
//!
//! The keypad calculator screen with its history and AI assistant panel,
//! plus the configuration and terminal front end around it.

pub mod app;
pub mod cli;
pub mod config;
pub mod messages;
pub mod session;
pub mod voice;

#[cfg(test)]
mod tests;

pub use app::{run_repl_mode, setup_from_cli};
pub use cli::{Cli, Commands};
pub use config::{AppConfig, ClientConfig};
pub use messages::Locale;
pub use session::{AiPanel, SmartCalc, SolveOutcome};
pub use voice::{CommandRecognizer, SessionId, SpeechEvent, SpeechRecognizer, VoiceError, VoiceInput};
