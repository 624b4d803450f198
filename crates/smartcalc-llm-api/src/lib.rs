//! # smartcalc-llm-api
//!
//! The text-in/text-out solver behind the calculator's AI panel. Supported
//! backends:
//! - Google Gemini (default)
//! - Anthropic (Claude)
//! - OpenAI, Groq and llama.cpp through the OpenAI-compatible chat API
//!
//! A solve is one request and one response. There is no streaming, no
//! retry and no client-side timeout.
//!
//! ## Example
//!
//! ```rust,no_run
//! use smartcalc_llm_api::{BackendType, ClientFactory, LlmSolver, MathSolver};
//! use smartcalc_logging::RequestLogger;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ClientFactory::create(
//!         BackendType::Gemini,
//!         Some("your-api-key".to_string()),
//!         None,
//!         None,
//!         RequestLogger::disabled(),
//!     )?;
//!
//!     let solver = LlmSolver::new(client);
//!     let answer = solver.solve("15% of 1500").await?;
//!     println!("{}", answer);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod solver;

#[cfg(test)]
mod tests;

pub use client::{ChatMessage, LlmClient};
pub use client::anthropic::AnthropicClient;
pub use client::gemini::GeminiClient;
pub use client::openai_compat::OpenAiCompatClient;

pub use config::{
    BackendType,
    ClientFactory,
    ANTHROPIC_API_URL,
    GEMINI_API_URL,
    GROQ_API_URL,
    OPENAI_API_URL,
    normalize_api_url,
    parse_model_spec,
};

pub use solver::{LlmSolver, MathSolver, SYSTEM_PROMPT};
