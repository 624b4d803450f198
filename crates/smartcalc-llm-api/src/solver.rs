use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::client::{ChatMessage, LlmClient};

/// Instructions sent ahead of every question
pub const SYSTEM_PROMPT: &str = "You are a helpful math assistant inside a calculator app. \
Solve the user's problem and answer in the same language the user wrote in. \
Keep the answer concise: show the key steps briefly, then state the final result clearly. \
When the answer is a number, end with the plain expression or number so it can be imported \
into the calculator (for example `225` or `1500 × 0.15`).";

/// Text-in/text-out problem solver.
///
/// The AI panel only depends on this seam, so tests can swap the network
/// backed solver for a canned one.
#[async_trait]
pub trait MathSolver: Send + Sync {
    /// Answer a natural-language math question
    async fn solve(&self, prompt: &str) -> Result<String>;
}

/// Solver that forwards each question to an LLM as a single chat turn
pub struct LlmSolver {
    client: Arc<dyn LlmClient>,
}

impl LlmSolver {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }

    /// Messages sent for one question
    pub fn build_messages(&self, prompt: &str) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(prompt),
        ]
    }
}

#[async_trait]
impl MathSolver for LlmSolver {
    async fn solve(&self, prompt: &str) -> Result<String> {
        let messages = self.build_messages(prompt);
        let answer = self.client.chat_completion(&messages).await?;
        Ok(answer.trim().to_string())
    }
}
