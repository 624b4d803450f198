use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One completed operation: what was computed and what came out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub expression: String,
    pub result: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl HistoryItem {
    /// Create an item stamped with the current time
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// History entry for an answered AI prompt
    pub fn from_ai(prompt: &str, answer: impl Into<String>) -> Self {
        Self::new(format!("AI: {}", prompt), answer)
    }
}

/// Completed operations, newest first. Unbounded; only [`History::clear`]
/// removes entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct History {
    items: VecDeque<HistoryItem>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a completed operation
    pub fn record(&mut self, item: HistoryItem) {
        self.items.push_front(item);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Most recent entry
    pub fn latest(&self) -> Option<&HistoryItem> {
        self.items.front()
    }

    /// Entries from newest to oldest
    pub fn iter(&self) -> impl Iterator<Item = &HistoryItem> {
        self.items.iter()
    }
}
