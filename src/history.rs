//! In-memory expansion history
//!
//! Newest first, unbounded, append-only. Lives for the session only.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One completed expansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionResult {
    pub id: Uuid,
    pub original_input: String,
    pub expanded_prompt: String,
    pub created_at: DateTime<Utc>,
}

impl ExpansionResult {
    pub fn new(original_input: impl Into<String>, expanded_prompt: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            original_input: original_input.into(),
            expanded_prompt: expanded_prompt.into(),
            created_at: Utc::now(),
        }
    }

    /// First `max_chars` characters of the prompt followed by an ellipsis
    pub fn preview(&self, max_chars: usize) -> String {
        let head: String = self.expanded_prompt.chars().take(max_chars).collect();
        format!("{head}...")
    }
}

#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<ExpansionResult>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a result. No dedup, no cap.
    pub fn record(&mut self, result: ExpansionResult) {
        self.entries.insert(0, result);
    }

    pub fn all(&self) -> &[ExpansionResult] {
        &self.entries
    }

    pub fn get(&self, id: Uuid) -> Option<&ExpansionResult> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_prepends() {
        let mut history = History::new();
        let first = ExpansionResult::new("one", "first prompt");
        let second = ExpansionResult::new("two", "second prompt");

        history.record(first.clone());
        history.record(second.clone());

        assert_eq!(history.len(), 2);
        assert_eq!(history.all(), &[second, first]);
    }

    #[test]
    fn duplicate_inputs_kept() {
        let mut history = History::new();
        history.record(ExpansionResult::new("same", "a"));
        history.record(ExpansionResult::new("same", "b"));
        assert_eq!(history.len(), 2);
        assert_ne!(history.all()[0].id, history.all()[1].id);
    }

    #[test]
    fn get_by_id() {
        let mut history = History::new();
        let entry = ExpansionResult::new("in", "out");
        history.record(entry.clone());

        assert_eq!(history.get(entry.id), Some(&entry));
        assert!(history.get(Uuid::new_v4()).is_none());
    }

    #[test]
    fn preview_counts_chars_not_bytes() {
        let entry = ExpansionResult::new("in", "ñandú selfie");
        assert_eq!(entry.preview(5), "ñandú...");
        assert_eq!(entry.preview(500), "ñandú selfie...");
    }
}
