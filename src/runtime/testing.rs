//! Mock implementations for testing
//!
//! These mocks let the runtime run end to end without network I/O.

use crate::expansion::{ExpansionError, Expander};
use crate::llm::LlmError;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

// ============================================================================
// Mock Expander
// ============================================================================

/// Mock expander that returns queued outcomes in order
pub struct MockExpander {
    outcomes: Mutex<VecDeque<Result<String, ExpansionError>>>,
    /// Record of every input the runtime asked to expand
    pub inputs: Mutex<Vec<String>>,
}

impl MockExpander {
    pub fn new() -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::new()),
            inputs: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful expansion
    pub fn queue_ok(&self, expanded: impl Into<String>) {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Ok(expanded.into()));
    }

    /// Queue a failure
    pub fn queue_err(&self, error: ExpansionError) {
        self.outcomes.lock().unwrap().push_back(Err(error));
    }

    pub fn recorded_inputs(&self) -> Vec<String> {
        self.inputs.lock().unwrap().clone()
    }

    fn next_outcome(&self, input: &str) -> Result<String, ExpansionError> {
        self.inputs.lock().unwrap().push(input.to_string());
        self.outcomes.lock().unwrap().pop_front().unwrap_or_else(|| {
            Err(ExpansionError::Upstream(LlmError::network(
                "No mock response queued",
            )))
        })
    }
}

impl Default for MockExpander {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Expander for MockExpander {
    async fn expand(&self, input: &str) -> Result<String, ExpansionError> {
        self.next_outcome(input)
    }
}

// ============================================================================
// Delayed Mock Expander (for in-flight testing)
// ============================================================================

/// Mock expander that holds each request open for a fixed delay
pub struct DelayedMockExpander {
    inner: MockExpander,
    delay: Duration,
}

impl DelayedMockExpander {
    pub fn new(delay: Duration) -> Self {
        Self {
            inner: MockExpander::new(),
            delay,
        }
    }

    pub fn queue_ok(&self, expanded: impl Into<String>) {
        self.inner.queue_ok(expanded);
    }

    pub fn recorded_inputs(&self) -> Vec<String> {
        self.inner.recorded_inputs()
    }
}

#[async_trait]
impl Expander for DelayedMockExpander {
    async fn expand(&self, input: &str) -> Result<String, ExpansionError> {
        let outcome = self.inner.next_outcome(input);
        tokio::time::sleep(self.delay).await;
        outcome
    }
}
