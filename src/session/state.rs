//! Session state types

use crate::history::ExpansionResult;

/// What the session is doing right now
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing displayed yet
    #[default]
    Idle,
    /// One expansion in flight for the given trimmed input
    Submitting { input: String },
    /// A result is on screen, fresh or picked from history
    Displaying { result: ExpansionResult },
    /// The last attempt failed; the result pane is empty
    Failed { message: String },
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Submitting { .. } => "submitting",
            Phase::Displaying { .. } => "displaying",
            Phase::Failed { .. } => "failed",
        }
    }
}

/// Transient view state for one session
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    /// Current contents of the input field, untrimmed
    pub input: String,
    pub phase: Phase,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_phase(&self, phase: Phase) -> Self {
        Self {
            input: self.input.clone(),
            phase,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting { .. })
    }

    pub fn displayed(&self) -> Option<&ExpansionResult> {
        match &self.phase {
            Phase::Displaying { result } => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed { message } => Some(message.as_str()),
            _ => None,
        }
    }
}
