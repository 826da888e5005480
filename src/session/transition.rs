//! Pure state transition function

use super::{Effect, Event, Phase, SessionState};
use crate::history::History;
use thiserror::Error;
use uuid::Uuid;

/// Shown when a failure carries no message of its own
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to expand prompt. Please try again.";

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: SessionState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: SessionState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Errors that can occur during transition
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("An expansion is already in progress")]
    Busy,
    #[error("No history entry with id {0}")]
    UnknownHistoryEntry(Uuid),
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
}

/// Pure transition function
///
/// Given the same state, history and event it always produces the same
/// outcome and performs no I/O. History is read-only here; mutations are
/// requested through [`Effect::RecordHistory`].
pub fn transition(
    state: &SessionState,
    history: &History,
    event: Event,
) -> Result<TransitionResult, TransitionError> {
    match (&state.phase, event) {
        // Typing is always allowed, even while a request is in flight
        (_, Event::InputChanged { text }) => Ok(TransitionResult::new(SessionState {
            input: text,
            phase: state.phase.clone(),
        })
        .with_effect(Effect::PublishSnapshot)),

        // Single in-flight request
        (Phase::Submitting { .. }, Event::Submit { .. }) => Err(TransitionError::Busy),

        (_, Event::Submit { input }) => {
            let trimmed = input.trim();
            if trimmed.is_empty() {
                // Blank input is silently ignored
                return Ok(TransitionResult::new(state.clone()));
            }
            let trimmed = trimmed.to_string();
            Ok(TransitionResult::new(SessionState {
                input,
                phase: Phase::Submitting {
                    input: trimmed.clone(),
                },
            })
            .with_effect(Effect::RequestExpansion { input: trimmed })
            .with_effect(Effect::PublishSnapshot))
        }

        (Phase::Submitting { input }, Event::ExpansionSucceeded { result })
            if result.original_input == *input =>
        {
            Ok(TransitionResult::new(state.with_phase(Phase::Displaying {
                result: result.clone(),
            }))
            .with_effect(Effect::RecordHistory { result })
            .with_effect(Effect::PublishSnapshot))
        }

        (Phase::Submitting { .. }, Event::ExpansionFailed { message }) => {
            let message = if message.trim().is_empty() {
                GENERIC_FAILURE_MESSAGE.to_string()
            } else {
                message
            };
            Ok(
                TransitionResult::new(state.with_phase(Phase::Failed { message }))
                    .with_effect(Effect::PublishSnapshot),
            )
        }

        (phase, Event::ExpansionSucceeded { .. } | Event::ExpansionFailed { .. }) => {
            Err(TransitionError::InvalidTransition(format!(
                "expansion outcome while {}",
                phase.name()
            )))
        }

        (Phase::Submitting { .. }, Event::SelectFromHistory { .. }) => Err(TransitionError::Busy),

        (_, Event::SelectFromHistory { id }) => {
            let result = history
                .get(id)
                .cloned()
                .ok_or(TransitionError::UnknownHistoryEntry(id))?;
            Ok(
                TransitionResult::new(state.with_phase(Phase::Displaying { result }))
                    .with_effect(Effect::PublishSnapshot),
            )
        }
    }
}
