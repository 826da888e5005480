//! Effects produced by state transitions

use crate::history::ExpansionResult;

/// Effects to be executed after a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue one expansion call for the trimmed input
    RequestExpansion { input: String },

    /// Prepend a successful result to history
    RecordHistory { result: ExpansionResult },

    /// Push the new state to the presentation layer
    PublishSnapshot,
}
