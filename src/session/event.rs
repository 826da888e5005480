//! Events that drive the session

use crate::history::ExpansionResult;
use uuid::Uuid;

/// Events that trigger state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    // User events
    InputChanged {
        text: String,
    },
    Submit {
        input: String,
    },
    SelectFromHistory {
        id: Uuid,
    },

    // Expansion outcomes, posted back by the runtime
    ExpansionSucceeded {
        result: ExpansionResult,
    },
    ExpansionFailed {
        message: String,
    },
}
