//! Session state machine
//!
//! Elm-style: a pure transition function over an owned state value, emitting
//! effects for the runtime to execute.

mod effect;
mod event;
mod state;
mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::Event;
pub use state::{Phase, SessionState};
pub use transition::{transition, TransitionError, TransitionResult};
