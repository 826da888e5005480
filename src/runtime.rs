//! Session runtime
//!
//! Owns the session state and history, feeds events through the pure
//! transition function and executes the resulting effects. The presentation
//! layer talks to it only through a [`SessionHandle`].

mod executor;

#[cfg(test)]
pub mod testing;

pub use executor::SessionRuntime;

use crate::expansion::Expander;
use crate::history::ExpansionResult;
use crate::session::{Event, SessionState};
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use uuid::Uuid;

const EVENT_CHANNEL_CAPACITY: usize = 32;

/// Everything the presentation layer needs to render
#[derive(Debug, Clone, Default)]
pub struct SessionSnapshot {
    pub state: SessionState,
    /// Newest first
    pub history: Vec<ExpansionResult>,
}

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Session runtime has stopped")]
    Stopped,
}

/// Cloneable front-end API to a running session
#[derive(Clone)]
pub struct SessionHandle {
    event_tx: mpsc::Sender<Event>,
    snapshot_rx: watch::Receiver<SessionSnapshot>,
}

impl SessionHandle {
    async fn send(&self, event: Event) -> Result<(), RuntimeError> {
        self.event_tx
            .send(event)
            .await
            .map_err(|_| RuntimeError::Stopped)
    }

    pub async fn set_input(&self, text: impl Into<String>) -> Result<(), RuntimeError> {
        self.send(Event::InputChanged { text: text.into() }).await
    }

    pub async fn submit(&self, input: impl Into<String>) -> Result<(), RuntimeError> {
        self.send(Event::Submit {
            input: input.into(),
        })
        .await
    }

    pub async fn select_history(&self, id: Uuid) -> Result<(), RuntimeError> {
        self.send(Event::SelectFromHistory { id }).await
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshot_rx.clone()
    }
}

/// Start a session runtime on the current tokio runtime
///
/// The runtime stops once every handle has been dropped and no expansion is
/// still in flight.
pub fn spawn<E: Expander + 'static>(expander: E) -> (SessionHandle, JoinHandle<()>) {
    let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
    let (snapshot_tx, snapshot_rx) = watch::channel(SessionSnapshot::default());

    let runtime = SessionRuntime::new(expander, event_rx, event_tx.downgrade(), snapshot_tx);
    let task = tokio::spawn(runtime.run());

    (
        SessionHandle {
            event_tx,
            snapshot_rx,
        },
        task,
    )
}
