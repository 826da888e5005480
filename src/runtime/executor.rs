//! Session runtime executor

use super::SessionSnapshot;
use crate::expansion::Expander;
use crate::history::{ExpansionResult, History};
use crate::session::{transition, Effect, Event, SessionState};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};

/// Single owner of session state and history
///
/// Events are handled strictly one at a time. The only suspension point is
/// the expansion call, which runs as a background task and posts its outcome
/// back as an event, so the loop stays responsive while a request is in
/// flight and the transition function can reject a second submit.
pub struct SessionRuntime<E: Expander + 'static> {
    state: SessionState,
    history: History,
    expander: Arc<E>,
    event_rx: mpsc::Receiver<Event>,
    /// Weak so the loop ends once all handles are gone
    event_tx: mpsc::WeakSender<Event>,
    snapshot_tx: watch::Sender<SessionSnapshot>,
}

impl<E: Expander + 'static> SessionRuntime<E> {
    pub fn new(
        expander: E,
        event_rx: mpsc::Receiver<Event>,
        event_tx: mpsc::WeakSender<Event>,
        snapshot_tx: watch::Sender<SessionSnapshot>,
    ) -> Self {
        Self {
            state: SessionState::new(),
            history: History::new(),
            expander: Arc::new(expander),
            event_rx,
            event_tx,
            snapshot_tx,
        }
    }

    pub async fn run(mut self) {
        tracing::info!("Starting session runtime");

        while let Some(event) = self.event_rx.recv().await {
            self.process_event(event);
        }

        tracing::info!(
            history_len = self.history.len(),
            "Session runtime stopped"
        );
    }

    fn process_event(&mut self, event: Event) {
        let result = match transition(&self.state, &self.history, event) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(phase = self.state.phase.name(), error = %e, "Event rejected");
                return;
            }
        };

        let old_phase = self.state.phase.name();
        self.state = result.new_state;
        if old_phase != self.state.phase.name() {
            tracing::debug!(from = old_phase, to = self.state.phase.name(), "Phase changed");
        }

        for effect in result.effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: Effect) {
        match effect {
            Effect::RequestExpansion { input } => {
                let Some(event_tx) = self.event_tx.upgrade() else {
                    tracing::warn!("No live handles, skipping expansion");
                    return;
                };
                let expander = self.expander.clone();

                tokio::spawn(async move {
                    tracing::info!(input_len = input.len(), "Requesting expansion");

                    let event = match expander.expand(&input).await {
                        Ok(expanded) => Event::ExpansionSucceeded {
                            result: ExpansionResult::new(input, expanded),
                        },
                        Err(e) => {
                            tracing::error!(error = %e, "Expansion failed");
                            Event::ExpansionFailed {
                                message: e.to_string(),
                            }
                        }
                    };

                    if event_tx.send(event).await.is_err() {
                        tracing::debug!("Runtime gone before expansion completed");
                    }
                });
            }

            Effect::RecordHistory { result } => {
                tracing::info!(id = %result.id, "Recording expansion");
                self.history.record(result);
            }

            Effect::PublishSnapshot => {
                self.snapshot_tx.send_replace(SessionSnapshot {
                    state: self.state.clone(),
                    history: self.history.all().to_vec(),
                });
            }
        }
    }
}
