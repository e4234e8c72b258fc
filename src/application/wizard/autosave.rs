//! AutosaveTask - Background service that periodically saves the draft.
//!
//! The task watches the wizard's published state and writes its answers to
//! the draft store on a fixed interval. Failures are logged and never
//! surface to the prospect. Saving stops once the wizard is complete.
//!
//! ## Graceful Shutdown
//!
//! The task listens for a shutdown signal and exits after the current save.
//! Dropping the [`AutosaveHandle`] sends the signal too.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

use crate::application::draft_store::DraftStore;
use crate::domain::foundation::Timestamp;
use crate::domain::wizard::WizardState;

/// Periodic draft writer.
pub struct AutosaveTask {
    drafts: Arc<DraftStore>,
    state: watch::Receiver<WizardState>,
    interval: Duration,
}

impl AutosaveTask {
    pub fn new(
        drafts: Arc<DraftStore>,
        state: watch::Receiver<WizardState>,
        interval: Duration,
    ) -> Self {
        Self {
            drafts,
            state,
            interval,
        }
    }

    /// Run the save loop until shutdown is signalled or its sender drops.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        let mut interval = time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // First tick completes immediately; nothing has changed yet.
        interval.tick().await;

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        debug!("Autosave stopped");
                        return;
                    }
                }

                _ = interval.tick() => {
                    self.save_once().await;
                }
            }
        }
    }

    /// Run exactly one save cycle. Returns the save time if a draft was written.
    pub async fn save_once(&self) -> Option<Timestamp> {
        let answers = {
            let state = self.state.borrow();
            if state.is_complete() {
                return None;
            }
            state.answers.clone()
        };
        self.drafts.save_best_effort(&answers).await
    }

    /// Spawn the loop on the current runtime.
    pub fn spawn(self) -> AutosaveHandle {
        let (shutdown, shutdown_rx) = watch::channel(false);
        let join = tokio::spawn(self.run(shutdown_rx));
        AutosaveHandle {
            shutdown,
            join: Some(join),
        }
    }
}

/// Handle to a running autosave loop.
pub struct AutosaveHandle {
    shutdown: watch::Sender<bool>,
    join: Option<JoinHandle<()>>,
}

impl AutosaveHandle {
    /// Signal the loop and wait for it to exit.
    pub async fn stop(mut self) {
        let _ = self.shutdown.send(true);
        if let Some(join) = self.join.take() {
            let _ = join.await;
        }
    }
}

impl Drop for AutosaveHandle {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}
