//! Wizard - Owns the wizard state and runs every user-triggered operation.
//!
//! The presentation layer never touches `WizardState` directly; it calls the
//! operations here and renders the snapshots published on the state channel.
//! Operations take `&mut self`, so navigation and submit are serialized by
//! construction. While a submit is in flight, navigation is ignored.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use super::autosave::{AutosaveHandle, AutosaveTask};
use crate::application::draft_store::DraftStore;
use crate::application::handlers::{SubmitIntakeCommand, SubmitIntakeError, SubmitIntakeHandler};
use crate::domain::foundation::{StateMachine, Timestamp, ValidationError};
use crate::domain::questionnaire::{AnswerValue, Catalog, Field, Section};
use crate::domain::wizard::{
    Notification, StepValidation, StepValidator, SubmissionReceipt, SubmissionStatus,
    WizardProgress, WizardState, WizardStep,
};

/// Result of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Moved to the given step. Presentation should reset scroll and focus.
    Advanced(WizardStep),
    /// Validation failed; the wizard stayed put.
    Blocked(StepValidation),
    /// Not available from the current step or while saving.
    Ignored,
}

/// Result of a submit request.
#[derive(Debug)]
pub enum SubmitOutcome {
    Submitted(SubmissionReceipt),
    Blocked(StepValidation),
    Failed(SubmitIntakeError),
    Ignored,
}

/// The wizard controller.
pub struct Wizard {
    catalog: &'static Catalog,
    drafts: Arc<DraftStore>,
    submitter: Arc<SubmitIntakeHandler>,
    state: WizardState,
    state_tx: watch::Sender<WizardState>,
}

impl Wizard {
    /// Creates a wizard, restoring the saved draft if there is one.
    pub async fn start(
        catalog: &'static Catalog,
        drafts: Arc<DraftStore>,
        submitter: Arc<SubmitIntakeHandler>,
    ) -> Self {
        let restored = drafts.load().await;
        if restored.is_some() {
            info!("Resuming from saved draft");
        }
        let state = match restored {
            Some(answers) => WizardState::new(answers),
            None => WizardState::blank(catalog),
        };
        Self::with_state(catalog, drafts, submitter, state)
    }

    /// Creates a wizard from an explicit state without touching the cache.
    pub fn with_state(
        catalog: &'static Catalog,
        drafts: Arc<DraftStore>,
        submitter: Arc<SubmitIntakeHandler>,
        state: WizardState,
    ) -> Self {
        let (state_tx, _) = watch::channel(state.clone());
        Self {
            catalog,
            drafts,
            submitter,
            state,
            state_tx,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Reads
    // ───────────────────────────────────────────────────────────────

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Current state with `last_saved_at` refreshed from the draft store,
    /// which autosave may have updated in the background.
    pub async fn snapshot(&mut self) -> WizardState {
        self.sync_last_saved().await;
        self.state.clone()
    }

    /// Receiver for state snapshots published after every change.
    pub fn subscribe(&self) -> watch::Receiver<WizardState> {
        self.state_tx.subscribe()
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn progress(&self) -> WizardProgress {
        WizardProgress::new(self.state.step)
    }

    /// Fields of a section whose display condition holds right now.
    pub fn visible_fields(&self, section: Section) -> Vec<&Field> {
        self.catalog
            .visible_fields(section, &self.state.answers)
            .collect()
    }

    /// Visible fields of the current step; empty once complete.
    pub fn current_fields(&self) -> Vec<&Field> {
        match self.state.step.section() {
            Some(section) => self.visible_fields(section),
            None => Vec::new(),
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Answers
    // ───────────────────────────────────────────────────────────────

    /// Replaces one answer. Errors are only recomputed on navigation.
    pub fn update_answer(
        &mut self,
        field_id: &str,
        value: AnswerValue,
    ) -> Result<(), ValidationError> {
        self.state.answers.set(self.catalog, field_id, value)?;
        self.publish();
        Ok(())
    }

    /// Checkbox toggle on a multi-choice field. Returns the new selection state.
    pub fn toggle_option(&mut self, field_id: &str, option: &str) -> Result<bool, ValidationError> {
        let selected = self.state.answers.toggle(self.catalog, field_id, option)?;
        self.publish();
        Ok(selected)
    }

    // ───────────────────────────────────────────────────────────────
    // Navigation
    // ───────────────────────────────────────────────────────────────

    /// Validates the current step, saves the draft and moves forward.
    ///
    /// The last data-entry step only moves forward through [`Wizard::submit`].
    pub async fn go_next(&mut self) -> NavigationOutcome {
        let step = self.state.step;
        if self.state.saving || step.is_final_entry_step() {
            return NavigationOutcome::Ignored;
        }
        let Some(next) = step.next() else {
            return NavigationOutcome::Ignored;
        };

        if let Some(blocked) = self.check_current_step() {
            return blocked;
        }

        if let Some(at) = self.drafts.save_best_effort(&self.state.answers).await {
            self.state.last_saved_at = Some(at);
        }

        self.move_to(next)
    }

    /// Moves back one step. No validation, no save.
    pub fn go_previous(&mut self) -> NavigationOutcome {
        if self.state.saving {
            return NavigationOutcome::Ignored;
        }
        match self.state.step.previous() {
            Some(previous) => self.move_to(previous),
            None => NavigationOutcome::Ignored,
        }
    }

    /// Validates the last step and writes the submission.
    ///
    /// Only a successful write reaches the terminal step. On failure the
    /// wizard stays on the last step with an error status and a blocking
    /// notification so the prospect can retry.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.state.saving || !self.state.step.is_final_entry_step() {
            return SubmitOutcome::Ignored;
        }

        if let Some(NavigationOutcome::Blocked(validation)) = self.check_current_step() {
            return SubmitOutcome::Blocked(validation);
        }

        self.state.saving = true;
        self.state.notification = None;
        self.publish();

        let result = self
            .submitter
            .handle(SubmitIntakeCommand {
                answers: self.state.answers.clone(),
            })
            .await;

        self.state.saving = false;
        let outcome = match result {
            Ok(result) => {
                let receipt = SubmissionReceipt {
                    submission_id: result.submission_id,
                    submitted_at: result.submitted_at,
                };
                self.state.submission_status = SubmissionStatus::Success;
                self.state.receipt = Some(receipt);
                self.state.step = WizardStep::Complete;
                info!(reference = %receipt.reference_code(), "Intake submitted");
                SubmitOutcome::Submitted(receipt)
            }
            Err(e) => {
                error!(error = %e, "Intake submission failed");
                self.state.submission_status = SubmissionStatus::Error;
                self.state.notification = Some(Notification::submission_failed());
                SubmitOutcome::Failed(e)
            }
        };
        self.publish();
        outcome
    }

    // ───────────────────────────────────────────────────────────────
    // Drafts
    // ───────────────────────────────────────────────────────────────

    /// User-triggered save, independent of validity.
    ///
    /// Returns the save time, or `None` if nothing was written (blank answers,
    /// cache failure, or the wizard is already complete).
    pub async fn save_draft_manually(&mut self) -> Option<Timestamp> {
        if self.state.saving || self.state.is_complete() {
            return None;
        }

        self.state.saving = true;
        self.publish();

        let saved = self.drafts.save_best_effort(&self.state.answers).await;
        if let Some(at) = saved {
            self.state.last_saved_at = Some(at);
        }

        self.state.saving = false;
        self.publish();
        saved
    }

    /// Starts periodic background saves of the published answers.
    pub fn spawn_autosave(&self, interval: Duration) -> AutosaveHandle {
        AutosaveTask::new(self.drafts.clone(), self.subscribe(), interval).spawn()
    }

    /// Clears every answer, returns to the first step and drops the draft.
    pub async fn reset(&mut self) {
        if let Err(e) = self.drafts.clear().await {
            warn!(error = %e, "Failed to clear draft on reset");
        }
        self.state = WizardState::blank(self.catalog);
        debug!("Wizard reset");
        self.publish();
    }

    pub fn dismiss_notification(&mut self) {
        if self.state.notification.take().is_some() {
            self.publish();
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Internals
    // ───────────────────────────────────────────────────────────────

    /// Validates the current step, recording errors. `None` means valid.
    fn check_current_step(&mut self) -> Option<NavigationOutcome> {
        let validation =
            StepValidator::new(self.catalog).validate(self.state.step, &self.state.answers);
        if validation.is_valid() {
            self.state.errors.clear();
            return None;
        }

        debug!(
            step = self.state.step.display_name(),
            errors = validation.errors.len(),
            "Step validation failed"
        );
        self.state.errors = validation.errors.clone();
        self.publish();
        Some(NavigationOutcome::Blocked(validation))
    }

    fn move_to(&mut self, target: WizardStep) -> NavigationOutcome {
        match self.state.step.transition_to(target) {
            Ok(step) => {
                debug!(
                    from = self.state.step.display_name(),
                    to = step.display_name(),
                    "Step changed"
                );
                self.state.step = step;
                self.publish();
                NavigationOutcome::Advanced(step)
            }
            Err(e) => {
                warn!(error = %e, "Rejected step change");
                NavigationOutcome::Ignored
            }
        }
    }

    async fn sync_last_saved(&mut self) {
        if let Some(at) = self.drafts.last_saved_at().await {
            if self.state.last_saved_at.map_or(true, |current| at.is_after(&current)) {
                self.state.last_saved_at = Some(at);
            }
        }
    }

    fn publish(&self) {
        self.state_tx.send_replace(self.state.clone());
    }
}
