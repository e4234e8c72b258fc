//! Wizard state snapshot and derived status.

use std::collections::BTreeMap;

use serde::Serialize;

use super::WizardStep;
use crate::domain::foundation::{SubmissionId, Timestamp};
use crate::domain::questionnaire::{AnswerSet, Catalog};

/// Message shown for any failed submission attempt.
pub const SUBMISSION_FAILED_MESSAGE: &str =
    "There was an error saving your data. Please try again.";

/// Outcome of the most recent submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Success,
    Error,
}

/// Status the presentation layer renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStatus {
    Idle,
    Saving,
    Success,
    Error,
}

/// A blocking, dismissible message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub message: String,
}

impl Notification {
    pub fn submission_failed() -> Self {
        Self {
            message: SUBMISSION_FAILED_MESSAGE.to_string(),
        }
    }
}

/// What a successful submit hands back to the prospect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    pub submission_id: SubmissionId,
    pub submitted_at: Timestamp,
}

impl SubmissionReceipt {
    /// Short code the prospect can quote, e.g. `3F2A9C1B`.
    pub fn reference_code(&self) -> String {
        self.submission_id.reference_code()
    }
}

/// Everything the wizard owns. Only the controller mutates it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WizardState {
    pub step: WizardStep,
    pub answers: AnswerSet,
    pub errors: BTreeMap<String, String>,
    pub saving: bool,
    pub last_saved_at: Option<Timestamp>,
    pub submission_status: SubmissionStatus,
    pub notification: Option<Notification>,
    pub receipt: Option<SubmissionReceipt>,
}

impl WizardState {
    /// Fresh state on the first step with the given answers.
    pub fn new(answers: AnswerSet) -> Self {
        Self {
            step: WizardStep::default(),
            answers,
            errors: BTreeMap::new(),
            saving: false,
            last_saved_at: None,
            submission_status: SubmissionStatus::Idle,
            notification: None,
            receipt: None,
        }
    }

    /// Fresh state with every answer at its default.
    pub fn blank(catalog: &Catalog) -> Self {
        Self::new(AnswerSet::new(catalog))
    }

    pub fn status(&self) -> WizardStatus {
        if self.saving {
            return WizardStatus::Saving;
        }
        match self.submission_status {
            SubmissionStatus::Idle => WizardStatus::Idle,
            SubmissionStatus::Success => WizardStatus::Success,
            SubmissionStatus::Error => WizardStatus::Error,
        }
    }

    pub fn current_step_index(&self) -> usize {
        self.step.index()
    }

    pub fn is_complete(&self) -> bool {
        self.step == WizardStep::Complete
    }
}
