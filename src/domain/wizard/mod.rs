//! Wizard module - Steps, validation and the state the controller owns.

mod progress;
mod state;
mod step;
mod validator;

pub use progress::{StepState, WizardProgress};
pub use state::{
    Notification, SubmissionReceipt, SubmissionStatus, WizardState, WizardStatus,
    SUBMISSION_FAILED_MESSAGE,
};
pub use step::WizardStep;
pub use validator::{StepValidation, StepValidator, INVALID_EMAIL_MESSAGE, INVALID_OPTION_MESSAGE};
