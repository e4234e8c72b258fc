//! Application layer - Draft persistence, command handlers and the wizard.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod draft_store;
pub mod handlers;
pub mod wizard;

pub use draft_store::{DraftSaveOutcome, DraftStore, DEFAULT_DRAFT_KEY};
pub use handlers::{
    SubmitIntakeCommand, SubmitIntakeError, SubmitIntakeHandler, SubmitIntakeResult,
};
pub use wizard::{AutosaveHandle, AutosaveTask, NavigationOutcome, SubmitOutcome, Wizard};
