//! Wizard controller and background autosave.

mod autosave;
mod controller;

pub use autosave::{AutosaveHandle, AutosaveTask};
pub use controller::{NavigationOutcome, SubmitOutcome, Wizard};
