//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod submission;

pub use submission::{
    SubmitIntakeCommand, SubmitIntakeError, SubmitIntakeHandler, SubmitIntakeResult,
};
