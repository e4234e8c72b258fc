//! Submission command handlers.

mod submit_intake;

pub use submit_intake::{
    SubmitIntakeCommand, SubmitIntakeError, SubmitIntakeHandler, SubmitIntakeResult,
};
