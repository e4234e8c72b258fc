//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `questionnaire` - Sections, fields, the catalog and the answer set
//! - `wizard` - Step state machine, validation, progress and wizard state
//! - `submission` - Mapping answers onto the normalized record set

pub mod foundation;
pub mod questionnaire;
pub mod submission;
pub mod wizard;
