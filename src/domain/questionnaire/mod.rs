//! Questionnaire module - Field model and answers.
//!
//! The catalog is the single source of field knowledge: sections, kinds,
//! option sets, requirement rules and where each answer is stored.

mod answers;
mod catalog;
mod field;
mod section;

pub use answers::{AnswerSet, AnswerValue};
pub use catalog::Catalog;
pub use field::{
    is_email_shaped, Field, FieldFormat, FieldKind, FieldOption, FieldStorage, Requirement,
    Visibility, Widget,
};
pub use section::Section;
