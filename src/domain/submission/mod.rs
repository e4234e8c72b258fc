//! Submission module - Normalized record set built from the answers.

mod mapper;
mod records;

pub use mapper::SubmissionMapper;
pub use records::{
    ColumnValue, JunctionRow, MappedSubmission, ParentRecord, RecordRow, SectionRecord,
    PARENT_KEY_COLUMN, SUBMISSIONS_COLLECTION, SUBMITTED_STATUS,
};
