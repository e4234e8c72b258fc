//! Record shapes written to the storage engine on submit.

use serde::Serialize;
use uuid::Uuid;

use crate::domain::foundation::{SubmissionId, UserId};
use crate::domain::questionnaire::Section;

/// Collection holding one parent row per submission.
pub const SUBMISSIONS_COLLECTION: &str = "submissions";

/// Status stamped on every parent row.
pub const SUBMITTED_STATUS: &str = "submitted";

/// Foreign key column carried by every child and junction row.
pub const PARENT_KEY_COLUMN: &str = "submission_id";

/// A single column value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ColumnValue {
    Text(String),
    Integer(i64),
    Uuid(Uuid),
}

impl ColumnValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ColumnValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_uuid(&self) -> Option<Uuid> {
        match self {
            ColumnValue::Uuid(id) => Some(*id),
            _ => None,
        }
    }
}

/// Ordered column -> value pairs for one insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordRow {
    columns: Vec<(String, ColumnValue)>,
}

impl RecordRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column. Columns keep insertion order.
    pub fn with(mut self, column: impl Into<String>, value: ColumnValue) -> Self {
        self.push(column, value);
        self
    }

    pub fn push(&mut self, column: impl Into<String>, value: ColumnValue) {
        self.columns.push((column.into(), value));
    }

    pub fn get(&self, column: &str) -> Option<&ColumnValue> {
        self.columns
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v)
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &ColumnValue)> {
        self.columns.iter().map(|(c, v)| (c.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// The parent row. Its id is generated by the store on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentRecord {
    pub user_id: UserId,
}

impl ParentRecord {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }

    /// The `user_id` column is text: the identity provider's id is stored as
    /// given, so record stores must not expect a UUID column there.
    pub fn to_row(&self) -> RecordRow {
        RecordRow::new()
            .with("user_id", ColumnValue::Text(self.user_id.as_str().to_string()))
            .with("status", ColumnValue::Text(SUBMITTED_STATUS.to_string()))
    }
}

/// One section's scalar answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRecord {
    pub section: Section,
    pub values: RecordRow,
}

impl SectionRecord {
    pub fn collection(&self) -> &'static str {
        self.section.record_collection()
    }

    /// Row to insert, keyed to the parent.
    pub fn to_row(&self, parent: SubmissionId) -> RecordRow {
        let mut row = RecordRow::new().with(PARENT_KEY_COLUMN, ColumnValue::Uuid(*parent.as_uuid()));
        for (column, value) in self.values.columns() {
            row.push(column, value.clone());
        }
        row
    }
}

/// One selected option of a multi-choice answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JunctionRow {
    pub collection: String,
    pub column: String,
    pub value: String,
}

impl JunctionRow {
    pub fn to_row(&self, parent: SubmissionId) -> RecordRow {
        RecordRow::new()
            .with(PARENT_KEY_COLUMN, ColumnValue::Uuid(*parent.as_uuid()))
            .with(self.column.as_str(), ColumnValue::Text(self.value.clone()))
    }
}

/// The full normalized record set for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedSubmission {
    pub parent: ParentRecord,
    pub sections: Vec<SectionRecord>,
    pub junction_rows: Vec<JunctionRow>,
}

impl MappedSubmission {
    /// Junction rows grouped by collection, in first-seen order.
    pub fn junction_batches(&self) -> Vec<(&str, Vec<&JunctionRow>)> {
        let mut batches: Vec<(&str, Vec<&JunctionRow>)> = Vec::new();
        for row in &self.junction_rows {
            match batches.iter().position(|(c, _)| *c == row.collection) {
                Some(i) => batches[i].1.push(row),
                None => batches.push((row.collection.as_str(), vec![row])),
            }
        }
        batches
    }

    /// Number of inserts a complete write performs.
    pub fn record_count(&self) -> usize {
        1 + self.sections.len() + self.junction_rows.len()
    }
}
