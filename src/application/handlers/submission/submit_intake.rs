//! SubmitIntakeHandler - Command handler for writing a finished questionnaire.
//!
//! Writes happen in a fixed order: the parent submission row first (its
//! generated id keys everything else), then the four section records, then
//! one junction batch per multi-choice field. The write is not transactional.
//! Once the parent exists every child write is attempted, so one failing
//! collection does not drop the others; failures are reported together.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::domain::foundation::{AuthError, SubmissionId, Timestamp};
use crate::domain::questionnaire::{AnswerSet, Catalog};
use crate::domain::submission::{RecordRow, SubmissionMapper, SUBMISSIONS_COLLECTION};
use crate::ports::{IdentityProvider, RecordStore, RecordStoreError};

/// Command to submit a completed answer set.
#[derive(Debug, Clone)]
pub struct SubmitIntakeCommand {
    pub answers: AnswerSet,
}

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitIntakeResult {
    pub submission_id: SubmissionId,
    pub submitted_at: Timestamp,
    /// Number of rows written, parent included.
    pub records_written: usize,
}

/// Error type for submitting an intake.
#[derive(Debug, thiserror::Error)]
pub enum SubmitIntakeError {
    /// Nobody is signed in.
    #[error("No authenticated user")]
    NotAuthenticated,

    /// The identity provider itself failed.
    #[error("Authentication failed: {0}")]
    Authentication(#[from] AuthError),

    /// The parent row could not be written; nothing was stored.
    #[error("Failed to write submission: {0}")]
    Persistence(#[source] RecordStoreError),

    /// The parent row exists but at least one child write failed.
    ///
    /// `collection` and `source` describe the first failure; `failed` lists
    /// every collection that did not fully write, in write order.
    #[error("Submission {submission_id} partially written, '{collection}' failed: {source}")]
    PartialWrite {
        submission_id: SubmissionId,
        collection: String,
        #[source]
        source: RecordStoreError,
        failed: Vec<String>,
    },
}

impl SubmitIntakeError {
    pub fn is_authentication(&self) -> bool {
        matches!(
            self,
            SubmitIntakeError::NotAuthenticated | SubmitIntakeError::Authentication(_)
        )
    }

    /// Id of the orphaned parent row, if one was written.
    pub fn orphaned_submission(&self) -> Option<SubmissionId> {
        match self {
            SubmitIntakeError::PartialWrite { submission_id, .. } => Some(*submission_id),
            _ => None,
        }
    }
}

/// Handler for submitting intakes.
pub struct SubmitIntakeHandler {
    catalog: &'static Catalog,
    identity: Arc<dyn IdentityProvider>,
    records: Arc<dyn RecordStore>,
}

impl SubmitIntakeHandler {
    pub fn new(
        catalog: &'static Catalog,
        identity: Arc<dyn IdentityProvider>,
        records: Arc<dyn RecordStore>,
    ) -> Self {
        Self {
            catalog,
            identity,
            records,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitIntakeCommand,
    ) -> Result<SubmitIntakeResult, SubmitIntakeError> {
        // 1. Resolve the acting user
        let user = self
            .identity
            .current_user()
            .await?
            .ok_or(SubmitIntakeError::NotAuthenticated)?;

        // 2. Map answers onto records
        let mapped = SubmissionMapper::new(self.catalog).map(user.id.clone(), &cmd.answers);

        // 3. Parent row first; its id keys every other row
        let parent = self
            .records
            .insert(SUBMISSIONS_COLLECTION, &mapped.parent.to_row())
            .await
            .map_err(|e| {
                error!(error = %e, user_id = %user.id, "Failed to write submission");
                SubmitIntakeError::Persistence(e)
            })?;
        let submission_id = SubmissionId::from_uuid(parent.id);
        debug!(submission_id = %submission_id, "Submission parent written");

        let mut failures: Vec<(String, RecordStoreError)> = Vec::new();

        // 4. One record per section
        for section in &mapped.sections {
            if let Err(e) = self
                .records
                .insert(section.collection(), &section.to_row(submission_id))
                .await
            {
                error!(
                    submission_id = %submission_id,
                    collection = section.collection(),
                    error = %e,
                    "Section write failed"
                );
                failures.push((section.collection().to_string(), e));
            }
        }

        // 5. One batch per junction collection
        for (collection, rows) in mapped.junction_batches() {
            let rows: Vec<RecordRow> = rows.iter().map(|r| r.to_row(submission_id)).collect();
            if let Err(e) = self.records.insert_many(collection, &rows).await {
                error!(
                    submission_id = %submission_id,
                    collection,
                    error = %e,
                    "Junction write failed"
                );
                failures.push((collection.to_string(), e));
            }
        }

        if !failures.is_empty() {
            let failed: Vec<String> = failures.iter().map(|(c, _)| c.clone()).collect();
            let (collection, source) = failures.swap_remove(0);
            error!(
                submission_id = %submission_id,
                failed = ?failed,
                "Submission partially written"
            );
            return Err(SubmitIntakeError::PartialWrite {
                submission_id,
                collection,
                source,
                failed,
            });
        }

        info!(
            submission_id = %submission_id,
            reference = %submission_id.reference_code(),
            junction_rows = mapped.junction_rows.len(),
            "Submission written"
        );

        Ok(SubmitIntakeResult {
            submission_id,
            submitted_at: Timestamp::now(),
            records_written: mapped.record_count(),
        })
    }
}
