//! Headless intake runner.
//!
//! ```text
//! sdr-intake [answers.json]
//! ```
//!
//! Restores the saved draft, applies answers from the optional JSON object,
//! walks the wizard forward one step at a time and submits.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};

use sdr_intake::adapters::{
    connect_pool, FileDraftCache, InMemoryRecordStore, PostgresRecordStore, StaticIdentityProvider,
};
use sdr_intake::application::{
    DraftStore, NavigationOutcome, SubmitIntakeError, SubmitIntakeHandler, SubmitOutcome, Wizard,
};
use sdr_intake::config::{ConfigError, IntakeConfig};
use sdr_intake::domain::foundation::ValidationError;
use sdr_intake::domain::questionnaire::{AnswerValue, Catalog};
use sdr_intake::domain::wizard::StepValidation;
use sdr_intake::ports::{RecordStore, RecordStoreError};
use sdr_intake::telemetry::init_tracing;

#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read {path}: {source}")]
    ReadAnswers {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} must contain a JSON object of answers: {reason}")]
    MalformedAnswers { path: PathBuf, reason: String },

    #[error("Rejected answer: {0}")]
    Answer(#[from] ValidationError),

    #[error("Record store unavailable: {0}")]
    Store(#[from] RecordStoreError),

    #[error("{step} is incomplete: {errors}")]
    Incomplete { step: String, errors: String },

    #[error(transparent)]
    Submit(#[from] SubmitIntakeError),

    #[error("Wizard did not reach the final step")]
    Stuck,
}

#[tokio::main]
async fn main() -> Result<(), RunError> {
    let config = IntakeConfig::load()?;
    config.validate().map_err(ConfigError::from)?;
    init_tracing(&config.telemetry);

    let catalog = Catalog::standard();
    let answers_path = std::env::args().nth(1).map(PathBuf::from);

    let drafts = Arc::new(DraftStore::new(
        Arc::new(FileDraftCache::new(&config.draft.directory)),
        catalog,
        config.draft.key.clone(),
    ));
    let identity = Arc::new(StaticIdentityProvider::new(
        config.identity.to_user().map_err(ConfigError::from)?,
    ));
    let records: Arc<dyn RecordStore> = match &config.database {
        Some(database) => {
            let pool = connect_pool(database).await?;
            info!(target = %database.display_target(), "Writing submissions to PostgreSQL");
            Arc::new(PostgresRecordStore::new(pool, catalog))
        }
        None => {
            warn!("No database configured, submissions are kept in memory");
            Arc::new(InMemoryRecordStore::new())
        }
    };
    let submitter = Arc::new(SubmitIntakeHandler::new(catalog, identity, records));

    let mut wizard = Wizard::start(catalog, drafts, submitter).await;
    let autosave = wizard.spawn_autosave(config.draft.autosave_interval());

    let result = run(&mut wizard, answers_path).await;
    autosave.stop().await;
    result
}

async fn run(wizard: &mut Wizard, answers_path: Option<PathBuf>) -> Result<(), RunError> {
    if let Some(path) = answers_path {
        apply_answers(wizard, path).await?;
    }

    while !wizard.state().step.is_final_entry_step() {
        let step = wizard.state().step;
        match wizard.go_next().await {
            NavigationOutcome::Advanced(next) => {
                println!("{} done, continuing to {}", step.display_name(), next.display_name())
            }
            NavigationOutcome::Blocked(validation) => {
                return Err(incomplete(step.display_name(), &validation))
            }
            NavigationOutcome::Ignored => return Err(RunError::Stuck),
        }
    }

    let step = wizard.state().step;
    match wizard.submit().await {
        SubmitOutcome::Submitted(receipt) => {
            println!(
                "Submitted. Reference {} ({})",
                receipt.reference_code(),
                receipt.submission_id
            );
            Ok(())
        }
        SubmitOutcome::Blocked(validation) => Err(incomplete(step.display_name(), &validation)),
        SubmitOutcome::Failed(e) => {
            if let Some(notification) = &wizard.state().notification {
                eprintln!("{}", notification.message);
            }
            Err(e.into())
        }
        SubmitOutcome::Ignored => Err(RunError::Stuck),
    }
}

async fn apply_answers(wizard: &mut Wizard, path: PathBuf) -> Result<(), RunError> {
    let raw = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| RunError::ReadAnswers {
            path: path.clone(),
            source,
        })?;
    let answers: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&raw)
        .map_err(|e| RunError::MalformedAnswers {
            path: path.clone(),
            reason: e.to_string(),
        })?;

    for (field_id, value) in answers {
        let value: AnswerValue =
            serde_json::from_value(value).map_err(|e| RunError::MalformedAnswers {
                path: path.clone(),
                reason: format!("{field_id}: {e}"),
            })?;
        wizard.update_answer(&field_id, value)?;
    }
    info!(path = %path.display(), "Applied answers");
    Ok(())
}

fn incomplete(step: &str, validation: &StepValidation) -> RunError {
    let errors = validation
        .errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join("; ");
    RunError::Incomplete {
        step: step.to_string(),
        errors,
    }
}
