//! PostgreSQL implementation of RecordStore.
//!
//! Each collection is a table; each insert is a single
//! `INSERT ... RETURNING id`. Values are always bound as parameters.
//! Table and column names are checked against the catalog before they are
//! spliced into SQL.

use std::collections::HashSet;

use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgPoolOptions};
use sqlx::query::Query;
use sqlx::{PgPool, Postgres, Row};
use uuid::Uuid;

use crate::config::DatabaseConfig;
use crate::domain::questionnaire::{Catalog, FieldStorage};
use crate::domain::submission::{ColumnValue, RecordRow, SUBMISSIONS_COLLECTION};
use crate::ports::{InsertedRecord, RecordStore, RecordStoreError};

/// Opens a connection pool sized from configuration.
pub async fn connect_pool(config: &DatabaseConfig) -> Result<PgPool, RecordStoreError> {
    PgPoolOptions::new()
        .max_connections(config.pool_size)
        .acquire_timeout(config.acquire_timeout())
        .connect(&config.url)
        .await
        .map_err(|e| {
            RecordStoreError::Unavailable(format!(
                "Failed to connect to {}: {}",
                config.display_target(),
                e
            ))
        })
}

/// PostgreSQL implementation of RecordStore.
#[derive(Clone)]
pub struct PostgresRecordStore {
    pool: PgPool,
    collections: HashSet<String>,
}

impl PostgresRecordStore {
    /// Creates a store accepting the collections the catalog writes to.
    pub fn new(pool: PgPool, catalog: &Catalog) -> Self {
        Self {
            pool,
            collections: known_collections(catalog),
        }
    }

    fn insert_sql(&self, collection: &str, row: &RecordRow) -> Result<String, RecordStoreError> {
        if !self.collections.contains(collection) {
            return Err(RecordStoreError::UnknownCollection(collection.to_string()));
        }
        build_insert_sql(collection, row)
    }
}

#[async_trait]
impl RecordStore for PostgresRecordStore {
    async fn insert(
        &self,
        collection: &str,
        row: &RecordRow,
    ) -> Result<InsertedRecord, RecordStoreError> {
        let sql = self.insert_sql(collection, row)?;

        let mut query = sqlx::query(&sql);
        for (_, value) in row.columns() {
            query = bind_value(query, value);
        }

        let inserted = query.fetch_one(&self.pool).await.map_err(|e| {
            RecordStoreError::DatabaseError(format!("Failed to insert into {}: {}", collection, e))
        })?;

        let id: Uuid = inserted.try_get("id").map_err(|e| {
            RecordStoreError::DatabaseError(format!("Failed to read generated id: {}", e))
        })?;

        Ok(InsertedRecord { id })
    }
}

fn bind_value<'q>(
    query: Query<'q, Postgres, PgArguments>,
    value: &ColumnValue,
) -> Query<'q, Postgres, PgArguments> {
    match value {
        ColumnValue::Text(s) => query.bind(s.clone()),
        ColumnValue::Integer(n) => query.bind(*n),
        ColumnValue::Uuid(id) => query.bind(*id),
    }
}

/// Parent, section and junction collections named by the catalog.
fn known_collections(catalog: &Catalog) -> HashSet<String> {
    let mut collections: HashSet<String> = HashSet::new();
    collections.insert(SUBMISSIONS_COLLECTION.to_string());
    for section in catalog.sections() {
        collections.insert(section.record_collection().to_string());
    }
    for field in catalog.multi_choice_fields() {
        if let FieldStorage::Junction { collection, .. } = &field.storage {
            collections.insert(collection.clone());
        }
    }
    collections
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        && !name.starts_with(|c: char| c.is_ascii_digit())
}

fn build_insert_sql(collection: &str, row: &RecordRow) -> Result<String, RecordStoreError> {
    if row.is_empty() {
        return Err(RecordStoreError::Rejected {
            collection: collection.to_string(),
            reason: "no columns".to_string(),
        });
    }

    let mut columns = Vec::with_capacity(row.len());
    let mut placeholders = Vec::with_capacity(row.len());
    for (i, (column, _)) in row.columns().enumerate() {
        if !is_identifier(column) {
            return Err(RecordStoreError::Rejected {
                collection: collection.to_string(),
                reason: format!("invalid column name '{}'", column),
            });
        }
        columns.push(format!("\"{}\"", column));
        placeholders.push(format!("${}", i + 1));
    }

    Ok(format!(
        "INSERT INTO \"{}\" ({}) VALUES ({}) RETURNING id",
        collection,
        columns.join(", "),
        placeholders.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_collections_cover_parent_sections_and_junctions() {
        let collections = known_collections(Catalog::standard());
        assert!(collections.contains("submissions"));
        assert!(collections.contains("organization_profiles"));
        assert!(collections.contains("ai_sdr_requirements"));
        assert!(collections.contains("success_metrics"));
        assert!(collections.contains("messaging_preferences"));
        assert_eq!(collections.len(), 1 + 4 + 10);
    }

    #[test]
    fn insert_sql_uses_numbered_placeholders() {
        let row = RecordRow::new()
            .with("user_id", ColumnValue::Text("u".into()))
            .with("status", ColumnValue::Text("submitted".into()));

        let sql = build_insert_sql("submissions", &row).unwrap();
        assert_eq!(
            sql,
            "INSERT INTO \"submissions\" (\"user_id\", \"status\") VALUES ($1, $2) RETURNING id"
        );
    }

    #[test]
    fn insert_sql_rejects_suspicious_column_names() {
        let row = RecordRow::new().with("name\"; DROP TABLE x; --", ColumnValue::Text("x".into()));
        let err = build_insert_sql("submissions", &row).unwrap_err();
        assert!(matches!(err, RecordStoreError::Rejected { .. }));
    }

    #[test]
    fn insert_sql_rejects_empty_rows() {
        assert!(build_insert_sql("submissions", &RecordRow::new()).is_err());
    }

    #[test]
    fn identifiers_are_lower_snake_case() {
        assert!(is_identifier("success_metric"));
        assert!(is_identifier("iso27001"));
        assert!(!is_identifier("Company"));
        assert!(!is_identifier("1abc"));
        assert!(!is_identifier(""));
    }
}
