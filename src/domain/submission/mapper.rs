//! Maps the flat answer set onto the normalized record set.

use crate::domain::foundation::UserId;
use crate::domain::questionnaire::{AnswerSet, AnswerValue, Catalog, FieldStorage};

use super::{ColumnValue, JunctionRow, MappedSubmission, ParentRecord, RecordRow, SectionRecord};

/// Turns answers into one parent, four section records and junction rows.
///
/// Scalar answers become columns on their section's record, defaulting to an
/// empty string. Multi-choice answers are never stored as columns; each
/// selected option becomes its own junction row.
#[derive(Debug, Clone, Copy)]
pub struct SubmissionMapper<'a> {
    catalog: &'a Catalog,
}

impl<'a> SubmissionMapper<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn map(&self, user_id: UserId, answers: &AnswerSet) -> MappedSubmission {
        let sections = self
            .catalog
            .sections()
            .iter()
            .map(|section| {
                let mut values = RecordRow::new();
                for field in self.catalog.fields_of(*section) {
                    if let FieldStorage::Column(column) = &field.storage {
                        values.push(column.as_str(), scalar(answers.get(field.id)));
                    }
                }
                SectionRecord {
                    section: *section,
                    values,
                }
            })
            .collect();

        let junction_rows = self
            .catalog
            .multi_choice_fields()
            .filter_map(|field| match &field.storage {
                FieldStorage::Junction { collection, column } => {
                    Some((field, collection, column))
                }
                FieldStorage::Column(_) => None,
            })
            .flat_map(move |(field, collection, column)| {
                answers
                    .selections(field.id)
                    .iter()
                    .map(move |value| JunctionRow {
                        collection: collection.clone(),
                        column: column.clone(),
                        value: value.clone(),
                    })
            })
            .collect();

        MappedSubmission {
            parent: ParentRecord::new(user_id),
            sections,
            junction_rows,
        }
    }
}

fn scalar(value: Option<&AnswerValue>) -> ColumnValue {
    match value {
        Some(AnswerValue::Text(s)) => ColumnValue::Text(s.clone()),
        Some(AnswerValue::Number(n)) => ColumnValue::Integer(*n),
        Some(AnswerValue::Selections(_)) | None => ColumnValue::Text(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::questionnaire::Section;

    fn catalog() -> &'static Catalog {
        Catalog::standard()
    }

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    fn map(answers: &AnswerSet) -> MappedSubmission {
        SubmissionMapper::new(catalog()).map(user(), answers)
    }

    #[test]
    fn produces_one_record_per_section_in_order() {
        let mapped = map(&AnswerSet::new(catalog()));
        let sections: Vec<_> = mapped.sections.iter().map(|s| s.section).collect();
        assert_eq!(sections, Section::all().to_vec());
        assert_eq!(mapped.parent.user_id, user());
    }

    #[test]
    fn unanswered_scalars_default_to_empty_string() {
        let mapped = map(&AnswerSet::new(catalog()));
        let org = &mapped.sections[0].values;
        assert_eq!(
            org.get("company_name").and_then(ColumnValue::as_text),
            Some("")
        );
        assert_eq!(org.get("contact_phone").and_then(ColumnValue::as_text), Some(""));
    }

    #[test]
    fn multi_choice_fields_never_appear_as_columns() {
        let mapped = map(&AnswerSet::new(catalog()));
        let sales = &mapped.sections[1].values;
        assert!(sales.get("success_metrics").is_none());
        assert!(sales.get("pain_points").is_none());
        assert!(sales.get("monthly_outreach_volume").is_some());
        assert!(mapped.junction_rows.is_empty());
    }

    #[test]
    fn each_selection_becomes_one_junction_row() {
        let mut answers = AnswerSet::new(catalog());
        answers
            .set(catalog(), "companyName", AnswerValue::text("Acme"))
            .unwrap();
        answers
            .set(
                catalog(),
                "successMetrics",
                AnswerValue::selections(["meetings_booked", "response_rate"]),
            )
            .unwrap();
        answers
            .set(catalog(), "securityProtocols", AnswerValue::selections(["gdpr"]))
            .unwrap();

        let mapped = map(&answers);

        let metrics: Vec<_> = mapped
            .junction_rows
            .iter()
            .filter(|r| r.collection == "success_metrics")
            .collect();
        assert_eq!(metrics.len(), 2);
        assert!(metrics.iter().all(|r| r.column == "success_metric"));
        assert_eq!(metrics[0].value, "meetings_booked");
        assert_eq!(metrics[1].value, "response_rate");

        assert_eq!(mapped.junction_rows.len(), 3);
        assert_eq!(
            mapped.sections[0]
                .values
                .get("company_name")
                .and_then(ColumnValue::as_text),
            Some("Acme")
        );
    }

    #[test]
    fn section_records_hold_exactly_their_scalar_fields() {
        let mapped = map(&AnswerSet::new(catalog()));
        let tech: Vec<_> = mapped.sections[2].values.columns().map(|(c, _)| c).collect();
        assert_eq!(
            tech,
            ["crm_platform", "crm_platform_other", "data_sources_details", "security_details"]
        );
    }
}
