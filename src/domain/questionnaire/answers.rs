//! AnswerSet - the flat mapping from field id to the prospect's answer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Catalog, FieldKind};
use crate::domain::foundation::ValidationError;

/// A single answer.
///
/// Text and choice answers are both strings; the field's kind tells them
/// apart. Serialized untagged so drafts read as plain JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(i64),
    Text(String),
    Selections(Vec<String>),
}

impl AnswerValue {
    pub fn text(value: impl Into<String>) -> Self {
        AnswerValue::Text(value.into())
    }

    pub fn selections<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AnswerValue::Selections(values.into_iter().map(Into::into).collect())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_selections(&self) -> Option<&[String]> {
        match self {
            AnswerValue::Selections(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            AnswerValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// The complete current set of answers, one entry per declared field.
///
/// Only ever holds keys of the catalog it was built from; every write goes
/// through [`AnswerSet::set`] or [`AnswerSet::toggle`], which check the
/// value against the field definition first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct AnswerSet {
    values: BTreeMap<String, AnswerValue>,
}

impl AnswerSet {
    /// Creates an answer set with every field at its default value.
    pub fn new(catalog: &Catalog) -> Self {
        let values = catalog
            .fields()
            .map(|f| (f.id.to_string(), f.default_value()))
            .collect();
        Self { values }
    }

    pub fn get(&self, field_id: &str) -> Option<&AnswerValue> {
        self.values.get(field_id)
    }

    /// Text or choice answer, empty when unanswered or not a text field.
    pub fn text(&self, field_id: &str) -> &str {
        self.get(field_id).and_then(AnswerValue::as_text).unwrap_or("")
    }

    /// Multi-choice answer in selection order, empty when unanswered.
    pub fn selections(&self, field_id: &str) -> &[String] {
        self.get(field_id)
            .and_then(AnswerValue::as_selections)
            .unwrap_or(&[])
    }

    pub fn number(&self, field_id: &str) -> Option<i64> {
        self.get(field_id).and_then(AnswerValue::as_number)
    }

    /// Replaces one answer after checking it against the catalog.
    ///
    /// Duplicate selections are collapsed, keeping the first occurrence.
    /// On error the set is left unchanged.
    pub fn set(
        &mut self,
        catalog: &Catalog,
        field_id: &str,
        value: AnswerValue,
    ) -> Result<(), ValidationError> {
        let field = catalog
            .field(field_id)
            .ok_or_else(|| ValidationError::unknown_field(field_id))?;
        field.accepts(&value)?;

        let value = match value {
            AnswerValue::Selections(values) => {
                let mut unique: Vec<String> = Vec::with_capacity(values.len());
                for v in values {
                    if !unique.contains(&v) {
                        unique.push(v);
                    }
                }
                AnswerValue::Selections(unique)
            }
            other => other,
        };

        self.values.insert(field.id.to_string(), value);
        Ok(())
    }

    /// Checkbox behavior: adds the option if absent, removes it if present.
    ///
    /// Returns whether the option is selected afterwards.
    pub fn toggle(
        &mut self,
        catalog: &Catalog,
        field_id: &str,
        option: &str,
    ) -> Result<bool, ValidationError> {
        let field = catalog
            .field(field_id)
            .ok_or_else(|| ValidationError::unknown_field(field_id))?;
        if field.kind != FieldKind::MultiChoice {
            return Err(ValidationError::kind_mismatch(
                field_id,
                FieldKind::MultiChoice.name(),
            ));
        }
        if !field.has_option(option) {
            return Err(ValidationError::invalid_option(field_id, option));
        }

        let mut current = self.selections(field_id).to_vec();
        let selected = match current.iter().position(|v| v == option) {
            Some(pos) => {
                current.remove(pos);
                false
            }
            None => {
                current.push(option.to_string());
                true
            }
        };
        self.values
            .insert(field.id.to_string(), AnswerValue::Selections(current));
        Ok(selected)
    }

    /// True if every field still holds its default value.
    pub fn is_pristine(&self, catalog: &Catalog) -> bool {
        catalog.fields().all(|f| match self.values.get(f.id) {
            Some(v) => *v == f.default_value(),
            None => true,
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> &'static Catalog {
        Catalog::standard()
    }

    #[test]
    fn new_answer_set_holds_every_field_at_default() {
        let answers = AnswerSet::new(catalog());
        assert_eq!(answers.len(), catalog().fields().count());
        assert_eq!(answers.text("companyName"), "");
        assert!(answers.selections("successMetrics").is_empty());
        assert!(answers.is_pristine(catalog()));
    }

    #[test]
    fn set_rejects_unknown_fields_without_touching_the_set() {
        let mut answers = AnswerSet::new(catalog());
        let before = answers.clone();

        let err = answers
            .set(catalog(), "favoriteColor", AnswerValue::text("red"))
            .unwrap_err();

        assert_eq!(err, ValidationError::unknown_field("favoriteColor"));
        assert_eq!(answers, before);
    }

    #[test]
    fn set_rejects_options_outside_the_option_set() {
        let mut answers = AnswerSet::new(catalog());
        let err = answers
            .set(catalog(), "industry", AnswerValue::text("mining"))
            .unwrap_err();
        assert_eq!(err, ValidationError::invalid_option("industry", "mining"));
        assert_eq!(answers.text("industry"), "");
    }

    #[test]
    fn set_collapses_duplicate_selections() {
        let mut answers = AnswerSet::new(catalog());
        answers
            .set(
                catalog(),
                "successMetrics",
                AnswerValue::selections(["response_rate", "meetings_booked", "response_rate"]),
            )
            .unwrap();
        assert_eq!(
            answers.selections("successMetrics"),
            ["response_rate", "meetings_booked"]
        );
    }

    #[test]
    fn toggle_adds_then_removes_keeping_order() {
        let mut answers = AnswerSet::new(catalog());
        assert!(answers.toggle(catalog(), "painPoints", "scaling_challenges").unwrap());
        assert!(answers.toggle(catalog(), "painPoints", "poor_lead_quality").unwrap());
        assert_eq!(
            answers.selections("painPoints"),
            ["scaling_challenges", "poor_lead_quality"]
        );

        assert!(!answers.toggle(catalog(), "painPoints", "scaling_challenges").unwrap());
        assert_eq!(answers.selections("painPoints"), ["poor_lead_quality"]);
    }

    #[test]
    fn toggle_rejects_non_multi_choice_fields() {
        let mut answers = AnswerSet::new(catalog());
        let err = answers.toggle(catalog(), "industry", "retail").unwrap_err();
        assert_eq!(err, ValidationError::kind_mismatch("industry", "multi-choice"));
    }

    #[test]
    fn any_answer_makes_the_set_non_pristine() {
        let mut answers = AnswerSet::new(catalog());
        answers
            .set(catalog(), "contactPhone", AnswerValue::text("555-0100"))
            .unwrap();
        assert!(!answers.is_pristine(catalog()));

        answers
            .set(catalog(), "contactPhone", AnswerValue::text(""))
            .unwrap();
        assert!(answers.is_pristine(catalog()));
    }

    #[test]
    fn serializes_as_plain_json_object() {
        let mut answers = AnswerSet::new(catalog());
        answers
            .set(catalog(), "companyName", AnswerValue::text("Acme"))
            .unwrap();
        answers
            .set(catalog(), "dataSources", AnswerValue::selections(["crm_data"]))
            .unwrap();

        let json = serde_json::to_value(&answers).unwrap();
        assert_eq!(json["companyName"], "Acme");
        assert_eq!(json["dataSources"], serde_json::json!(["crm_data"]));
    }
}
