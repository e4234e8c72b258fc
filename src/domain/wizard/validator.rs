//! Per-step validation of enforced fields.

use std::collections::BTreeMap;

use serde::Serialize;

use super::WizardStep;
use crate::domain::questionnaire::{
    is_email_shaped, AnswerSet, Catalog, Field, FieldFormat, FieldKind, Requirement,
};

/// Shown when an enforced email field holds something that is not an address.
pub const INVALID_EMAIL_MESSAGE: &str = "Email is invalid";

/// Shown when an enforced choice holds a value outside its option set.
pub const INVALID_OPTION_MESSAGE: &str = "Please select one of the listed options";

/// Result of validating one step: a message per failing field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StepValidation {
    pub errors: BTreeMap<String, String>,
}

impl StepValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_for(&self, field_id: &str) -> Option<&str> {
        self.errors.get(field_id).map(String::as_str)
    }
}

/// Checks the enforced fields of the current step.
///
/// Only the step's own section is checked; earlier steps are never
/// re-validated. Advisory and optional fields never produce errors.
#[derive(Debug, Clone, Copy)]
pub struct StepValidator<'a> {
    catalog: &'a Catalog,
}

impl<'a> StepValidator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn validate(&self, step: WizardStep, answers: &AnswerSet) -> StepValidation {
        let Some(section) = step.section() else {
            return StepValidation::default();
        };

        let errors = self
            .catalog
            .fields_of(section)
            .filter_map(|field| check(field, answers).map(|msg| (field.id.to_string(), msg)))
            .collect();

        StepValidation { errors }
    }
}

fn check(field: &Field, answers: &AnswerSet) -> Option<String> {
    let Requirement::Enforced { message } = field.requirement else {
        return None;
    };

    match field.kind {
        FieldKind::Text => {
            let value = answers.text(field.id);
            if value.is_empty() {
                Some(message.to_string())
            } else if field.format == FieldFormat::Email && !is_email_shaped(value) {
                Some(INVALID_EMAIL_MESSAGE.to_string())
            } else {
                None
            }
        }
        FieldKind::Choice => {
            let value = answers.text(field.id);
            if value.is_empty() {
                Some(message.to_string())
            } else if !field.has_option(value) {
                Some(INVALID_OPTION_MESSAGE.to_string())
            } else {
                None
            }
        }
        FieldKind::MultiChoice => answers
            .selections(field.id)
            .is_empty()
            .then(|| message.to_string()),
        FieldKind::Range { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::questionnaire::AnswerValue;
    use proptest::prelude::*;

    fn catalog() -> &'static Catalog {
        Catalog::standard()
    }

    fn answers_with(pairs: &[(&str, &str)]) -> AnswerSet {
        let mut answers = AnswerSet::new(catalog());
        for (id, value) in pairs {
            answers
                .set(catalog(), id, AnswerValue::text(*value))
                .unwrap();
        }
        answers
    }

    fn validate(step: WizardStep, answers: &AnswerSet) -> StepValidation {
        StepValidator::new(catalog()).validate(step, answers)
    }

    // ───────────────────────────────────────────────────────────────
    // Organization profile
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn blank_first_step_reports_both_enforced_fields() {
        let result = validate(WizardStep::OrganizationProfile, &AnswerSet::new(catalog()));

        assert!(!result.is_valid());
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.error_for("companyName"), Some("Company name is required"));
        assert_eq!(result.error_for("contactEmail"), Some("Contact email is required"));
    }

    #[test]
    fn malformed_email_is_reported_as_invalid() {
        let answers = answers_with(&[("companyName", "Acme"), ("contactEmail", "a@b")]);
        let result = validate(WizardStep::OrganizationProfile, &answers);
        assert_eq!(result.error_for("contactEmail"), Some(INVALID_EMAIL_MESSAGE));
        assert_eq!(result.error_for("companyName"), None);
    }

    #[test]
    fn whitespace_company_name_is_present() {
        let answers = answers_with(&[("companyName", "   "), ("contactEmail", "a@b.com")]);
        let result = validate(WizardStep::OrganizationProfile, &answers);
        assert_eq!(result.error_for("companyName"), None);
    }

    #[test]
    fn email_with_display_name_is_accepted() {
        let answers = answers_with(&[
            ("companyName", "   "),
            ("contactEmail", "Jane Doe jane@acme.com"),
        ]);
        let result = validate(WizardStep::OrganizationProfile, &answers);
        assert!(result.is_valid(), "errors: {:?}", result.errors);
    }

    #[test]
    fn only_empty_text_counts_as_missing() {
        let answers = answers_with(&[("companyName", ""), ("contactEmail", "a@b.com")]);
        let result = validate(WizardStep::OrganizationProfile, &answers);
        assert_eq!(result.error_for("companyName"), Some("Company name is required"));
    }

    #[test]
    fn advisory_fields_do_not_block() {
        let answers = answers_with(&[("companyName", "Acme"), ("contactEmail", "a@b.com")]);
        let result = validate(WizardStep::OrganizationProfile, &answers);
        assert!(result.is_valid());
        assert_eq!(answers.text("industry"), "");
    }

    // ───────────────────────────────────────────────────────────────
    // Later steps
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn each_step_checks_only_its_own_section() {
        let empty = AnswerSet::new(catalog());

        let sales = validate(WizardStep::SalesOperations, &empty);
        assert_eq!(sales.errors.keys().collect::<Vec<_>>(), ["monthlyOutreachVolume"]);

        let tech = validate(WizardStep::TechnicalEnvironment, &empty);
        assert_eq!(
            tech.error_for("crmPlatform"),
            Some("CRM platform information is required")
        );
        assert_eq!(tech.errors.len(), 1);

        let ai = validate(WizardStep::AiSdrRequirements, &empty);
        assert_eq!(
            ai.errors.keys().collect::<Vec<_>>(),
            ["budgetRange", "implementationTimeline"]
        );
    }

    #[test]
    fn filled_final_step_is_valid() {
        let answers = answers_with(&[
            ("implementationTimeline", "immediate"),
            ("budgetRange", "not_determined"),
        ]);
        assert!(validate(WizardStep::AiSdrRequirements, &answers).is_valid());
    }

    #[test]
    fn complete_step_has_nothing_to_validate() {
        assert!(validate(WizardStep::Complete, &AnswerSet::new(catalog())).is_valid());
    }

    // ───────────────────────────────────────────────────────────────
    // Properties
    // ───────────────────────────────────────────────────────────────

    fn email_strategy() -> impl Strategy<Value = String> {
        ("[a-z0-9.]{1,12}", "[a-z0-9]{1,12}", "[a-z]{2,6}")
            .prop_map(|(local, domain, tld)| format!("{local}@{domain}.{tld}"))
    }

    proptest! {
        #[test]
        fn well_formed_first_step_is_always_valid(
            company in "[A-Za-z0-9][A-Za-z0-9 &.,-]{0,40}",
            email in email_strategy(),
        ) {
            let answers = answers_with(&[("companyName", company.as_str()), ("contactEmail", email.as_str())]);
            let result = validate(WizardStep::OrganizationProfile, &answers);
            prop_assert!(result.is_valid(), "errors: {:?}", result.errors);
        }

        #[test]
        fn email_without_at_sign_is_never_valid(
            email in "[a-z0-9. ]{0,30}",
        ) {
            let answers = answers_with(&[("companyName", "Acme"), ("contactEmail", email.as_str())]);
            let result = validate(WizardStep::OrganizationProfile, &answers);
            prop_assert!(!result.is_valid());
            prop_assert!(result.error_for("contactEmail").is_some());
        }

        #[test]
        fn validity_matches_empty_error_map(
            company in "[ a-z]{0,5}",
            email in "[ a-z@.]{0,8}",
        ) {
            let answers = answers_with(&[("companyName", company.as_str()), ("contactEmail", email.as_str())]);
            let result = validate(WizardStep::OrganizationProfile, &answers);
            prop_assert_eq!(result.is_valid(), result.errors.is_empty());
            prop_assert_eq!(
                result.error_for("companyName").is_some(),
                company.is_empty()
            );
        }
    }
}
