//! Field definitions: value kind, options, requirement and rendering hints.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{AnswerSet, AnswerValue, Section};
use crate::domain::foundation::ValidationError;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern must compile"));

/// Returns true if the value contains a `local@domain.tld`-shaped run.
///
/// Unanchored, so surrounding text such as a display name is accepted.
pub fn is_email_shaped(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// The value kind a field collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, default empty.
    Text,
    /// One value from the option set, empty if unanswered.
    Choice,
    /// Any subset of the option set, default empty.
    MultiChoice,
    /// Integer within inclusive bounds, default `min`.
    Range { min: i64, max: i64 },
}

impl FieldKind {
    /// Short name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Choice => "choice",
            FieldKind::MultiChoice => "multi-choice",
            FieldKind::Range { .. } => "numeric-range",
        }
    }

    /// The value an unanswered field holds.
    pub fn default_value(&self) -> AnswerValue {
        match self {
            FieldKind::Text | FieldKind::Choice => AnswerValue::Text(String::new()),
            FieldKind::MultiChoice => AnswerValue::Selections(Vec::new()),
            FieldKind::Range { min, .. } => AnswerValue::Number(*min),
        }
    }
}

/// One entry of a choice or multi-choice option set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Whether the validator checks the field before leaving its page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Optional,
    /// Marked with an asterisk but not checked.
    Advisory,
    /// Checked on navigation; the message is shown when it is missing.
    Enforced { message: &'static str },
}

/// Extra shape check applied to enforced text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    Free,
    Email,
}

/// Input widget the presentation layer should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
    SingleLine,
    Email,
    Phone,
    TextArea,
    Select,
    RadioGroup,
    CheckboxGroup,
    Slider,
}

/// Conditional display rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Always,
    /// Shown when another choice field holds exactly this value.
    WhenEquals {
        field: &'static str,
        value: &'static str,
    },
    /// Shown when another multi-choice field includes this value.
    WhenContains {
        field: &'static str,
        value: &'static str,
    },
}

/// Where a field's answer lands in the submitted record set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldStorage {
    /// A column on the owning section's record.
    Column(String),
    /// One row per selected option in a dedicated collection.
    Junction { collection: String, column: String },
}

/// A single question.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub id: &'static str,
    pub label: &'static str,
    pub section: Section,
    pub kind: FieldKind,
    pub options: &'static [FieldOption],
    pub requirement: Requirement,
    pub format: FieldFormat,
    pub widget: Widget,
    pub placeholder: Option<&'static str>,
    pub visibility: Visibility,
    pub storage: FieldStorage,
}

impl Field {
    fn base(
        id: &'static str,
        label: &'static str,
        section: Section,
        kind: FieldKind,
        widget: Widget,
    ) -> Self {
        let storage = match kind {
            FieldKind::MultiChoice => FieldStorage::Junction {
                collection: snake_case(id),
                column: snake_case(id),
            },
            _ => FieldStorage::Column(snake_case(id)),
        };
        Self {
            id,
            label,
            section,
            kind,
            options: &[],
            requirement: Requirement::Optional,
            format: FieldFormat::Free,
            widget,
            placeholder: None,
            visibility: Visibility::Always,
            storage,
        }
    }

    /// Single-line free text.
    pub fn text(id: &'static str, label: &'static str, section: Section) -> Self {
        Self::base(id, label, section, FieldKind::Text, Widget::SingleLine)
    }

    /// Multi-line free text.
    pub fn text_area(id: &'static str, label: &'static str, section: Section) -> Self {
        Self::base(id, label, section, FieldKind::Text, Widget::TextArea)
    }

    /// Single choice rendered as a drop-down.
    pub fn select(
        id: &'static str,
        label: &'static str,
        section: Section,
        options: &'static [FieldOption],
    ) -> Self {
        Self::base(id, label, section, FieldKind::Choice, Widget::Select).with_options(options)
    }

    /// Single choice rendered as radio buttons.
    pub fn radio(
        id: &'static str,
        label: &'static str,
        section: Section,
        options: &'static [FieldOption],
    ) -> Self {
        Self::base(id, label, section, FieldKind::Choice, Widget::RadioGroup)
            .with_options(options)
    }

    /// Multi choice rendered as a checkbox group.
    pub fn checkboxes(
        id: &'static str,
        label: &'static str,
        section: Section,
        options: &'static [FieldOption],
    ) -> Self {
        Self::base(id, label, section, FieldKind::MultiChoice, Widget::CheckboxGroup)
            .with_options(options)
    }

    /// Bounded integer rendered as a slider.
    pub fn range(
        id: &'static str,
        label: &'static str,
        section: Section,
        min: i64,
        max: i64,
    ) -> Self {
        Self::base(id, label, section, FieldKind::Range { min, max }, Widget::Slider)
    }

    fn with_options(mut self, options: &'static [FieldOption]) -> Self {
        self.options = options;
        self
    }

    pub fn enforced(mut self, message: &'static str) -> Self {
        self.requirement = Requirement::Enforced { message };
        self
    }

    pub fn advisory(mut self) -> Self {
        self.requirement = Requirement::Advisory;
        self
    }

    pub fn email(mut self) -> Self {
        self.format = FieldFormat::Email;
        self.widget = Widget::Email;
        self
    }

    pub fn phone(mut self) -> Self {
        self.widget = Widget::Phone;
        self
    }

    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn visible_when_equals(mut self, field: &'static str, value: &'static str) -> Self {
        self.visibility = Visibility::WhenEquals { field, value };
        self
    }

    pub fn visible_when_contains(mut self, field: &'static str, value: &'static str) -> Self {
        self.visibility = Visibility::WhenContains { field, value };
        self
    }

    /// Overrides the value column of a junction collection.
    pub fn junction_column(mut self, column: &'static str) -> Self {
        if let FieldStorage::Junction { column: c, .. } = &mut self.storage {
            *c = column.to_string();
        }
        self
    }

    /// True if the field shows the required asterisk.
    pub fn shows_required_marker(&self) -> bool {
        !matches!(self.requirement, Requirement::Optional)
    }

    pub fn is_enforced(&self) -> bool {
        matches!(self.requirement, Requirement::Enforced { .. })
    }

    pub fn is_multi_choice(&self) -> bool {
        matches!(self.kind, FieldKind::MultiChoice)
    }

    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    /// Label of an option value, if declared.
    pub fn option_label(&self, value: &str) -> Option<&'static str> {
        self.options.iter().find(|o| o.value == value).map(|o| o.label)
    }

    pub fn default_value(&self) -> AnswerValue {
        self.kind.default_value()
    }

    /// Checks that a value fits this field's kind, options and bounds.
    ///
    /// An empty choice is accepted (it means "unanswered").
    pub fn accepts(&self, value: &AnswerValue) -> Result<(), ValidationError> {
        match (self.kind, value) {
            (FieldKind::Text, AnswerValue::Text(_)) => Ok(()),
            (FieldKind::Choice, AnswerValue::Text(v)) => {
                if v.is_empty() || self.has_option(v) {
                    Ok(())
                } else {
                    Err(ValidationError::invalid_option(self.id, v.as_str()))
                }
            }
            (FieldKind::MultiChoice, AnswerValue::Selections(values)) => {
                for v in values {
                    if !self.has_option(v) {
                        return Err(ValidationError::invalid_option(self.id, v.as_str()));
                    }
                }
                Ok(())
            }
            (FieldKind::Range { min, max }, AnswerValue::Number(n)) => {
                if (min..=max).contains(n) {
                    Ok(())
                } else {
                    Err(ValidationError::out_of_range(self.id, min, max, *n))
                }
            }
            (kind, _) => Err(ValidationError::kind_mismatch(self.id, kind.name())),
        }
    }

    /// Whether the field should be rendered for the given answers.
    pub fn is_visible(&self, answers: &AnswerSet) -> bool {
        match self.visibility {
            Visibility::Always => true,
            Visibility::WhenEquals { field, value } => answers.text(field) == value,
            Visibility::WhenContains { field, value } => {
                answers.selections(field).iter().any(|s| s == value)
            }
        }
    }
}

/// `crmPlatformOther` -> `crm_platform_other`.
fn snake_case(id: &str) -> String {
    let mut out = String::with_capacity(id.len() + 4);
    for c in id.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
