//! Wizard step state machine.
//!
//! Four data-entry steps, one per section, followed by the terminal
//! `Complete` step reached only through a successful submit.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;
use crate::domain::questionnaire::Section;

/// The page the wizard is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    OrganizationProfile,
    SalesOperations,
    TechnicalEnvironment,
    AiSdrRequirements,
    /// Submission accepted. No way out except an explicit reset.
    Complete,
}

impl WizardStep {
    /// Total number of wizard states, terminal included.
    pub const COUNT: usize = 5;

    pub const ORDER: [WizardStep; 5] = [
        WizardStep::OrganizationProfile,
        WizardStep::SalesOperations,
        WizardStep::TechnicalEnvironment,
        WizardStep::AiSdrRequirements,
        WizardStep::Complete,
    ];

    /// 0-based step index.
    pub fn index(&self) -> usize {
        match self {
            WizardStep::OrganizationProfile => 0,
            WizardStep::SalesOperations => 1,
            WizardStep::TechnicalEnvironment => 2,
            WizardStep::AiSdrRequirements => 3,
            WizardStep::Complete => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<WizardStep> {
        Self::ORDER.get(index).copied()
    }

    /// The section answered on this step; `None` for `Complete`.
    pub fn section(&self) -> Option<Section> {
        Section::from_index(self.index())
    }

    /// Step reached by a successful advance.
    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Complete => None,
            other => Self::from_index(other.index() + 1),
        }
    }

    /// Step reached by going back.
    pub fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::OrganizationProfile | WizardStep::Complete => None,
            other => Self::from_index(other.index() - 1),
        }
    }

    /// True on the last data-entry step, where advancing means submitting.
    pub fn is_final_entry_step(&self) -> bool {
        matches!(self, WizardStep::AiSdrRequirements)
    }

    pub fn display_name(&self) -> &'static str {
        match self.section() {
            Some(section) => section.display_name(),
            None => "Complete",
        }
    }
}

impl StateMachine for WizardStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        self.next().into_iter().chain(self.previous()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_step_is_first_section() {
        assert_eq!(WizardStep::default(), WizardStep::OrganizationProfile);
        assert_eq!(WizardStep::default().index(), 0);
    }

    #[test]
    fn data_entry_steps_map_to_sections_in_order() {
        for (i, section) in Section::all().iter().enumerate() {
            let step = WizardStep::from_index(i).unwrap();
            assert_eq!(step.section(), Some(*section));
        }
        assert_eq!(WizardStep::Complete.section(), None);
    }

    #[test]
    fn first_step_cannot_go_back() {
        assert_eq!(WizardStep::OrganizationProfile.previous(), None);
        assert!(!WizardStep::OrganizationProfile
            .can_transition_to(&WizardStep::Complete));
    }

    #[test]
    fn complete_is_terminal() {
        assert!(WizardStep::Complete.is_terminal());
        assert_eq!(WizardStep::Complete.next(), None);
        assert_eq!(WizardStep::Complete.previous(), None);
    }

    #[test]
    fn middle_steps_move_one_either_way() {
        let step = WizardStep::TechnicalEnvironment;
        assert_eq!(
            step.valid_transitions(),
            vec![WizardStep::AiSdrRequirements, WizardStep::SalesOperations]
        );
        assert!(step.transition_to(WizardStep::OrganizationProfile).is_err());
    }

    #[test]
    fn final_entry_step_advances_to_complete() {
        assert!(WizardStep::AiSdrRequirements.is_final_entry_step());
        assert_eq!(
            WizardStep::AiSdrRequirements.transition_to(WizardStep::Complete),
            Ok(WizardStep::Complete)
        );
    }
}
