//! WizardProgress value object - Step indicator data for the progress bar.

use serde::Serialize;

use super::WizardStep;

/// Where a step sits relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    Completed,
    Current,
    Upcoming,
}

/// A read-only snapshot of how far through the wizard the prospect is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardProgress {
    current: WizardStep,
}

impl WizardProgress {
    pub fn new(current: WizardStep) -> Self {
        Self { current }
    }

    pub fn current(&self) -> WizardStep {
        self.current
    }

    /// 1-based position, e.g. "Step 2 of 5".
    pub fn step_number(&self) -> usize {
        self.current.index() + 1
    }

    pub fn total_steps(&self) -> usize {
        WizardStep::COUNT
    }

    /// Share of the wizard reached, counting the current step (20..=100).
    pub fn percent(&self) -> u8 {
        ((self.step_number() * 100) / self.total_steps()) as u8
    }

    pub fn step_states(&self) -> Vec<(WizardStep, StepState)> {
        WizardStep::ORDER
            .iter()
            .map(|step| {
                let state = match step.index().cmp(&self.current.index()) {
                    std::cmp::Ordering::Less => StepState::Completed,
                    std::cmp::Ordering::Equal => StepState::Current,
                    std::cmp::Ordering::Greater => StepState::Upcoming,
                };
                (*step, state)
            })
            .collect()
    }

    /// Estimated minutes for the current section; `None` once complete.
    pub fn estimated_minutes(&self) -> Option<u32> {
        self.current.section().map(|s| s.estimated_minutes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_step_is_twenty_percent() {
        let progress = WizardProgress::new(WizardStep::OrganizationProfile);
        assert_eq!(progress.step_number(), 1);
        assert_eq!(progress.percent(), 20);
        assert_eq!(progress.estimated_minutes(), Some(5));
    }

    #[test]
    fn complete_is_one_hundred_percent() {
        let progress = WizardProgress::new(WizardStep::Complete);
        assert_eq!(progress.step_number(), 5);
        assert_eq!(progress.percent(), 100);
        assert_eq!(progress.estimated_minutes(), None);
    }

    #[test]
    fn step_states_split_around_current() {
        let progress = WizardProgress::new(WizardStep::TechnicalEnvironment);
        let states: Vec<_> = progress.step_states().into_iter().map(|(_, s)| s).collect();
        assert_eq!(
            states,
            vec![
                StepState::Completed,
                StepState::Completed,
                StepState::Current,
                StepState::Upcoming,
                StepState::Upcoming,
            ]
        );
        assert_eq!(progress.estimated_minutes(), Some(6));
    }
}
