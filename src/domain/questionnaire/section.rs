//! Section enum representing the four data-entry pages of the questionnaire.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named group of fields answered on one wizard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    OrganizationProfile,
    SalesOperations,
    TechnicalEnvironment,
    AiSdrRequirements,
}

impl Section {
    /// The canonical page order.
    pub const ORDER: [Section; 4] = [
        Section::OrganizationProfile,
        Section::SalesOperations,
        Section::TechnicalEnvironment,
        Section::AiSdrRequirements,
    ];

    /// Returns all sections in canonical order.
    pub fn all() -> &'static [Section; 4] {
        &Self::ORDER
    }

    /// Returns the 0-based page index of this section.
    pub fn order_index(&self) -> usize {
        match self {
            Section::OrganizationProfile => 0,
            Section::SalesOperations => 1,
            Section::TechnicalEnvironment => 2,
            Section::AiSdrRequirements => 3,
        }
    }

    /// Returns the section at a page index, if any.
    pub fn from_index(index: usize) -> Option<Section> {
        Self::ORDER.get(index).copied()
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Section::OrganizationProfile => "Organization Profile",
            Section::SalesOperations => "Sales Operations",
            Section::TechnicalEnvironment => "Technical Environment",
            Section::AiSdrRequirements => "AI SDR Requirements",
        }
    }

    /// Collection holding this section's child record.
    pub fn record_collection(&self) -> &'static str {
        match self {
            Section::OrganizationProfile => "organization_profiles",
            Section::SalesOperations => "sales_operations",
            Section::TechnicalEnvironment => "technical_environments",
            Section::AiSdrRequirements => "ai_sdr_requirements",
        }
    }

    /// Rough time a prospect needs for this page.
    pub fn estimated_minutes(&self) -> u32 {
        match self {
            Section::OrganizationProfile => 5,
            Section::SalesOperations => 8,
            Section::TechnicalEnvironment => 6,
            Section::AiSdrRequirements => 10,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_index_matches_position_in_order() {
        for (i, section) in Section::all().iter().enumerate() {
            assert_eq!(section.order_index(), i);
            assert_eq!(Section::from_index(i), Some(*section));
        }
        assert_eq!(Section::from_index(4), None);
    }

    #[test]
    fn record_collections_are_distinct() {
        let mut names: Vec<_> = Section::all().iter().map(|s| s.record_collection()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&Section::AiSdrRequirements).unwrap();
        assert_eq!(json, "\"ai_sdr_requirements\"");
    }
}
