use std::collections::BTreeSet;

use directory::{ContactInfo, ImpactMetrics, Stakeholder, StakeholderId, StakeholderKind};
use serde::{Deserialize, Serialize};

/// Region choices offered by the location step, with the centroid
/// coordinate assigned when a region is picked.
pub const REGION_CHOICES: [(&str, [f64; 2]); 6] = [
    ("North America", [-100.0, 45.0]),
    ("South America", [-60.0, -15.0]),
    ("Europe", [10.0, 50.0]),
    ("Africa", [20.0, 0.0]),
    ("Asia", [100.0, 30.0]),
    ("Australia/Oceania", [140.0, -25.0]),
];

/// Interest tags suggested by the interests step.
pub const SUGGESTED_INTERESTS: [&str; 10] = [
    "AI/Machine Learning",
    "Sustainability",
    "FinTech",
    "HealthTech",
    "EdTech",
    "Climate Change",
    "Social Impact",
    "Blockchain",
    "IoT",
    "Renewable Energy",
];

pub fn region_coordinates(region: &str) -> Option<[f64; 2]> {
    REGION_CHOICES
        .iter()
        .find(|(name, _)| *name == region)
        .map(|(_, coords)| *coords)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    Incomplete(&'static str),
}

impl std::fmt::Display for DraftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DraftError::Incomplete(field) => {
                write!(f, "draft is missing required field `{field}`")
            }
        }
    }
}

impl std::error::Error for DraftError {}

/// Partially filled stakeholder record accumulated by the wizard.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OnboardingDraft {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<StakeholderKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub interests: BTreeSet<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub current_initiatives: Vec<String>,
    pub impact_metrics: ImpactMetrics,
    pub contact_info: ContactInfo,
}

impl OnboardingDraft {
    /// Sets the region and the centroid coordinate it implies.
    pub fn set_region(&mut self, region: impl Into<String>) {
        let region = region.into();
        self.coordinates = region_coordinates(&region);
        self.region = Some(region);
    }

    /// Adds the tag, or removes it when already present. Blank tags are
    /// ignored.
    pub fn toggle_interest(&mut self, tag: &str) {
        let tag = tag.trim();
        if tag.is_empty() {
            return;
        }
        if !self.interests.remove(tag) {
            self.interests.insert(tag.to_string());
        }
    }

    /// Converts the draft into a full record under the supplied id.
    ///
    /// Requires kind, name, organization, and region; coordinates fall
    /// back to the chosen region's centroid. A finished record starts
    /// with no connections.
    pub fn into_stakeholder(self, id: StakeholderId) -> Result<Stakeholder, DraftError> {
        let Some(kind) = self.kind else {
            return Err(DraftError::Incomplete("type"));
        };
        let Some(name) = self.name.filter(|v| !v.trim().is_empty()) else {
            return Err(DraftError::Incomplete("name"));
        };
        let Some(organization) = self.organization.filter(|v| !v.trim().is_empty()) else {
            return Err(DraftError::Incomplete("organization"));
        };
        let Some(region) = self.region.filter(|v| !v.trim().is_empty()) else {
            return Err(DraftError::Incomplete("region"));
        };

        let coordinates = self
            .coordinates
            .or_else(|| region_coordinates(&region))
            .unwrap_or([0.0, 0.0]);

        Ok(Stakeholder {
            id,
            kind,
            name,
            organization,
            region,
            coordinates,
            impact_metrics: self.impact_metrics,
            interests: self.interests,
            current_initiatives: self.current_initiatives,
            connections: Vec::new(),
            description: self.description.unwrap_or_default(),
            contact_info: self.contact_info,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{DraftError, OnboardingDraft, region_coordinates};
    use directory::StakeholderKind;
    use pretty_assertions::assert_eq;

    fn filled_draft() -> OnboardingDraft {
        let mut draft = OnboardingDraft {
            kind: Some(StakeholderKind::Entrepreneur),
            name: Some("Emma Davis".to_string()),
            organization: Some("TechStart Inc".to_string()),
            ..OnboardingDraft::default()
        };
        draft.set_region("Europe");
        draft
    }

    #[test]
    fn region_selection_implies_a_centroid() {
        let mut draft = OnboardingDraft::default();
        draft.set_region("Asia");
        assert_eq!(draft.coordinates, Some([100.0, 30.0]));

        draft.set_region("Atlantis");
        assert_eq!(draft.region.as_deref(), Some("Atlantis"));
        assert_eq!(draft.coordinates, None);
        assert!(region_coordinates("Atlantis").is_none());
    }

    #[test]
    fn interests_toggle_as_a_set() {
        let mut draft = OnboardingDraft::default();
        draft.toggle_interest("FinTech");
        draft.toggle_interest("  FinTech  ");
        assert!(draft.interests.is_empty());

        draft.toggle_interest("FinTech");
        draft.toggle_interest("EdTech");
        draft.toggle_interest("   ");
        assert_eq!(draft.interests.len(), 2);
    }

    #[test]
    fn a_complete_draft_becomes_a_record() {
        let s = filled_draft().into_stakeholder("s-1".to_string()).unwrap();
        assert_eq!(s.id, "s-1");
        assert_eq!(s.kind, StakeholderKind::Entrepreneur);
        assert_eq!(s.region, "Europe");
        assert_eq!(s.coordinates, [10.0, 50.0]);
        assert!(s.connections.is_empty());
    }

    #[test]
    fn incomplete_drafts_report_the_first_missing_field() {
        let err = OnboardingDraft::default()
            .into_stakeholder("s-1".to_string())
            .unwrap_err();
        assert_eq!(err, DraftError::Incomplete("type"));

        let mut draft = filled_draft();
        draft.name = Some("   ".to_string());
        let err = draft.into_stakeholder("s-1".to_string()).unwrap_err();
        assert_eq!(err, DraftError::Incomplete("name"));
    }
}
