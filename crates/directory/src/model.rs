use std::collections::BTreeSet;

use foundation::math::GeoCoord;
use serde::{Deserialize, Serialize};

/// Unique identifier for a stakeholder record. Opaque; only compared for
/// equality when resolving connections.
pub type StakeholderId = String;

/// Mints a fresh stakeholder id.
#[cfg(not(target_arch = "wasm32"))]
pub fn mint_stakeholder_id() -> StakeholderId {
    uuid::Uuid::new_v4().to_string()
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StakeholderKind {
    Entrepreneur,
    University,
    Investor,
    Government,
    Corporate,
}

impl StakeholderKind {
    pub const ALL: [StakeholderKind; 5] = [
        StakeholderKind::Entrepreneur,
        StakeholderKind::University,
        StakeholderKind::Investor,
        StakeholderKind::Government,
        StakeholderKind::Corporate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StakeholderKind::Entrepreneur => "entrepreneur",
            StakeholderKind::University => "university",
            StakeholderKind::Investor => "investor",
            StakeholderKind::Government => "government",
            StakeholderKind::Corporate => "corporate",
        }
    }
}

impl std::fmt::Display for StakeholderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StakeholderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "entrepreneur" => Ok(StakeholderKind::Entrepreneur),
            "university" => Ok(StakeholderKind::University),
            "investor" => Ok(StakeholderKind::Investor),
            "government" => Ok(StakeholderKind::Government),
            "corporate" => Ok(StakeholderKind::Corporate),
            other => Err(format!("unknown stakeholder kind: {other}")),
        }
    }
}

/// Optional per-record impact figures. Which fields are populated depends
/// on the record's kind; none is required.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImpactMetrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employees: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub students_reached: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects_completed: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// A person or organization plotted on the globe.
///
/// Immutable by convention; updates replace the record wholesale.
/// `connections` is directed as stored and may reference ids that no
/// longer exist; resolution drops dangling entries silently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stakeholder {
    pub id: StakeholderId,
    #[serde(rename = "type")]
    pub kind: StakeholderKind,
    pub name: String,
    pub organization: String,
    pub region: String,
    /// (longitude, latitude) in degrees.
    pub coordinates: [f64; 2],
    #[serde(default)]
    pub impact_metrics: ImpactMetrics,
    #[serde(default)]
    pub interests: BTreeSet<String>,
    #[serde(default)]
    pub current_initiatives: Vec<String>,
    #[serde(default)]
    pub connections: Vec<StakeholderId>,
    pub description: String,
    #[serde(default)]
    pub contact_info: ContactInfo,
}

impl Stakeholder {
    pub fn coord(&self) -> GeoCoord {
        GeoCoord::new(self.coordinates[0], self.coordinates[1])
    }
}

#[cfg(test)]
mod tests {
    use super::{ImpactMetrics, Stakeholder, StakeholderKind};
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;

    #[test]
    fn kind_round_trips_lowercase() {
        for kind in StakeholderKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
            let parsed: StakeholderKind = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, kind);
            assert_eq!(kind.as_str().parse::<StakeholderKind>().unwrap(), kind);
        }
    }

    #[test]
    fn record_uses_the_ui_wire_shape() {
        let s = Stakeholder {
            id: "s-1".to_string(),
            kind: StakeholderKind::University,
            name: "Sarah Chen".to_string(),
            organization: "MIT".to_string(),
            region: "North America".to_string(),
            coordinates: [-71.0588, 42.3601],
            impact_metrics: ImpactMetrics {
                students_reached: Some(1200),
                ..ImpactMetrics::default()
            },
            interests: BTreeSet::from(["EdTech".to_string()]),
            current_initiatives: vec!["Scaling operations".to_string()],
            connections: vec!["s-2".to_string()],
            description: "Research lead".to_string(),
            contact_info: Default::default(),
        };

        let value = serde_json::to_value(&s).unwrap();
        assert_eq!(value["type"], "university");
        assert_eq!(value["impactMetrics"]["studentsReached"], 1200);
        assert_eq!(value["currentInitiatives"][0], "Scaling operations");
        assert!(value.get("kind").is_none());

        let back: Stakeholder = serde_json::from_value(value).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn sparse_records_deserialize_with_defaults() {
        let raw = r#"{
            "id": "s-9",
            "type": "investor",
            "name": "Acme",
            "organization": "Acme Capital",
            "region": "Europe",
            "coordinates": [2.3522, 48.8566],
            "description": ""
        }"#;
        let s: Stakeholder = serde_json::from_str(raw).unwrap();
        assert_eq!(s.kind, StakeholderKind::Investor);
        assert!(s.connections.is_empty());
        assert!(s.interests.is_empty());
        assert_eq!(s.impact_metrics, ImpactMetrics::default());
    }
}
