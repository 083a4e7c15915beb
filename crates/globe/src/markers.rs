use directory::{StakeholderId, resolve_connections};
use foundation::math::{Vec3, project_to_sphere};

use crate::session::GlobeSession;
use crate::symbology::{MarkerStyle, style_for};

/// Radius markers sit at, slightly above the unit globe surface.
pub const MARKER_RADIUS: f64 = 1.6;

/// A stakeholder marker placed on the display sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: StakeholderId,
    pub position: Vec3,
    pub visible: bool,
    pub style: MarkerStyle,
}

/// Marker placements for the session's current filter and spin.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MarkerSnapshot {
    pub markers: Vec<Marker>,
}

impl MarkerSnapshot {
    /// Markers on the near hemisphere, in record order.
    pub fn visible(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter().filter(|m| m.visible)
    }
}

pub fn extract_markers(session: &GlobeSession, radius: f64) -> MarkerSnapshot {
    let rotation = session.spin.rotation_deg;

    let markers = session
        .filtered()
        .into_iter()
        .map(|s| {
            let point = project_to_sphere(s.coord(), rotation, radius);
            Marker {
                id: s.id.clone(),
                position: point.position,
                visible: point.visible,
                style: style_for(s.kind, session.is_selected(&s.id), false),
            }
        })
        .collect();

    MarkerSnapshot { markers }
}

/// A connection line between two mutually visible markers.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ConnectionSegment {
    pub from: Vec3,
    pub to: Vec3,
}

/// Segments from the selected marker to each of its visible connections.
///
/// Empty when connections are toggled off, nothing is selected, or the
/// selected marker itself is behind the limb.
pub fn extract_connections(session: &GlobeSession, radius: f64) -> Vec<ConnectionSegment> {
    if !session.settings.show_connections {
        return Vec::new();
    }
    let Some(selected) = session.selected_stakeholder() else {
        return Vec::new();
    };

    let rotation = session.spin.rotation_deg;
    let origin = project_to_sphere(selected.coord(), rotation, radius);
    if !origin.visible {
        return Vec::new();
    }

    let mut out = Vec::new();
    for other in resolve_connections(selected, session.stakeholders()) {
        let point = project_to_sphere(other.coord(), rotation, radius);
        if !point.visible {
            continue;
        }
        out.push(ConnectionSegment {
            from: origin.position,
            to: point.position,
        });
    }
    out
}
