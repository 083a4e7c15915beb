use directory::StakeholderKind;

/// Base marker scale relative to the globe radius.
pub const BASE_MARKER_SCALE: f32 = 0.05;
/// Scale multiplier for the selected marker.
pub const SELECTED_SCALE: f32 = 1.5;
/// Scale multiplier while hovered.
pub const HOVERED_SCALE: f32 = 1.2;

/// Marker presentation style.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MarkerStyle {
    pub color: [f32; 4],
    pub scale: f32,
}

/// Display color for a stakeholder kind (RGBA, 0..1).
pub const fn kind_color(kind: StakeholderKind) -> [f32; 4] {
    match kind {
        StakeholderKind::Entrepreneur => [0.063, 0.725, 0.506, 1.0], // #10B981
        StakeholderKind::University => [0.231, 0.510, 0.965, 1.0],   // #3B82F6
        StakeholderKind::Investor => [0.961, 0.620, 0.043, 1.0],     // #F59E0B
        StakeholderKind::Government => [0.937, 0.267, 0.267, 1.0],   // #EF4444
        StakeholderKind::Corporate => [0.545, 0.361, 0.965, 1.0],    // #8B5CF6
    }
}

pub fn style_for(kind: StakeholderKind, selected: bool, hovered: bool) -> MarkerStyle {
    let scale = if selected {
        BASE_MARKER_SCALE * SELECTED_SCALE
    } else if hovered {
        BASE_MARKER_SCALE * HOVERED_SCALE
    } else {
        BASE_MARKER_SCALE
    };

    MarkerStyle {
        color: kind_color(kind),
        scale,
    }
}
