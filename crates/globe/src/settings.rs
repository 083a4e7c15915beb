use directory::StakeholderKind;

/// How the stakeholder layer is drawn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum VisualizationMode {
    Points,
    Heatmap,
    #[default]
    Enhanced,
    Satellite,
}

/// Presentation toggles for the globe view.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GlobeSettings {
    pub auto_rotate: bool,
    pub show_connections: bool,
    /// When set, only records of this kind are placed on the globe.
    pub filter_kind: Option<StakeholderKind>,
    pub visualization_mode: VisualizationMode,
    pub show_countries: bool,
    pub show_3d_bars: bool,
    pub show_day_night_cycle: bool,
    pub use_custom_markers: bool,
    pub show_particle_effects: bool,
}

impl Default for GlobeSettings {
    fn default() -> Self {
        Self {
            auto_rotate: true,
            show_connections: true,
            filter_kind: None,
            visualization_mode: VisualizationMode::Enhanced,
            show_countries: true,
            show_3d_bars: false,
            show_day_night_cycle: false,
            use_custom_markers: false,
            show_particle_effects: true,
        }
    }
}

impl GlobeSettings {
    pub fn set_filter(&mut self, kind: Option<StakeholderKind>) {
        self.filter_kind = kind;
    }

    pub fn set_visualization_mode(&mut self, mode: VisualizationMode) {
        self.visualization_mode = mode;
    }

    pub fn toggle_auto_rotate(&mut self) {
        self.auto_rotate = !self.auto_rotate;
    }

    pub fn toggle_connections(&mut self) {
        self.show_connections = !self.show_connections;
    }

    pub fn toggle_countries(&mut self) {
        self.show_countries = !self.show_countries;
    }

    pub fn toggle_3d_bars(&mut self) {
        self.show_3d_bars = !self.show_3d_bars;
    }

    pub fn toggle_day_night_cycle(&mut self) {
        self.show_day_night_cycle = !self.show_day_night_cycle;
    }

    pub fn toggle_custom_markers(&mut self) {
        self.use_custom_markers = !self.use_custom_markers;
    }

    pub fn toggle_particle_effects(&mut self) {
        self.show_particle_effects = !self.show_particle_effects;
    }
}

#[cfg(test)]
mod tests {
    use super::{GlobeSettings, VisualizationMode};
    use directory::StakeholderKind;

    #[test]
    fn defaults_match_the_initial_view() {
        let s = GlobeSettings::default();
        assert!(s.auto_rotate);
        assert!(s.show_connections);
        assert!(s.filter_kind.is_none());
        assert_eq!(s.visualization_mode, VisualizationMode::Enhanced);
        assert!(s.show_countries);
        assert!(!s.show_3d_bars);
        assert!(!s.show_day_night_cycle);
        assert!(!s.use_custom_markers);
        assert!(s.show_particle_effects);
    }

    #[test]
    fn toggles_flip_and_restore() {
        let mut s = GlobeSettings::default();
        s.toggle_auto_rotate();
        assert!(!s.auto_rotate);
        s.toggle_auto_rotate();
        assert!(s.auto_rotate);

        s.set_filter(Some(StakeholderKind::Investor));
        assert_eq!(s.filter_kind, Some(StakeholderKind::Investor));
        s.set_filter(None);
        assert!(s.filter_kind.is_none());
    }
}
