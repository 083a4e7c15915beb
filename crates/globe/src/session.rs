use directory::{
    Stakeholder, StakeholderId, StakeholderQuery, filter_stakeholders, find_by_id,
    resolve_connections,
};

use crate::settings::GlobeSettings;
use crate::spin::Spin;

/// Profile panel tab.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PanelTab {
    #[default]
    Profile,
    Feed,
    Ai,
}

/// Explicit globe view state.
///
/// Replaces the UI-global store: callers own a session and thread it
/// through their update/render loop. All record access goes through the
/// pure query functions in `directory`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GlobeSession {
    stakeholders: Vec<Stakeholder>,
    selected: Option<StakeholderId>,
    panel_open: bool,
    active_tab: PanelTab,
    loading: bool,
    pub settings: GlobeSettings,
    pub spin: Spin,
}

impl GlobeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stakeholders(&self) -> &[Stakeholder] {
        &self.stakeholders
    }

    /// Replaces the record list wholesale. A selection that no longer
    /// resolves is cleared.
    pub fn set_stakeholders(&mut self, stakeholders: Vec<Stakeholder>) {
        self.stakeholders = stakeholders;
        let dangling = self
            .selected
            .as_deref()
            .is_some_and(|id| find_by_id(&self.stakeholders, id).is_none());
        if dangling {
            self.close_panel();
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Selects a record by id, opening the panel on its profile tab.
    ///
    /// Passing `None`, or an id not present in the record list, clears
    /// the selection and closes the panel.
    pub fn select(&mut self, id: Option<StakeholderId>) {
        match id {
            Some(id) if find_by_id(&self.stakeholders, &id).is_some() => {
                self.selected = Some(id);
                self.panel_open = true;
                self.active_tab = PanelTab::Profile;
            }
            _ => self.close_panel(),
        }
    }

    pub fn close_panel(&mut self) {
        self.selected = None;
        self.panel_open = false;
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn active_tab(&self) -> PanelTab {
        self.active_tab
    }

    pub fn set_active_tab(&mut self, tab: PanelTab) {
        self.active_tab = tab;
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    pub fn selected_stakeholder(&self) -> Option<&Stakeholder> {
        let id = self.selected.as_deref()?;
        find_by_id(&self.stakeholders, id)
    }

    /// Records passing the session's kind filter, input order preserved.
    pub fn filtered(&self) -> Vec<&Stakeholder> {
        let query = StakeholderQuery {
            kind: self.settings.filter_kind,
            search: None,
        };
        filter_stakeholders(&self.stakeholders, &query)
    }

    /// Resolved connections of the current selection.
    pub fn selected_connections(&self) -> Vec<&Stakeholder> {
        match self.selected_stakeholder() {
            Some(s) => resolve_connections(s, &self.stakeholders),
            None => Vec::new(),
        }
    }

    /// Per-frame update: advances the spin while auto-rotate is enabled.
    pub fn update(&mut self, dt_s: f64) {
        if self.settings.auto_rotate {
            self.spin.advance(dt_s);
        }
    }
}
