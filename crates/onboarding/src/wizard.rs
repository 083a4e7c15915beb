use serde::{Deserialize, Serialize};

use crate::draft::OnboardingDraft;

/// Number of wizard steps.
pub const STEP_COUNT: u8 = 5;

/// Wizard steps, in order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    StakeholderType,
    Organization,
    Location,
    ImpactMetrics,
    Interests,
}

impl WizardStep {
    /// 1-based index shown in the progress header.
    pub fn index(self) -> u8 {
        match self {
            WizardStep::StakeholderType => 1,
            WizardStep::Organization => 2,
            WizardStep::Location => 3,
            WizardStep::ImpactMetrics => 4,
            WizardStep::Interests => 5,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::StakeholderType => "Stakeholder Type",
            WizardStep::Organization => "Organization",
            WizardStep::Location => "Location",
            WizardStep::ImpactMetrics => "Impact Metrics",
            WizardStep::Interests => "Interests",
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            WizardStep::StakeholderType => Some(WizardStep::Organization),
            WizardStep::Organization => Some(WizardStep::Location),
            WizardStep::Location => Some(WizardStep::ImpactMetrics),
            WizardStep::ImpactMetrics => Some(WizardStep::Interests),
            WizardStep::Interests => None,
        }
    }

    fn prev(self) -> Option<Self> {
        match self {
            WizardStep::StakeholderType => None,
            WizardStep::Organization => Some(WizardStep::StakeholderType),
            WizardStep::Location => Some(WizardStep::Organization),
            WizardStep::ImpactMetrics => Some(WizardStep::Location),
            WizardStep::Interests => Some(WizardStep::ImpactMetrics),
        }
    }
}

/// The subset of wizard state that survives a session.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardSnapshot {
    #[serde(rename = "formData")]
    pub draft: OnboardingDraft,
    #[serde(rename = "isCompleted")]
    pub completed: bool,
}

/// Five-step onboarding flow state.
///
/// The step index is session-local; only the draft and the completed
/// flag persist (see [`WizardSnapshot`]).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Wizard {
    step: WizardStep,
    pub draft: OnboardingDraft,
    completed: bool,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Completion ratio for the progress bar, in (0, 1].
    pub fn progress(&self) -> f64 {
        f64::from(self.step.index()) / f64::from(STEP_COUNT)
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Whether the draft satisfies the current step's requirements.
    ///
    /// Impact metrics and interests are optional.
    pub fn can_proceed(&self) -> bool {
        match self.step {
            WizardStep::StakeholderType => self.draft.kind.is_some(),
            WizardStep::Organization => {
                filled(&self.draft.name) && filled(&self.draft.organization)
            }
            WizardStep::Location => filled(&self.draft.region),
            WizardStep::ImpactMetrics | WizardStep::Interests => true,
        }
    }

    /// Moves to the next step, or marks the flow completed from the last
    /// step. Returns false (and stays put) while the current step's
    /// requirements are unmet.
    pub fn advance(&mut self) -> bool {
        if !self.can_proceed() {
            return false;
        }
        match self.step.next() {
            Some(next) => self.step = next,
            None => self.completed = true,
        }
        true
    }

    /// Moves back one step; false at the first step.
    pub fn back(&mut self) -> bool {
        match self.step.prev() {
            Some(prev) => {
                self.step = prev;
                true
            }
            None => false,
        }
    }

    pub fn complete(&mut self) {
        self.completed = true;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn snapshot(&self) -> WizardSnapshot {
        WizardSnapshot {
            draft: self.draft.clone(),
            completed: self.completed,
        }
    }

    /// Restores the persisted subset; the step restarts at the beginning.
    pub fn restore(snapshot: WizardSnapshot) -> Self {
        Self {
            step: WizardStep::StakeholderType,
            draft: snapshot.draft,
            completed: snapshot.completed,
        }
    }
}

fn filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::{STEP_COUNT, Wizard, WizardStep};
    use directory::StakeholderKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn steps_gate_on_their_required_fields() {
        let mut w = Wizard::new();
        assert_eq!(w.step(), WizardStep::StakeholderType);
        assert!(!w.advance());

        w.draft.kind = Some(StakeholderKind::University);
        assert!(w.advance());
        assert_eq!(w.step(), WizardStep::Organization);

        w.draft.name = Some("Sarah Chen".to_string());
        assert!(!w.advance(), "organization still missing");
        w.draft.organization = Some("MIT".to_string());
        assert!(w.advance());
        assert_eq!(w.step(), WizardStep::Location);
    }

    fn filled_wizard() -> Wizard {
        let mut w = Wizard::new();
        w.draft.kind = Some(StakeholderKind::Investor);
        w.draft.name = Some("James Wilson".to_string());
        w.draft.organization = Some("Growth Fund LLC".to_string());
        w.draft.set_region("Europe");
        w
    }

    #[test]
    fn the_last_step_completes_the_flow() {
        let mut w = filled_wizard();
        for _ in 0..4 {
            assert!(w.advance());
        }
        assert_eq!(w.step(), WizardStep::Interests);
        assert!(!w.is_completed());

        assert!(w.advance());
        assert!(w.is_completed());
        assert_eq!(w.step(), WizardStep::Interests, "stays on the last step");
    }

    #[test]
    fn back_stops_at_the_first_step() {
        let mut w = filled_wizard();
        assert!(!w.back());
        w.advance();
        assert!(w.back());
        assert_eq!(w.step(), WizardStep::StakeholderType);
    }

    #[test]
    fn progress_spans_the_step_count() {
        let mut w = filled_wizard();
        assert_eq!(w.progress(), 1.0 / f64::from(STEP_COUNT));
        for _ in 0..4 {
            w.advance();
        }
        assert_eq!(w.progress(), 1.0);
    }

    #[test]
    fn snapshot_round_trips_without_the_step() {
        let mut w = filled_wizard();
        w.advance();
        w.complete();

        let restored = Wizard::restore(w.snapshot());
        assert_eq!(restored.draft, w.draft);
        assert!(restored.is_completed());
        assert_eq!(restored.step(), WizardStep::StakeholderType);
    }

    #[test]
    fn reset_returns_to_a_blank_flow() {
        let mut w = filled_wizard();
        w.advance();
        w.complete();
        w.reset();
        assert_eq!(w, Wizard::new());
    }
}
