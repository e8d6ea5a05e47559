//! Action selection and clip timing for the character demo.
//!
//! The original demo hands these decisions to a skinned-mesh animator; the
//! clip player itself is a collaborator, so only the selection rules and
//! the looping phase live here.

/// A character action with an associated looping clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    #[default]
    Idle,
    Walk,
    Run,
    Jump,
}

impl Action {
    /// Clip playback rate in cycles per second.
    pub fn cycle_rate(self) -> f32 {
        match self {
            Action::Idle => 0.4,
            Action::Walk => 1.1,
            Action::Run => 1.8,
            Action::Jump => 0.9,
        }
    }

    /// Ground speed the character covers while the clip plays.
    pub fn travel_speed(self) -> f32 {
        match self {
            Action::Idle | Action::Jump => 0.0,
            Action::Walk => 1.4,
            Action::Run => 4.0,
        }
    }
}

/// Tracks the active action and its normalized clip phase.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActionState {
    action: Action,
    phase: f32,
}

impl ActionState {
    pub fn action(&self) -> Action {
        self.action
    }

    /// Normalized clip time in `[0, 1)`.
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Switches to `action`. The clip restarts only on an actual change;
    /// holding the same key does not keep resetting the clip.
    pub fn set_action(&mut self, action: Action) {
        if action != self.action {
            log::debug!("action change: {:?} -> {:?}", self.action, action);
            self.action = action;
            self.phase = 0.0;
        }
    }

    /// Advances the clip by `dt` seconds, wrapping at the cycle end.
    pub fn update(&mut self, dt: f32) {
        self.phase = (self.phase + self.action.cycle_rate() * dt).rem_euclid(1.0);
    }
}
