
use strum_macros::AsRefStr;

use super::gesture::HandSignal;

/// The installation's discrete mode. Exactly one value at any time; the
/// visual transition between modes is smoothed downstream, never here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum AppState {
    Chaos,
    #[default]
    Formed,
}

impl AppState {
    /// Progress value the transitions chase while this state holds.
    #[inline]
    pub fn target_progress(self) -> f32 {
        match self {
            AppState::Chaos => 0.0,
            AppState::Formed => 1.0,
        }
    }

    /// Level-triggered mode rule: an open hand scatters, a closed hand
    /// forms, no hand holds the last value. There is deliberately no
    /// debounce or dwell time — flicker near the pinch threshold flickers
    /// the state and is absorbed by the easing downstream.
    ///
    /// Returns the previous state so callers can log transitions.
    pub fn apply_signal(&mut self, signal: &HandSignal) -> AppState {
        let before = *self;
        if signal.detected {
            *self = if signal.open {
                AppState::Chaos
            } else {
                AppState::Formed
            };
        }
        before
    }
}
