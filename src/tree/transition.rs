
use crate::framework::math::{ease_out_cubic, lerp};

use super::state::AppState;

/// Smoothed progress of one population between its two layouts:
/// 0 is fully dispersed, 1 is fully formed.
///
/// Every element of the population shares this one scalar; per-element
/// variation comes only from the fixed endpoints and scales. The value
/// approaches its target exponentially and never jumps or resets.
#[derive(Clone, Debug)]
pub struct Transition {
    progress: f32,
    rate: f32,
}

impl Transition {
    /// Starts at zero progress regardless of the initial mode: a freshly
    /// built scene assembles in over its first seconds.
    pub fn new(rate: f32) -> Self {
        Self { progress: 0.0, rate }
    }

    /// One exponential-smoothing step toward the mode's target, keyed by
    /// the elapsed frame time. Oversized steps clamp onto the target
    /// instead of overshooting.
    pub fn advance(&mut self, state: AppState, dt: f32) -> f32 {
        let t = (dt * self.rate).clamp(0.0, 1.0);
        self.progress = lerp(self.progress, state.target_progress(), t);
        self.progress
    }

    /// Raw smoothed progress — the value used for gating logic and color
    /// blending.
    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Cubic-eased factor used for mixing the two endpoint layouts.
    #[inline]
    pub fn ease(&self) -> f32 {
        ease_out_cubic(self.progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_monotonically_toward_formed() {
        let mut transition = Transition::new(2.0);
        let mut prev = transition.progress();
        for _ in 0..600 {
            let p = transition.advance(AppState::Formed, 1.0 / 60.0);
            assert!(p >= prev);
            if prev < 0.999 {
                assert!(p > prev, "must keep climbing until near the target");
            }
            assert!((0.0..=1.0).contains(&p));
            prev = p;
        }
        assert!(prev > 0.999);
    }

    #[test]
    fn five_coarse_steps_nearly_complete_the_transition() {
        let mut transition = Transition::new(2.5);
        for _ in 0..5 {
            transition.advance(AppState::Formed, 1.0);
        }
        assert!(transition.progress() > 0.9);
        assert!(transition.progress() <= 1.0);
    }

    #[test]
    fn oversized_step_clamps_onto_the_target() {
        let mut transition = Transition::new(2.5);
        // dt * rate far beyond 1: lands exactly on the target, no overshoot
        let p = transition.advance(AppState::Formed, 10.0);
        assert_eq!(p, 1.0);
        let p = transition.advance(AppState::Chaos, 10.0);
        assert_eq!(p, 0.0);
    }

    #[test]
    fn reverses_smoothly_when_the_mode_flips() {
        let mut transition = Transition::new(2.0);
        for _ in 0..120 {
            transition.advance(AppState::Formed, 1.0 / 60.0);
        }
        let peak = transition.progress();
        assert!(peak > 0.9);

        transition.advance(AppState::Chaos, 1.0 / 60.0);
        let after = transition.progress();
        assert!(after < peak);
        assert!(after > 0.0, "smoothing never jumps to the target");
    }

    #[test]
    fn ease_leads_the_raw_progress() {
        let mut transition = Transition::new(2.0);
        for _ in 0..30 {
            transition.advance(AppState::Formed, 1.0 / 60.0);
        }
        let p = transition.progress();
        assert!(p > 0.0 && p < 1.0);
        // ease-out runs ahead of the raw value in mid-transition
        assert!(transition.ease() > p);
    }
}
