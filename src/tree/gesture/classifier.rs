
//! Pure per-frame gesture classification. No state, no drawing — debug
//! overlays belong to whatever renders the camera feed.

use super::landmarks::{LandmarkFrame, INDEX_TIP, PALM_CENTER, THUMB_TIP};

/// Thumb-to-index distance (normalized units) above which the hand counts
/// as open. Tuned, not derived.
pub const OPEN_THRESHOLD: f32 = 0.15;

/// What one camera frame says about the controlling hand.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HandSignal {
    pub detected: bool,
    pub open: bool,
    /// Palm position remapped to [-1,1] per axis, horizontally inverted to
    /// compensate for the mirrored camera feed. Detector noise can land
    /// slightly outside the range; consumers must tolerate overshoot.
    pub pointer: glam::Vec2,
}

/// Classifies one landmark frame. An empty or truncated frame yields the
/// all-default signal for this frame only.
///
/// Open/closed is the Euclidean distance between the thumb tip and the
/// index fingertip, strictly greater than `open_threshold`.
pub fn classify(frame: &LandmarkFrame, open_threshold: f32) -> HandSignal {
    let (Some(thumb), Some(index), Some(palm)) = (
        frame.get(THUMB_TIP),
        frame.get(INDEX_TIP),
        frame.get(PALM_CENTER),
    ) else {
        return HandSignal::default();
    };

    let pinch_distance = thumb.point().distance(index.point());

    HandSignal {
        detected: true,
        open: pinch_distance > open_threshold,
        pointer: glam::Vec2::new(
            (0.5 - palm.x) * 2.0, // inverted X
            (0.5 - palm.y) * 2.0,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::gesture::landmarks::{Landmark, FULL_HAND};

    fn frame_with(thumb: (f32, f32), index: (f32, f32), palm: (f32, f32)) -> LandmarkFrame {
        let mut points = vec![Landmark::new(palm.0, palm.1); FULL_HAND];
        points[THUMB_TIP] = Landmark::new(thumb.0, thumb.1);
        points[INDEX_TIP] = Landmark::new(index.0, index.1);
        points[PALM_CENTER] = Landmark::new(palm.0, palm.1);
        LandmarkFrame { points }
    }

    #[test]
    fn empty_frame_is_not_detected() {
        let signal = classify(&LandmarkFrame::empty(), OPEN_THRESHOLD);
        assert_eq!(signal, HandSignal::default());
        assert!(!signal.detected);
        assert!(!signal.open);
        assert_eq!(signal.pointer, glam::Vec2::ZERO);
    }

    #[test]
    fn truncated_frame_is_not_detected() {
        let frame = LandmarkFrame {
            points: vec![Landmark::new(0.5, 0.5); 5],
        };
        assert!(!classify(&frame, OPEN_THRESHOLD).detected);
    }

    #[test]
    fn wide_pinch_is_open() {
        let frame = frame_with((0.2, 0.5), (0.6, 0.5), (0.5, 0.5));
        let signal = classify(&frame, OPEN_THRESHOLD);
        assert!(signal.detected);
        assert!(signal.open);
    }

    #[test]
    fn narrow_pinch_is_closed() {
        let frame = frame_with((0.48, 0.5), (0.52, 0.5), (0.5, 0.5));
        let signal = classify(&frame, OPEN_THRESHOLD);
        assert!(signal.detected);
        assert!(!signal.open);
    }

    #[test]
    fn threshold_boundary_is_closed() {
        // distance of exactly 0.15 is not open: the comparison is strict
        let frame = frame_with((0.0, 0.5), (0.15, 0.5), (0.5, 0.5));
        let signal = classify(&frame, OPEN_THRESHOLD);
        assert!(!signal.open);
        // nudge past the boundary
        let frame = frame_with((0.0, 0.5), (0.16, 0.5), (0.5, 0.5));
        assert!(classify(&frame, OPEN_THRESHOLD).open);
    }

    #[test]
    fn pointer_remaps_and_mirrors() {
        let centered = classify(&frame_with((0.2, 0.5), (0.6, 0.5), (0.5, 0.5)), OPEN_THRESHOLD);
        assert_eq!(centered.pointer, glam::Vec2::ZERO);

        let top_left = classify(&frame_with((0.2, 0.5), (0.6, 0.5), (0.0, 0.0)), OPEN_THRESHOLD);
        assert_eq!(top_left.pointer, glam::Vec2::new(1.0, 1.0));

        let bottom_right = classify(&frame_with((0.2, 0.5), (0.6, 0.5), (1.0, 1.0)), OPEN_THRESHOLD);
        assert_eq!(bottom_right.pointer, glam::Vec2::new(-1.0, -1.0));
    }

    #[test]
    fn out_of_range_palm_overshoots_without_clamping() {
        let signal = classify(&frame_with((0.2, 0.5), (0.6, 0.5), (-0.1, 1.2)), OPEN_THRESHOLD);
        assert!((signal.pointer.x - 1.2).abs() < 1e-6);
        assert!((signal.pointer.y + 1.4).abs() < 1e-6);
    }
}
