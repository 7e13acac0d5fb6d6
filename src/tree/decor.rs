
//! Discrete decorative populations: baubles, gifts and photo frames.
//!
//! Each group shares one mesh family, one material style and one
//! transition; its members are world entities whose components are written
//! once at spawn and never mutated. Everything a frame needs is derived by
//! the pure mapping in [`element_transform`].

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumIter};

use crate::framework::math::Transform;

use super::transition::Transition;

slotmap::new_key_type! { pub struct GroupKey; }

pub type GroupPool = slotmap::SlotMap<GroupKey, DecorGroup>;

/// Mesh family of a decor group. The renderer decides what geometry backs
/// each family; the engine only distinguishes their motion policies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, AsRefStr, EnumIter)]
pub enum DecorShape {
    Bauble,
    Gift,
    Photo,
}

/// Material description, forwarded to the renderer untouched.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DecorStyle {
    pub color: [f32; 3],
    pub metalness: f32,
    pub roughness: f32,
    pub emissive: f32,
}

/// A discrete decorative population.
pub struct DecorGroup {
    pub name: String,
    pub shape: DecorShape,
    pub style: DecorStyle,
    pub transition: Transition,
    /// Eased progress above which photo frames lock onto their outward
    /// facing instead of tumbling.
    pub facing_ease: f32,
    pub count: usize,
}

impl DecorGroup {
    pub fn phase(&self, time: f32) -> GroupPhase {
        GroupPhase {
            progress: self.transition.progress(),
            ease: self.transition.ease(),
            facing_ease: self.facing_ease,
            time,
        }
    }
}

/// Where a group is in its transition at one moment of scene time.
#[derive(Clone, Copy, Debug)]
pub struct GroupPhase {
    pub progress: f32,
    pub ease: f32,
    pub facing_ease: f32,
    pub time: f32,
}

// World components, written once at spawn
// ---------------------------------------

pub struct GroupRef(pub GroupKey);
pub struct ElementIndex(pub usize);
pub struct ChaosAnchor(pub glam::Vec3);
pub struct FormedAnchor(pub glam::Vec3);
pub struct ElementScale(pub f32);
pub struct SpinPhase(pub f32);

/// Tumble speed of unformed photo frames, radians per second per axis.
const PHOTO_TUMBLE_RATE: f32 = 0.6;

/// Yaw that points an element's front away from the central axis.
pub fn outward_facing(position: glam::Vec3) -> glam::Quat {
    glam::Quat::from_rotation_y(position.x.atan2(position.z))
}

/// Orientation of one element for the current frame.
///
/// Baubles and gifts spin continuously while dispersed, the spin winding
/// down linearly with progress until they hang still. Photo frames tumble
/// time-driven until the group is effectively formed, then snap to face
/// outward and hold.
pub fn decor_rotation(
    shape: DecorShape,
    spin_phase: f32,
    phase: &GroupPhase,
    position: glam::Vec3,
) -> glam::Quat {
    match shape {
        DecorShape::Bauble | DecorShape::Gift => {
            let angle = (1.0 - phase.progress) * (spin_phase + phase.time);
            glam::Quat::from_euler(glam::EulerRot::XYZ, angle, angle, 0.0)
        },
        DecorShape::Photo => {
            if phase.ease > phase.facing_ease {
                outward_facing(position)
            } else {
                let angle = spin_phase + phase.time * PHOTO_TUMBLE_RATE;
                glam::Quat::from_euler(glam::EulerRot::XYZ, angle, angle, 0.0)
            }
        },
    }
}

/// The pure per-element mapping `(element, phase) → transform`. How the
/// result is batched into GPU buffers is the renderer's concern.
pub fn element_transform(
    chaos: glam::Vec3,
    formed: glam::Vec3,
    scale: f32,
    spin_phase: f32,
    shape: DecorShape,
    phase: &GroupPhase,
) -> Transform {
    let position = chaos.lerp(formed, phase.ease);
    Transform {
        rotation: decor_rotation(shape, spin_phase, phase, position),
        scale: glam::Vec3::splat(scale),
        position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phase(progress: f32, ease: f32) -> GroupPhase {
        GroupPhase {
            progress,
            ease,
            facing_ease: 0.8,
            time: 3.0,
        }
    }

    #[test]
    fn formed_baubles_hang_still() {
        let rotation = decor_rotation(DecorShape::Bauble, 5.0, &phase(1.0, 1.0), glam::Vec3::X);
        assert!(rotation.abs_diff_eq(glam::Quat::IDENTITY, 1e-6));
    }

    #[test]
    fn dispersed_baubles_spin_with_time() {
        let early = decor_rotation(
            DecorShape::Bauble,
            2.0,
            &GroupPhase { progress: 0.0, ease: 0.0, facing_ease: 0.8, time: 1.0 },
            glam::Vec3::X,
        );
        let later = decor_rotation(
            DecorShape::Bauble,
            2.0,
            &GroupPhase { progress: 0.0, ease: 0.0, facing_ease: 0.8, time: 2.0 },
            glam::Vec3::X,
        );
        assert!(!early.abs_diff_eq(later, 1e-6));
    }

    #[test]
    fn formed_photos_face_away_from_the_axis() {
        let position = glam::Vec3::new(3.0, 1.0, 0.0);
        let rotation = decor_rotation(DecorShape::Photo, 0.0, &phase(0.95, 0.95), position);
        let front = rotation * glam::Vec3::Z;
        // front points along +X, straight away from the trunk
        assert!(front.abs_diff_eq(glam::Vec3::X, 1e-5));
    }

    #[test]
    fn photos_tumble_until_the_facing_gate() {
        let position = glam::Vec3::new(3.0, 1.0, 0.0);
        let at_gate = decor_rotation(DecorShape::Photo, 0.0, &phase(0.8, 0.8), position);
        let past_gate = decor_rotation(DecorShape::Photo, 0.0, &phase(0.85, 0.81), position);
        // the gate is strict: exactly at the threshold still tumbles
        assert!(!at_gate.abs_diff_eq(outward_facing(position), 1e-6));
        assert!(past_gate.abs_diff_eq(outward_facing(position), 1e-6));
    }

    #[test]
    fn element_position_mixes_endpoints_by_ease() {
        let chaos = glam::Vec3::new(10.0, 0.0, 0.0);
        let formed = glam::Vec3::new(2.0, 4.0, 0.0);
        let halfway = element_transform(
            chaos,
            formed,
            0.3,
            0.0,
            DecorShape::Bauble,
            &GroupPhase { progress: 0.5, ease: 0.5, facing_ease: 0.8, time: 0.0 },
        );
        assert!(halfway.position.abs_diff_eq(glam::Vec3::new(6.0, 2.0, 0.0), 1e-5));
        assert_eq!(halfway.scale, glam::Vec3::splat(0.3));
    }
}
