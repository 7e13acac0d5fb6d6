
//! Procedural end-state layouts.
//!
//! Each population gets two fixed position arrays at creation time: a
//! dispersed chaos shell and a formed slot on or inside the tree cone.
//! Layouts are generated exactly once per population and never regenerated,
//! no matter how many chaos/formed cycles the scene goes through.

use std::f32::consts::TAU;

use rand::Rng;

use crate::framework::math::spherical_to_cartesian;

/// Golden angle in radians. Spaces successive spiral slots so that no two
/// elements share an azimuth for any reasonable count.
pub const GOLDEN_ANGLE: f32 = 2.4;

/// The cone envelope: a linear taper from `base_radius` at `height_min` to
/// zero at `height_max`.
#[derive(Clone, Copy, Debug)]
pub struct ConeParams {
    pub height_min: f32,
    pub height_max: f32,
    pub base_radius: f32,
}

impl ConeParams {
    /// Cone radius at a given height. Degenerate height ranges collapse to
    /// a zero-radius spine instead of dividing by zero.
    pub fn radius_at(&self, height: f32) -> f32 {
        let span = self.height_max - self.height_min;
        if span <= f32::EPSILON {
            return 0.0;
        }
        let norm_height = ((height - self.height_min) / span).clamp(0.0, 1.0);
        self.base_radius * (1.0 - norm_height)
    }
}

/// Placement parameters for a deterministic spiral around the cone surface.
#[derive(Clone, Copy, Debug)]
pub struct SpiralParams {
    pub height_min: f32,
    pub height_max: f32,
    pub angle_step: f32,
    pub angle_offset: f32,
}

/// Radial band of the dispersed shell.
#[derive(Clone, Copy, Debug)]
pub struct ShellParams {
    pub radius_min: f32,
    pub radius_max: f32,
}

/// Randomly fills the cone volume: height uniform over the range, azimuth
/// uniform, radius uniform up to the envelope at that height.
pub fn cone_volume<R: Rng>(count: usize, cone: &ConeParams, rng: &mut R) -> Vec<glam::Vec3> {
    (0..count)
        .map(|_| {
            let height = if cone.height_max > cone.height_min {
                rng.gen_range(cone.height_min..=cone.height_max)
            } else {
                cone.height_min
            };
            let angle = rng.gen_range(0.0..TAU);
            let radius = rng.gen_range(0.0..=cone.radius_at(height));
            glam::Vec3::new(angle.cos() * radius, height, angle.sin() * radius)
        })
        .collect()
}

/// Places `count` elements on the cone surface along a spiral: height is
/// linear in the index, the angle advances by a fixed step, and the radius
/// sits exactly on the envelope. Same index, same slot — always.
pub fn spiral_surface(count: usize, spiral: &SpiralParams, envelope: &ConeParams) -> Vec<glam::Vec3> {
    (0..count)
        .map(|i| {
            let i_norm = i as f32 / count as f32;
            let height = spiral.height_min + i_norm * (spiral.height_max - spiral.height_min);
            let angle = i as f32 * spiral.angle_step + spiral.angle_offset;
            let radius = envelope.radius_at(height);
            glam::Vec3::new(angle.cos() * radius, height, angle.sin() * radius)
        })
        .collect()
}

/// Disperses `count` elements in a spherical shell around the origin.
/// Directions are uniform on the sphere: the polar angle is the arccosine
/// of a uniform sample, which avoids crowding at the poles.
pub fn chaos_shell<R: Rng>(count: usize, shell: &ShellParams, rng: &mut R) -> Vec<glam::Vec3> {
    (0..count)
        .map(|_| {
            let theta = rng.gen_range(0.0..TAU);
            let phi = rng.gen_range(-1.0f32..=1.0).acos();
            let radius = rng.gen_range(shell.radius_min..=shell.radius_max);
            spherical_to_cartesian(radius, theta, phi)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    const TREE_CONE: ConeParams = ConeParams {
        height_min: -4.0,
        height_max: 6.0,
        base_radius: 4.5,
    };

    #[test]
    fn cone_volume_stays_inside_the_envelope() {
        let mut rng = StdRng::seed_from_u64(7);
        for p in cone_volume(500, &TREE_CONE, &mut rng) {
            assert!(p.y >= TREE_CONE.height_min && p.y <= TREE_CONE.height_max);
            let radial = (p.x * p.x + p.z * p.z).sqrt();
            assert!(radial <= TREE_CONE.radius_at(p.y) + 1e-4);
        }
    }

    #[test]
    fn spiral_angle_advances_by_the_golden_step() {
        let spiral = SpiralParams {
            height_min: -3.0,
            height_max: 6.0,
            angle_step: GOLDEN_ANGLE,
            angle_offset: 0.0,
        };
        let slots = spiral_surface(64, &spiral, &TREE_CONE);
        for (i, pair) in slots.windows(2).enumerate() {
            let a0 = pair[0].z.atan2(pair[0].x);
            let a1 = pair[1].z.atan2(pair[1].x);
            let delta = (a1 - a0).rem_euclid(TAU);
            assert!(
                (delta - GOLDEN_ANGLE).abs() < 1e-3,
                "slot {i}: delta {delta}"
            );
        }
    }

    #[test]
    fn spiral_is_deterministic_in_the_index() {
        let spiral = SpiralParams {
            height_min: -2.0,
            height_max: 5.0,
            angle_step: 1.8,
            angle_offset: 0.5,
        };
        let a = spiral_surface(24, &spiral, &TREE_CONE);
        let b = spiral_surface(24, &spiral, &TREE_CONE);
        assert_eq!(a, b);
    }

    #[test]
    fn spiral_sits_on_the_surface() {
        let spiral = SpiralParams {
            height_min: -3.0,
            height_max: 6.0,
            angle_step: GOLDEN_ANGLE,
            angle_offset: 0.0,
        };
        for p in spiral_surface(32, &spiral, &TREE_CONE) {
            let radial = (p.x * p.x + p.z * p.z).sqrt();
            assert!((radial - TREE_CONE.radius_at(p.y)).abs() < 1e-4);
        }
    }

    #[test]
    fn shell_respects_the_radial_band() {
        let mut rng = StdRng::seed_from_u64(11);
        let shell = ShellParams {
            radius_min: 8.0,
            radius_max: 20.0,
        };
        for p in chaos_shell(500, &shell, &mut rng) {
            let r = p.length();
            assert!(r >= shell.radius_min - 1e-4 && r <= shell.radius_max + 1e-4);
        }
    }

    #[test]
    fn zero_count_yields_empty_layouts() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(cone_volume(0, &TREE_CONE, &mut rng).is_empty());
        assert!(chaos_shell(0, &ShellParams { radius_min: 1.0, radius_max: 2.0 }, &mut rng).is_empty());
        let spiral = SpiralParams {
            height_min: 0.0,
            height_max: 1.0,
            angle_step: GOLDEN_ANGLE,
            angle_offset: 0.0,
        };
        assert!(spiral_surface(0, &spiral, &TREE_CONE).is_empty());
    }

    #[test]
    fn degenerate_ranges_do_not_divide_by_zero() {
        let mut rng = StdRng::seed_from_u64(5);
        let flat = ConeParams {
            height_min: 2.0,
            height_max: 2.0,
            base_radius: 4.5,
        };
        let points = cone_volume(8, &flat, &mut rng);
        assert_eq!(points.len(), 8);
        for p in points {
            assert!(p.is_finite());
            assert_eq!(p.y, 2.0);
        }

        let single = spiral_surface(
            1,
            &SpiralParams {
                height_min: -3.0,
                height_max: 6.0,
                angle_step: GOLDEN_ANGLE,
                angle_offset: 0.0,
            },
            &TREE_CONE,
        );
        assert_eq!(single.len(), 1);
        assert!(single[0].is_finite());
    }
}
