
//! The dense needle cloud: thousands of point elements stored as plain
//! arrays. Both endpoint layouts and the per-element attributes are
//! generated once and stay immutable; only the shared transition scalar
//! moves.

use bytemuck::{Pod, Zeroable};
use rand::Rng;

use super::{
    config::FoliageConfig,
    formation::{chaos_shell, cone_volume, ConeParams, ShellParams},
    transition::Transition,
};

/// Amplitude of the wind ripple applied while dispersed.
const RIPPLE_AMPLITUDE: f32 = 0.05;
/// Frequency of the wind ripple in radians per second.
const RIPPLE_FREQUENCY: f32 = 2.0;

/// Per-element render input, laid out for direct upload as an instance
/// buffer. `height_mix` is the fixed gradient weight derived from the
/// formed height; the renderer mixes its palettes with it and with the
/// population-wide progress.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct FoliageInstance {
    pub position: [f32; 3],
    pub scale: f32,
    pub height_mix: f32,
}

pub struct FoliageCloud {
    chaos: Vec<glam::Vec3>,
    formed: Vec<glam::Vec3>,
    scales: Vec<f32>,
    height_mix: Vec<f32>,
    pub transition: Transition,
}

impl FoliageCloud {
    pub fn generate<R: Rng>(config: &FoliageConfig, rng: &mut R) -> Self {
        let cone = ConeParams {
            height_min: config.height_range.0,
            height_max: config.height_range.1,
            base_radius: config.base_radius,
        };
        let shell = ShellParams {
            radius_min: config.shell_range.0,
            radius_max: config.shell_range.1,
        };

        let formed = cone_volume(config.count, &cone, rng);
        let chaos = chaos_shell(config.count, &shell, rng);
        let scales = (0..config.count)
            .map(|_| rng.gen_range(config.scale_range.0..=config.scale_range.1))
            .collect();
        // vertical color gradient, anchored a little below the lowest
        // branches so the base never goes fully dark
        let height_mix = formed
            .iter()
            .map(|p| ((p.y + 5.0) / 10.0).clamp(0.0, 1.0))
            .collect();

        Self {
            chaos,
            formed,
            scales,
            height_mix,
            transition: Transition::new(config.rate),
        }
    }

    pub fn len(&self) -> usize {
        self.chaos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chaos.is_empty()
    }

    /// Writes this frame's instances into `out`, reusing its allocation.
    /// Positions mix the two layouts by the eased factor; a sinusoidal
    /// ripple keeps the dispersed cloud alive and fades out entirely as
    /// the formation completes.
    pub fn write_instances(&self, time: f32, out: &mut Vec<FoliageInstance>) {
        out.clear();
        out.reserve(self.chaos.len());

        let progress = self.transition.progress();
        let ease = self.transition.ease();
        let ripple = RIPPLE_AMPLITUDE * (1.0 - progress);

        for i in 0..self.chaos.len() {
            let mut position = self.chaos[i].lerp(self.formed[i], ease);
            position.x += (time * RIPPLE_FREQUENCY + position.y).sin() * ripple;

            out.push(FoliageInstance {
                position: position.into(),
                scale: self.scales[i],
                height_mix: self.height_mix[i],
            });
        }
    }
}
