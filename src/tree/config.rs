
//! Scene configuration: population counts, layout geometry, smoothing
//! rates and gesture tuning. Everything is defaulted so a JSON file only
//! needs to name what it overrides.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::decor::{DecorShape, DecorStyle};
use super::formation::GOLDEN_ANGLE;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    pub ticks_per_second: u32,
    /// Thumb-to-index distance above which the hand counts as open.
    pub open_threshold: f32,
    /// Shared height range the decor spirals normalize their radius
    /// against, so decorations stay inside the foliage silhouette.
    pub tree_height_range: (f32, f32),
    pub view: ViewConfig,
    pub foliage: FoliageConfig,
    pub decor: Vec<DecorGroupConfig>,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: 60,
            open_threshold: 0.15,
            tree_height_range: (-4.0, 6.0),
            view: ViewConfig::default(),
            foliage: FoliageConfig::default(),
            decor: vec![
                DecorGroupConfig::gold_baubles(),
                DecorGroupConfig::red_baubles(),
                DecorGroupConfig::silver_gifts(),
                DecorGroupConfig::photo_frames(),
            ],
        }
    }
}

impl TreeConfig {
    pub fn from_json_file(path: &str) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Radians of yaw at full pointer deflection.
    pub yaw_gain: f32,
    /// Radians of pitch at full pointer deflection.
    pub pitch_gain: f32,
    /// Idle auto-rotation, radians per second.
    pub idle_spin_rate: f32,
    /// Rotation smoothing of the view rig.
    pub smoothness: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            yaw_gain: 0.5,
            pitch_gain: 0.2,
            idle_spin_rate: 0.1,
            smoothness: 0.8,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FoliageConfig {
    pub count: usize,
    /// Transition smoothing rate per second.
    pub rate: f32,
    pub height_range: (f32, f32),
    pub base_radius: f32,
    /// Radial band of the dispersed shell.
    pub shell_range: (f32, f32),
    /// Per-element scale jitter.
    pub scale_range: (f32, f32),
}

impl Default for FoliageConfig {
    fn default() -> Self {
        Self {
            count: 3000,
            rate: 2.5,
            height_range: (-4.0, 6.0),
            base_radius: 4.5,
            shell_range: (10.0, 20.0),
            scale_range: (0.5, 1.0),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DecorGroupConfig {
    pub name: String,
    pub shape: DecorShape,
    pub count: usize,
    /// Transition smoothing rate per second.
    pub rate: f32,
    pub base_radius: f32,
    pub height_range: (f32, f32),
    pub angle_step: f32,
    pub angle_offset: f32,
    pub shell_range: (f32, f32),
    pub scale_base: f32,
    pub scale_jitter: (f32, f32),
    /// Eased progress above which photo frames lock their facing.
    pub facing_ease: f32,
    pub style: DecorStyle,
}

impl Default for DecorGroupConfig {
    fn default() -> Self {
        DecorGroupConfig::gold_baubles()
    }
}

impl DecorGroupConfig {
    pub fn gold_baubles() -> Self {
        Self {
            name: "gold baubles".to_owned(),
            shape: DecorShape::Bauble,
            count: 100,
            rate: 2.0,
            base_radius: 4.0,
            height_range: (-3.0, 6.0),
            angle_step: GOLDEN_ANGLE,
            angle_offset: 0.0,
            shell_range: (8.0, 20.0),
            scale_base: 0.3,
            scale_jitter: (0.8, 1.3),
            facing_ease: 0.8,
            style: DecorStyle {
                color: [1.0, 0.84, 0.0],
                metalness: 1.0,
                roughness: 0.1,
                emissive: 0.2,
            },
        }
    }

    pub fn red_baubles() -> Self {
        Self {
            name: "red baubles".to_owned(),
            count: 60,
            scale_base: 0.25,
            style: DecorStyle {
                color: [0.55, 0.0, 0.0],
                metalness: 0.8,
                roughness: 0.2,
                emissive: 0.2,
            },
            ..Self::gold_baubles()
        }
    }

    pub fn silver_gifts() -> Self {
        Self {
            name: "silver gifts".to_owned(),
            shape: DecorShape::Gift,
            count: 30,
            scale_base: 0.4,
            style: DecorStyle {
                color: [0.75, 0.75, 0.75],
                metalness: 0.9,
                roughness: 0.3,
                emissive: 0.2,
            },
            ..Self::gold_baubles()
        }
    }

    pub fn photo_frames() -> Self {
        Self {
            name: "photo frames".to_owned(),
            shape: DecorShape::Photo,
            count: 24,
            rate: 1.5,
            base_radius: 4.2,
            height_range: (-2.0, 5.0),
            angle_step: 1.8,
            angle_offset: 0.5,
            shell_range: (8.0, 18.0),
            scale_base: 1.0,
            scale_jitter: (1.0, 1.0),
            style: DecorStyle {
                color: [1.0, 1.0, 0.94],
                metalness: 0.0,
                roughness: 0.8,
                emissive: 0.0,
            },
            ..Self::gold_baubles()
        }
    }
}
