
/// Position + rotation + scale of one element, produced by the pure
/// per-element mapping each frame. How it is batched into GPU buffers is
/// the renderer's decision.
#[derive(Clone, Debug)]
pub struct Transform {
    pub position: glam::Vec3,
    pub rotation: glam::Quat,
    pub scale: glam::Vec3,
}

// Constants
impl Transform {
    pub const IDENTITY: Self = Self {
        position: glam::Vec3::ZERO,
        rotation: glam::Quat::IDENTITY,
        scale: glam::Vec3::ONE
    };
}

// Builders
impl Transform {
    pub fn with_position(&self, position: glam::Vec3) -> Self {
        Self { position, ..*self }
    }
    pub fn with_rotation(&self, rotation: glam::Quat) -> Self {
        Self { rotation, ..*self }
    }
    pub fn with_scale(&self, scale: glam::Vec3) -> Self {
        Self { scale, ..*self }
    }
}

// Getters
impl Transform {
    #[inline]
    pub fn as_mat(&self) -> glam::Mat4 { glam::Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position) }
}

impl Default for Transform {
    fn default() -> Self { Self::IDENTITY }
}

/// Linear interpolation between two scalars.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Cubic ease-out: fast start, settled finish. Remaps a raw smoothed
/// progress into the factor used for endpoint mixing.
#[inline]
pub fn ease_out_cubic(x: f32) -> f32 {
    1.0 - (1.0 - x).powi(3)
}

/// Converts spherical coordinates to a Cartesian point.
/// `theta` is the azimuth in [0, 2π), `phi` the polar angle in [0, π].
#[inline]
pub fn spherical_to_cartesian(radius: f32, theta: f32, phi: f32) -> glam::Vec3 {
    glam::Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}
