
//! Scene-group orientation: tilts gently with the pointing hand, spins
//! lazily when nobody is steering. Smoothing comes from a dolly rig so the
//! view never snaps, whatever the gesture stream does.

use dolly::{
    prelude::{Smooth, YawPitch},
    rig::CameraRig,
};

use super::{config::ViewConfig, gesture::HandSignal};

pub struct ViewRig {
    rig: CameraRig,
    orientation: glam::Quat,
    yaw_gain: f32,
    pitch_gain: f32,
    idle_spin_rate: f32,
}

impl ViewRig {
    pub fn new(config: &ViewConfig) -> Self {
        let rig = CameraRig::builder()
            .with(YawPitch::new())
            .with(Smooth::new_rotation(config.smoothness))
            .build();

        Self {
            rig,
            orientation: glam::Quat::IDENTITY,
            yaw_gain: config.yaw_gain,
            pitch_gain: config.pitch_gain,
            idle_spin_rate: config.idle_spin_rate,
        }
    }

    /// Advances the rig by one frame. A detected hand retargets yaw/pitch
    /// from the pointer; otherwise yaw keeps accumulating the idle spin
    /// and pitch settles back to level.
    pub fn update(&mut self, hand: &HandSignal, delta_time_seconds: f32) -> glam::Quat {
        {
            let yaw_pitch = self.rig.driver_mut::<YawPitch>();
            if hand.detected {
                yaw_pitch.yaw_degrees = (hand.pointer.x * self.yaw_gain).to_degrees();
                yaw_pitch.pitch_degrees = (hand.pointer.y * self.pitch_gain).to_degrees();
            } else {
                yaw_pitch.rotate_yaw_pitch((self.idle_spin_rate * delta_time_seconds).to_degrees(), 0.0);
                yaw_pitch.pitch_degrees = 0.0;
            }
        }
        self.orientation = self.rig.update(delta_time_seconds).rotation.into();
        self.orientation
    }

    /// Current smoothed orientation of the scene group.
    pub fn orientation(&self) -> glam::Quat {
        self.orientation
    }

    /// Current smoothed yaw and pitch in radians.
    pub fn yaw_pitch(&self) -> (f32, f32) {
        let (yaw, pitch, _) = self.orientation.to_euler(glam::EulerRot::YXZ);
        (yaw, pitch)
    }
}
