
//! The per-frame boundary to the rendering layer.
//!
//! [`RenderFrame::capture`] evaluates the pure element mapping over the
//! whole scene into flat instance buffers. The frame is meant to live as
//! long as the render loop and be captured into repeatedly — buffers are
//! cleared, not reallocated.

use bytemuck::{Pod, Zeroable};
use slotmap::SecondaryMap;

use super::{
    decor::{
        element_transform, ChaosAnchor, DecorShape, DecorStyle, ElementIndex, ElementScale,
        FormedAnchor, GroupKey, GroupRef, SpinPhase,
    },
    foliage::FoliageInstance,
    scene::Scene,
    state::AppState,
};

/// One decorative element, ready for instanced drawing. `index` is the
/// element's stable id within its group (photo frames use it to pick their
/// picture).
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct DecorInstance {
    pub position: [f32; 3],
    pub scale: f32,
    pub rotation: [f32; 4],
    pub index: u32,
}

/// Per-group slice of the frame: mesh family, material, transition phase
/// and the instances themselves.
pub struct GroupFrame {
    pub shape: DecorShape,
    pub style: DecorStyle,
    pub progress: f32,
    pub ease: f32,
    pub instances: Vec<DecorInstance>,
}

/// Snapshot of everything the renderer needs for one frame.
#[derive(Default)]
pub struct RenderFrame {
    pub app_state: AppState,
    pub time: f32,

    pub foliage: Vec<FoliageInstance>,
    pub foliage_progress: f32,
    pub foliage_ease: f32,

    pub groups: SecondaryMap<GroupKey, GroupFrame>,

    /// Scene-group orientation.
    pub orientation: glam::Quat,
    pub yaw: f32,
    pub pitch: f32,
}

impl RenderFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capture(&mut self, scene: &Scene) {
        self.app_state = scene.app_state;
        self.time = scene.time;

        scene.foliage.write_instances(scene.time, &mut self.foliage);
        self.foliage_progress = scene.foliage.transition.progress();
        self.foliage_ease = scene.foliage.transition.ease();

        // refresh group headers, clearing instance buffers in place
        for (key, group) in scene.groups.iter() {
            if let Some(frame) = self.groups.get_mut(key) {
                frame.shape = group.shape;
                frame.style = group.style.clone();
                frame.progress = group.transition.progress();
                frame.ease = group.transition.ease();
                frame.instances.clear();
            } else {
                self.groups.insert(
                    key,
                    GroupFrame {
                        shape: group.shape,
                        style: group.style.clone(),
                        progress: group.transition.progress(),
                        ease: group.transition.ease(),
                        instances: Vec::with_capacity(group.count),
                    },
                );
            }
        }

        for (_, (group_ref, index, chaos, formed, scale, spin)) in scene
            .world
            .query::<(
                &GroupRef,
                &ElementIndex,
                &ChaosAnchor,
                &FormedAnchor,
                &ElementScale,
                &SpinPhase,
            )>()
            .iter()
        {
            let Some(group) = scene.groups.get(group_ref.0) else {
                continue;
            };
            let Some(frame) = self.groups.get_mut(group_ref.0) else {
                continue;
            };

            let transform = element_transform(
                chaos.0,
                formed.0,
                scale.0,
                spin.0,
                group.shape,
                &group.phase(scene.time),
            );
            frame.instances.push(DecorInstance {
                position: transform.position.into(),
                scale: scale.0,
                rotation: transform.rotation.to_array(),
                index: index.0 as u32,
            });
        }

        self.orientation = scene.view.orientation();
        (self.yaw, self.pitch) = scene.view.yaw_pitch();
    }
}
