
use hecs::World;
use rand::Rng;

use super::{
    config::{DecorGroupConfig, TreeConfig},
    decor::{
        ChaosAnchor, DecorGroup, ElementIndex, ElementScale, FormedAnchor, GroupKey, GroupPool,
        GroupRef, SpinPhase,
    },
    foliage::FoliageCloud,
    formation::{chaos_shell, spiral_surface, ConeParams, ShellParams, SpiralParams},
    scene::Scene,
    state::AppState,
    transition::Transition,
    view::ViewRig,
};

/// Builds the whole scene from its configuration. All endpoint layouts and
/// per-element attributes are drawn here, exactly once; nothing about them
/// changes for the scene's lifetime.
pub fn init_scene(config: TreeConfig) -> Scene {
    init_scene_with_rng(config, &mut rand::thread_rng())
}

pub fn init_scene_with_rng<R: Rng>(config: TreeConfig, rng: &mut R) -> Scene {
    let foliage = FoliageCloud::generate(&config.foliage, rng);

    let mut world = World::new();
    let mut groups = GroupPool::with_key();
    for group_config in &config.decor {
        spawn_decor_group(
            &mut world,
            &mut groups,
            group_config,
            config.tree_height_range,
            rng,
        );
    }

    Scene {
        app_state: AppState::default(),
        hand: Default::default(),
        time: 0.0,
        foliage,
        groups,
        world,
        view: ViewRig::new(&config.view),
        config,
    }
}

/// Registers one decor group and spawns its elements. Formed slots come
/// from the deterministic spiral, chaos slots from the random shell; both
/// are fixed at spawn together with scale and spin phase.
fn spawn_decor_group<R: Rng>(
    world: &mut World,
    groups: &mut GroupPool,
    config: &DecorGroupConfig,
    tree_height_range: (f32, f32),
    rng: &mut R,
) -> GroupKey {
    let envelope = ConeParams {
        height_min: tree_height_range.0,
        height_max: tree_height_range.1,
        base_radius: config.base_radius,
    };
    let spiral = SpiralParams {
        height_min: config.height_range.0,
        height_max: config.height_range.1,
        angle_step: config.angle_step,
        angle_offset: config.angle_offset,
    };
    let shell = ShellParams {
        radius_min: config.shell_range.0,
        radius_max: config.shell_range.1,
    };

    let formed = spiral_surface(config.count, &spiral, &envelope);
    let chaos = chaos_shell(config.count, &shell, rng);

    let key = groups.insert(DecorGroup {
        name: config.name.clone(),
        shape: config.shape,
        style: config.style.clone(),
        transition: Transition::new(config.rate),
        facing_ease: config.facing_ease,
        count: config.count,
    });

    for (i, (&chaos_slot, &formed_slot)) in chaos.iter().zip(&formed).enumerate() {
        let scale = config.scale_base
            * rng.gen_range(config.scale_jitter.0..=config.scale_jitter.1);
        world.spawn((
            GroupRef(key),
            ElementIndex(i),
            ChaosAnchor(chaos_slot),
            FormedAnchor(formed_slot),
            ElementScale(scale),
            SpinPhase(i as f32),
        ));
    }

    key
}
