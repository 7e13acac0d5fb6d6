
use log::{info, warn};
use strum::IntoEnumIterator;

use tree_morph_rs::framework::application::{run, RunParams};
use tree_morph_rs::tree::config::TreeConfig;
use tree_morph_rs::tree::decor::DecorShape;
use tree_morph_rs::tree::gesture::{spawn_landmark_source, ScriptedSource};
use tree_morph_rs::tree::output::RenderFrame;
use tree_morph_rs::tree::{define_updater, init_scene};

/// Headless demo: drives the engine with a scripted gesture timeline and
/// logs what a renderer would see. Pass a JSON config path to override the
/// defaults.
fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match TreeConfig::from_json_file(&path) {
            Ok(config) => config,
            Err(err) => {
                warn!("config {path}: {err}; using defaults");
                TreeConfig::default()
            },
        },
        None => TreeConfig::default(),
    };

    let ticks_per_second = config.ticks_per_second;
    let mut scene = init_scene(config);
    let mut updater = define_updater();

    info!(
        "scene ready: {} foliage elements, {} decorations in {} groups",
        scene.foliage.len(),
        scene.decor_count(),
        scene.groups.len(),
    );
    for shape in DecorShape::iter() {
        let count: usize = scene
            .groups
            .values()
            .filter(|g| g.shape == shape)
            .map(|g| g.count)
            .sum();
        info!("  {}: {count}", shape.as_ref());
    }

    let landmarks = spawn_landmark_source(ScriptedSource::demo(30));

    // the scripted timeline runs ~9 s; give it room, then stop
    run(
        &mut scene,
        &mut updater,
        landmarks,
        RunParams {
            ticks_per_second,
            max_ticks: Some(10 * ticks_per_second as u64),
        },
    );

    let mut frame = RenderFrame::new();
    frame.capture(&scene);

    let (yaw, pitch) = scene.view.yaw_pitch();
    info!(
        "finished in {} mode: foliage progress {:.3}, yaw {:.3}, pitch {:.3}",
        scene.app_state.as_ref(),
        scene.foliage.transition.progress(),
        yaw,
        pitch,
    );
    info!(
        "final frame carries {} foliage instances and {} decor groups",
        frame.foliage.len(),
        frame.groups.len(),
    );
}
