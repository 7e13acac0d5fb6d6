
use crate::framework::updater::{
    InputContext, InputUpdateResult, UpdateContext, UpdateResultAction, UpdaterModule,
};
use crate::tree::gesture::LandmarkFrame;
use crate::tree::scene::Scene;

/// Advances the view rig each tick from whatever signal the scene last
/// saw. Works the same whether the detector delivered this tick or not.
#[derive(Default)]
pub struct ViewUpdater;

impl UpdaterModule<Scene, LandmarkFrame> for ViewUpdater {
    fn input(&mut self, _: &mut InputContext<Scene, LandmarkFrame>) -> InputUpdateResult {
        InputUpdateResult::default()
    }

    fn update(&mut self, context: &mut UpdateContext<Scene>) -> UpdateResultAction {
        let scene = &mut *context.scene;
        let hand = scene.hand;
        scene.view.update(&hand, context.tick.delta_seconds());
        UpdateResultAction::Redraw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::clock::Tick;
    use crate::tree::config::TreeConfig;
    use crate::tree::gesture::HandSignal;
    use crate::tree::init_scene_with_rng;
    use rand::{rngs::StdRng, SeedableRng};
    use std::time::{Duration, Instant};

    #[test]
    fn stale_signal_still_steers_the_view() {
        let mut config = TreeConfig::default();
        config.foliage.count = 0;
        for group in &mut config.decor {
            group.count = 0;
        }
        let mut scene = init_scene_with_rng(config, &mut StdRng::seed_from_u64(13));
        scene.hand = HandSignal {
            detected: true,
            open: false,
            pointer: glam::Vec2::new(1.0, 0.0),
        };

        let mut module = ViewUpdater;
        for _ in 0..180 {
            let tick = Tick {
                order: 1,
                time: Instant::now(),
                delta: Duration::from_secs_f32(1.0 / 60.0),
            };
            module.update(&mut UpdateContext {
                scene: &mut scene,
                tick: &tick,
            });
        }

        let (yaw, _) = scene.view.yaw_pitch();
        assert!((yaw - 0.5).abs() < 0.05, "yaw {yaw}");
    }
}
