
use crate::framework::updater::{
    InputContext, InputUpdateResult, UpdateContext, UpdateResultAction, UpdaterModule,
};
use crate::tree::gesture::LandmarkFrame;
use crate::tree::scene::Scene;

/// Advances scene time and every population's transition toward the
/// current mode's target, once per tick.
#[derive(Default)]
pub struct FormationProgress;

impl UpdaterModule<Scene, LandmarkFrame> for FormationProgress {
    fn input(&mut self, _: &mut InputContext<Scene, LandmarkFrame>) -> InputUpdateResult {
        InputUpdateResult::default()
    }

    fn update(&mut self, context: &mut UpdateContext<Scene>) -> UpdateResultAction {
        let dt = context.tick.delta_seconds();
        let scene = &mut *context.scene;

        scene.time += dt;

        let state = scene.app_state;
        scene.foliage.transition.advance(state, dt);
        for group in scene.groups.values_mut() {
            group.transition.advance(state, dt);
        }

        // spin and ripple keep the scene in motion even at rest
        UpdateResultAction::Redraw
    }
}
