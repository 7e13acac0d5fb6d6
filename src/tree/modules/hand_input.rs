
use log::info;

use crate::framework::updater::{
    InputContext, InputUpdateResult, UpdateContext, UpdateResultAction, UpdaterModule,
};
use crate::tree::gesture::{classify, LandmarkFrame};
use crate::tree::scene::Scene;

/// Classifies each incoming landmark frame and applies the mode rule.
/// Runs on input arrival only — ticks between detector results keep the
/// last signal.
#[derive(Default)]
pub struct HandInput;

impl UpdaterModule<Scene, LandmarkFrame> for HandInput {
    fn input(&mut self, context: &mut InputContext<Scene, LandmarkFrame>) -> InputUpdateResult {
        let scene = &mut *context.scene;

        scene.hand = classify(context.input, scene.config.open_threshold);
        let before = scene.app_state.apply_signal(&scene.hand);
        if before != scene.app_state {
            info!("mode: {} -> {}", before.as_ref(), scene.app_state.as_ref());
        }

        InputUpdateResult::default() // do not prevent event propagation
    }

    fn update(&mut self, _: &mut UpdateContext<Scene>) -> UpdateResultAction {
        UpdateResultAction::None
    }
}
