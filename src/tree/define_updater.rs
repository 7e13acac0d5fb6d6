
use crate::framework::updater::Updater;

use super::{
    gesture::LandmarkFrame,
    modules::{FormationProgress, HandInput, ViewUpdater},
    scene::Scene,
};

/// The engine's update pipeline. Order matters: the mode must be current
/// before the transitions chase it, and the view reads the signal last.
pub fn define_updater() -> Updater<Scene, LandmarkFrame> {
    Updater::new()
        .with_module(HandInput)
        .with_module(FormationProgress)
        .with_module(ViewUpdater)
}
