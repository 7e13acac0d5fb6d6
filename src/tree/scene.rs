
use hecs::World;

use super::{
    config::TreeConfig,
    decor::GroupPool,
    foliage::FoliageCloud,
    gesture::HandSignal,
    state::AppState,
    view::ViewRig,
};

/// Everything the engine mutates, owned by the top-level loop and passed
/// into every tick explicitly — there is no ambient shared state.
pub struct Scene {
    /// Discrete mode written only by the hand-input module.
    pub app_state: AppState,
    /// Latest classified signal; may be stale relative to the tick.
    pub hand: HandSignal,
    /// Seconds of scene time, drives spin and ripple motion.
    pub time: f32,

    pub foliage: FoliageCloud,
    pub groups: GroupPool,
    pub world: World,
    pub view: ViewRig,

    pub config: TreeConfig,
}

impl Scene {
    /// Total number of decorative elements across all groups.
    pub fn decor_count(&self) -> usize {
        self.groups.values().map(|group| group.count).sum()
    }
}
