
use super::clock::Tick;

// Contexts
// --------

/// Passed to modules when a fresh input payload arrived from the source
/// thread. The scene is threaded through explicitly so no module depends on
/// ambient shared state.
pub struct InputContext<'a, Scene, In> {
    pub scene: &'a mut Scene,
    pub input: &'a In,
    pub tick:  &'a Tick,
}

/// Passed to modules on every tick, whether or not new input arrived.
pub struct UpdateContext<'a, Scene> {
    pub scene: &'a mut Scene,
    pub tick:  &'a Tick,
}

// Update results
// --------------

#[derive(Debug, Clone)]
pub enum UpdateResultAction {
    None, Redraw, Exit
}

impl UpdateResultAction {
    pub fn combine(self, other: Self) -> Self {
        match (self, other) {
            (UpdateResultAction::Exit, _) => UpdateResultAction::Exit,
            (_, UpdateResultAction::Exit) => UpdateResultAction::Exit,
            (UpdateResultAction::Redraw, _) => UpdateResultAction::Redraw,
            (_, UpdateResultAction::Redraw) => UpdateResultAction::Redraw,
            _ => UpdateResultAction::None,
        }
    }
}

pub struct InputUpdateResult {
    pub handled: bool,
    pub result: UpdateResultAction,
}

impl InputUpdateResult {
    pub fn combine(self, other: Self) -> Self {
        Self {
            handled: self.handled || other.handled,
            result: self.result.combine(other.result),
        }
    }
}

impl Default for InputUpdateResult {
    fn default() -> Self {
        Self {
            handled: false,
            result: UpdateResultAction::None,
        }
    }
}

// UpdaterModule
// -------------

pub trait UpdaterModule<Scene, In> {
    fn input(&mut self, context: &mut InputContext<Scene, In>) -> InputUpdateResult;
    fn update(&mut self, context: &mut UpdateContext<Scene>) -> UpdateResultAction;
}

// Updater
// -------

/// Ordered list of modules advanced together. Modules run in registration
/// order; an input marked handled stops propagation to later modules.
pub struct Updater<Scene, In> {
    modules: Vec<Box<dyn UpdaterModule<Scene, In>>>,
    pub update_cnt: u64,
    pub input_cnt: u64,
}

impl<Scene, In> Updater<Scene, In> {
    pub fn new() -> Self {
        Self {
            modules: vec![],
            update_cnt: 0,
            input_cnt: 0,
        }
    }

    pub fn with_module<M>(mut self, module: M) -> Self
    where
        M: UpdaterModule<Scene, In> + 'static
    {
        self.modules.push(Box::new(module));
        self
    }

    /// Invoked when a new input payload has arrived
    pub fn input(&mut self, mut context: InputContext<Scene, In>) -> UpdateResultAction {
        let mut result = InputUpdateResult::default();
        for module in self.modules.iter_mut() {
            result = result.combine(module.input(&mut context));
            if result.handled {
                break;
            }
        }
        self.input_cnt += 1;
        result.result
    }

    /// Invoked on tick
    pub fn update(&mut self, mut context: UpdateContext<Scene>) -> UpdateResultAction {
        let mut result = UpdateResultAction::None;
        for module in self.modules.iter_mut() {
            result = result.combine(module.update(&mut context));
        }
        self.update_cnt += 1;
        result
    }
}

impl<Scene, In> Default for Updater<Scene, In> {
    fn default() -> Self {
        Self::new()
    }
}
