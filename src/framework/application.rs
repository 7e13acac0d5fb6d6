
use std::sync::mpsc::{Receiver, TryRecvError};

use log::info;

use super::{
    clock::Clock,
    updater::{
        Updater,
        InputContext,
        UpdateContext,
        UpdateResultAction,
    },
};

#[derive(Clone, Debug)]
pub struct RunParams {
    pub ticks_per_second: u32,
    /// Stop after this many ticks. `None` runs until a module requests exit.
    pub max_ticks: Option<u64>,
}

impl Default for RunParams {
    fn default() -> Self {
        Self {
            ticks_per_second: 60,
            max_ticks: None,
        }
    }
}

/// Headless main loop: consumes input payloads from the source thread and
/// advances the scene at a fixed tick rate.
///
/// The input channel is drained every iteration and only the newest payload
/// is dispatched (last-value-wins) — the detector delivers at its own
/// cadence and is not aligned with ticks. A closed channel is not fatal:
/// the loop keeps ticking on whatever the scene last saw.
pub fn run<S, In>(
    scene: &mut S,
    updater: &mut Updater<S, In>,
    inputs: Receiver<In>,
    params: RunParams,
) {
    let mut clock = Clock::now(params.ticks_per_second as u64);
    let mut source_connected = true;

    loop {
        // Latest input wins; intermediate payloads within one iteration are
        // superseded before anyone observed them.
        let mut newest: Option<In> = None;
        loop {
            match inputs.try_recv() {
                Ok(payload) => newest = Some(payload),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if source_connected {
                        info!("input source disconnected, continuing on last known state");
                        source_connected = false;
                    }
                    break;
                },
            }
        }

        let mut flow_result_action = UpdateResultAction::None;

        if let Some(payload) = newest.as_ref() {
            flow_result_action = flow_result_action.combine(updater.input(InputContext {
                scene: &mut *scene,
                input: payload,
                tick:  clock.current_tick(),
            }));
        }

        if clock.tick() {
            flow_result_action = flow_result_action.combine(updater.update(UpdateContext {
                scene: &mut *scene,
                tick:  clock.current_tick(),
            }));

            if let Some(max) = params.max_ticks {
                if clock.current_tick().order >= max {
                    return;
                }
            }
        } else {
            clock.sleep_until_scheduled();
        }

        if let UpdateResultAction::Exit = flow_result_action {
            return;
        }
    }
}
