
use std::time::{Instant, Duration};

use log::debug;

/// One advancement of the update loop.
#[derive(Clone, Debug)]
pub struct Tick {
    pub order: u64,
    pub time: Instant,
    pub delta: Duration,
}

impl Tick {
    #[inline]
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }
}

/// Paces the update loop at a fixed tick frequency and measures the real
/// elapsed time between ticks. The measured delta drives all smoothing, so
/// a late tick produces a proportionally larger step instead of a stall.
pub struct Clock {
    period: Duration,
    next_at: Instant,
    tick: Tick,

    // ticks-per-second measurement
    tps_window: f32,
    tps_count: u32,
}

impl Clock {
    pub fn now(ticks_per_second: u64) -> Self {
        let start = Instant::now();
        Self {
            period: Duration::from_secs_f64(1.0 / ticks_per_second.max(1) as f64),
            next_at: start,
            tick: Tick {
                order: 0,
                time: start,
                delta: Duration::ZERO,
            },
            tps_window: 0.0,
            tps_count: 0,
        }
    }

    /// Performs a tick if the scheduled time has passed, returning true when
    /// it did. Scheduling subtracts the overshoot so the average rate holds.
    pub fn tick(&mut self) -> bool {
        let now = Instant::now();
        if now < self.next_at {
            return false;
        }
        let late_by = now - self.next_at;

        self.tick.order += 1;
        self.tick.delta = now - self.tick.time;
        self.tick.time = now;
        self.next_at = now + self.period.saturating_sub(late_by);

        self.tps_window += self.tick.delta.as_secs_f32();
        self.tps_count += 1;
        if self.tps_window > 1.0 {
            debug!("Ticks per second: {}", self.tps_count);
            self.tps_window -= 1.0;
            self.tps_count = 0;
        }
        true
    }

    pub fn current_tick(&self) -> &Tick {
        &self.tick
    }

    /// Sleeps the calling thread until the next scheduled tick. Used by the
    /// headless loop in place of an event-loop wakeup.
    pub fn sleep_until_scheduled(&self) {
        let now = Instant::now();
        if self.next_at > now {
            std::thread::sleep(self.next_at - now);
        }
    }
}
