/*
 * Frame Clock Module
 *
 * Paces simulation ticks to a target rate. Ticks follow a fixed schedule so
 * a display refreshing at the target rate gets one tick per frame even when
 * frames jitter around the interval. At most one tick is allowed per window
 * update and there is no catch-up: when a frame runs long, the schedule
 * restarts from that frame and the simulation simply runs slower.
 */

use std::time::{Duration, Instant};

pub const DEFAULT_TARGET_FPS: f32 = 60.0;
pub const MIN_TARGET_FPS: f32 = 1.0;
pub const MAX_TARGET_FPS: f32 = 1000.0;

#[derive(Debug, Clone)]
pub struct FrameClock {
    tick_interval: Duration,
    // How early a frame may arrive and still take the scheduled tick
    tolerance: Duration,
    next_tick: Option<Instant>,
}

impl FrameClock {
    // Rates outside [MIN_TARGET_FPS, MAX_TARGET_FPS] fall back to the default
    pub fn new(target_fps: f32) -> Self {
        let target_fps = if (MIN_TARGET_FPS..=MAX_TARGET_FPS).contains(&target_fps) {
            target_fps
        } else {
            DEFAULT_TARGET_FPS
        };
        let tick_interval = Duration::from_secs_f32(1.0 / target_fps);
        Self {
            tick_interval,
            tolerance: tick_interval / 4,
            next_tick: None,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    // True when a tick is due at `now`; advances the schedule when it is
    pub fn should_tick(&mut self, now: Instant) -> bool {
        let due = match self.next_tick {
            None => true,
            Some(next) => now + self.tolerance >= next,
        };
        if due {
            let next = match self.next_tick {
                Some(next) => next + self.tick_interval,
                None => now + self.tick_interval,
            };
            // Behind by a whole interval: drop the backlog
            self.next_tick = Some(if next <= now { now + self.tick_interval } else { next });
        }
        due
    }
}
