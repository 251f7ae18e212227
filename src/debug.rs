/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains frame timing
 * and simulation progress shown in the control panel.
 */

use std::time::Duration;

// Debug information to display
#[derive(Debug, Clone, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub ticks: u64,
}

impl DebugInfo {
    pub fn record_frame(&mut self, fps: f32, frame_time: Duration) {
        self.fps = fps;
        self.frame_time = frame_time;
    }

    pub fn frame_time_ms(&self) -> f64 {
        self.frame_time.as_secs_f64() * 1000.0
    }
}
