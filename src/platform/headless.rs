//! Fixed-interval frame loop
//!
//! Without a display refresh signal, frames are paced by a plain timer:
//! one tick every `HEADLESS_FRAME_INTERVAL_MS` (16 ms, roughly 60 Hz).
//! Ticks are bounded by a count instead of page lifetime.

use std::thread;
use std::time::{Duration, Instant};

use crate::backdrop::Backdrop;
use crate::consts::HEADLESS_FRAME_INTERVAL_MS;
use crate::renderer::{DrawSurface, FrameStats};

/// Default pacing for headless runs
pub fn default_interval() -> Duration {
    Duration::from_millis(HEADLESS_FRAME_INTERVAL_MS)
}

/// Totals over a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub connections_drawn: u64,
    pub max_connections: usize,
}

impl RunSummary {
    fn record(&mut self, stats: &FrameStats) {
        self.frames += 1;
        self.connections_drawn += stats.connections as u64;
        self.max_connections = self.max_connections.max(stats.connections);
    }

    pub fn mean_connections(&self) -> f64 {
        if self.frames == 0 {
            0.0
        } else {
            self.connections_drawn as f64 / self.frames as f64
        }
    }
}

/// Run up to `ticks` frames, sleeping out the rest of each interval
///
/// `after_frame` sees the frame index and stats and may resize or stop
/// the backdrop; a stopped backdrop ends the loop early.
pub fn run_fixed_interval<S, F>(
    backdrop: &mut Backdrop<S>,
    ticks: u64,
    interval: Duration,
    mut after_frame: F,
) -> RunSummary
where
    S: DrawSurface,
    F: FnMut(u64, &mut Backdrop<S>, &FrameStats),
{
    let mut summary = RunSummary::default();

    for index in 0..ticks {
        let started = Instant::now();
        let Some(stats) = backdrop.tick() else {
            break;
        };
        summary.record(&stats);
        after_frame(index, backdrop, &stats);

        if let Some(remaining) = interval.checked_sub(started.elapsed()) {
            thread::sleep(remaining);
        }
    }

    summary
}
