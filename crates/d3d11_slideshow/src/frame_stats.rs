use crate::surface::FrameOutcome;
use std::time::Duration;
use std::time::Instant;
use tracing::debug;

pub const REPORT_INTERVAL: Duration = Duration::from_secs(1);

/// Counts presented and skipped frames between periodic log lines.
#[derive(Debug)]
pub struct FrameStats {
    window_start: Instant,
    presented: u64,
    skipped: u64,
    total_presented: u64,
    total_skipped: u64,
}

impl FrameStats {
    pub fn new(now: Instant) -> Self {
        Self {
            window_start: now,
            presented: 0,
            skipped: 0,
            total_presented: 0,
            total_skipped: 0,
        }
    }

    pub fn record(&mut self, outcome: &FrameOutcome) {
        match outcome {
            FrameOutcome::Presented { .. } => {
                self.presented += 1;
                self.total_presented += 1;
            }
            FrameOutcome::Skipped { .. } => {
                self.skipped += 1;
                self.total_skipped += 1;
            }
            FrameOutcome::NotReady => {}
        }
    }

    /// Logs and restarts the window once `REPORT_INTERVAL` has passed.
    /// Returns `(presented, skipped)` for the window that was closed.
    pub fn report_if_due(&mut self, now: Instant) -> Option<(u64, u64)> {
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < REPORT_INTERVAL {
            return None;
        }
        let window = (self.presented, self.skipped);
        debug!(
            "{} frames presented, {} skipped in the last {:.2}s",
            window.0,
            window.1,
            elapsed.as_secs_f64()
        );
        self.window_start = now;
        self.presented = 0;
        self.skipped = 0;
        Some(window)
    }

    pub fn total_presented(&self) -> u64 {
        self.total_presented
    }

    pub fn total_skipped(&self) -> u64 {
        self.total_skipped
    }
}
