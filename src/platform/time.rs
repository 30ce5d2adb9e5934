//! Fixed-rate frame pacing
//!
//! Frames are scheduled on a fixed grid of `1/fps` boundaries. A driver that
//! falls behind starts a fresh grid instead of bursting to catch up.

use std::thread;
use std::time::{Duration, Instant};

/// Sleeps the driver loop to a target frame rate
#[derive(Debug, Clone)]
pub struct FramePacer {
    /// `None` runs unthrottled
    period: Option<Duration>,
    /// Start of the next frame slot
    next: Option<Instant>,
}

impl FramePacer {
    /// `fps == 0` disables pacing
    pub fn new(fps: u32) -> Self {
        let period = (fps > 0).then(|| Duration::from_secs_f64(1.0 / f64::from(fps)));
        Self { period, next: None }
    }

    /// Length of one frame, if paced
    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    /// Time to wait at `now` before the next frame may start; advances the
    /// schedule by one slot.
    pub fn delay(&mut self, now: Instant) -> Duration {
        let Some(period) = self.period else {
            return Duration::ZERO;
        };
        match self.next {
            Some(next) if now < next => {
                self.next = Some(next + period);
                next - now
            }
            // First frame, or running late
            _ => {
                self.next = Some(now + period);
                Duration::ZERO
            }
        }
    }

    /// Block until the next frame boundary
    pub fn wait(&mut self) {
        let delay = self.delay(Instant::now());
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}
