//! Frame rate cap
//!
//! Schedules redraws at a fixed interval. The event loop sleeps until
//! [`FrameLimiter::next_deadline`] with `ControlFlow::WaitUntil`.

use std::time::{Duration, Instant};

/// Spaces frames at least `1 / fps` seconds apart
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    /// `None` when uncapped
    interval: Option<Duration>,
    last_frame: Option<Instant>,
}

impl FrameLimiter {
    /// Cap at `fps` frames per second; 0 disables the cap
    pub fn new(fps: u32) -> Self {
        let interval = (fps > 0).then(|| Duration::from_secs_f64(1.0 / fps as f64));
        Self {
            interval,
            last_frame: None,
        }
    }

    /// Time between frames, `None` when uncapped
    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// Whether a frame may start at `now`
    pub fn frame_due(&self, now: Instant) -> bool {
        match self.next_deadline() {
            Some(deadline) => now >= deadline,
            None => true,
        }
    }

    /// When the next frame may start, `None` if it may start right away
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.last_frame, self.interval) {
            (Some(last), Some(interval)) => Some(last + interval),
            _ => None,
        }
    }

    /// Record that a frame started at `now`
    pub fn mark_frame(&mut self, now: Instant) {
        self.last_frame = Some(now);
    }
}
