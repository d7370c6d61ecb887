//! Render cadence: a throttle over the host's frame delivery and a
//! generation-stamped loop so cancelled callbacks cannot resurrect a session.

use std::time::Duration;

/// Admits at most one tick per `interval`. Ticks that arrive early are
/// rejected but the caller is expected to keep rescheduling.
#[derive(Clone, Copy, Debug)]
pub struct FrameThrottle {
    interval: Duration,
    last: Option<Duration>,
}

impl FrameThrottle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn admit(&mut self, now: Duration) -> bool {
        match self.last {
            Some(last) if now.saturating_sub(last) < self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Identifies the loop run a scheduled callback belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameTicket(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Callback from a stopped or superseded run; drop it without rescheduling.
    Stale,
    /// Too soon since the last rendered tick; reschedule only.
    Throttled,
    Render,
}

#[derive(Clone, Debug)]
pub struct RenderLoop {
    throttle: FrameThrottle,
    generation: u64,
    running: bool,
}

impl RenderLoop {
    pub fn new(interval: Duration) -> Self {
        Self {
            throttle: FrameThrottle::new(interval),
            generation: 0,
            running: false,
        }
    }

    pub fn start(&mut self) -> FrameTicket {
        self.generation += 1;
        self.running = true;
        self.throttle.reset();
        FrameTicket(self.generation)
    }

    pub fn stop(&mut self) {
        self.generation += 1;
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn tick(&mut self, ticket: FrameTicket, now: Duration) -> Tick {
        if !self.running || ticket.0 != self.generation {
            return Tick::Stale;
        }
        if self.throttle.admit(now) {
            Tick::Render
        } else {
            Tick::Throttled
        }
    }
}

/// Host frame delivery (requestAnimationFrame in the browser).
pub trait FrameScheduler {
    /// Arrange for one callback carrying `ticket`, replacing any pending one.
    fn request(&mut self, ticket: FrameTicket);
    /// Drop the pending callback, if any.
    fn cancel(&mut self);
}
