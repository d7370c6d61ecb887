//! Effective burn time bookkeeping.
//!
//! Wall time is split into segments at every hold edge. Closed segments are
//! folded into `accumulated`; the open one is weighted on demand. Folding and
//! the live projection share `BurnState::live_segment`, so effective time has
//! no jump at an edge.

use super::accel;
use super::config::BurnModel;
use super::input::Edge;
use std::time::Duration;

/// Timestamps are offsets from the session clock origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurnState {
    pub accumulated: Duration,
    pub last_transition: Duration,
    pub active: bool,
}

impl BurnState {
    pub fn new(now: Duration) -> Self {
        Self {
            accumulated: Duration::ZERO,
            last_transition: now,
            active: false,
        }
    }

    /// The open segment since the last edge, weighted for the current hold
    /// state. A `now` behind the last edge contributes nothing. Saturates at
    /// `Duration::MAX` for weights too large to represent.
    pub fn live_segment(&self, now: Duration, active_weight: f64) -> Duration {
        let wall = now.saturating_sub(self.last_transition);
        if self.active {
            Duration::try_from_secs_f64(wall.as_secs_f64() * active_weight)
                .unwrap_or(Duration::MAX)
        } else {
            wall
        }
    }

    pub fn effective_time(&self, now: Duration, active_weight: f64) -> Duration {
        self.accumulated
            .saturating_add(self.live_segment(now, active_weight))
    }

    /// Close the open segment and switch hold state. A repeated edge in the
    /// same direction changes nothing and returns `false`.
    pub fn transition(&mut self, active: bool, now: Duration, active_weight: f64) -> bool {
        if self.active == active {
            return false;
        }
        self.accumulated = self.effective_time(now, active_weight);
        self.last_transition = self.last_transition.max(now);
        self.active = active;
        true
    }
}

/// Fraction of the object consumed, clamped to `[0, 1]`.
#[inline]
pub fn progress(effective: Duration, burn_duration: Duration) -> f64 {
    if burn_duration.is_zero() {
        return 1.0;
    }
    (effective.as_secs_f64() / burn_duration.as_secs_f64()).clamp(0.0, 1.0)
}

#[inline]
pub fn visible_length(initial_length: f32, progress: f64) -> f32 {
    (initial_length as f64 * (1.0 - progress)).max(0.0) as f32
}

/// Hold-state tracker plus burn clock for one session.
#[derive(Clone, Debug)]
pub struct BurnClock {
    model: BurnModel,
    state: BurnState,
}

impl BurnClock {
    pub fn new(model: BurnModel, now: Duration) -> Self {
        Self {
            model,
            state: BurnState::new(now),
        }
    }

    pub fn model(&self) -> &BurnModel {
        &self.model
    }

    pub fn state(&self) -> &BurnState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.active
    }

    /// Released -> held. Folds the passive segment at weight 1.
    pub fn on_activation_edge(&mut self, now: Duration) -> bool {
        self.state.transition(true, now, self.model.active_weight())
    }

    /// Held -> released. Folds the active segment at the model's weight.
    pub fn on_deactivation_edge(&mut self, now: Duration) -> bool {
        self.state.transition(false, now, self.model.active_weight())
    }

    pub fn apply(&mut self, edge: Edge, now: Duration) -> bool {
        match edge {
            Edge::Activate => self.on_activation_edge(now),
            Edge::Deactivate => self.on_deactivation_edge(now),
        }
    }

    /// Current effective burn time, including the open segment.
    pub fn effective_time(&self, now: Duration) -> Duration {
        self.state.effective_time(now, self.model.active_weight())
    }

    pub fn progress(&self, now: Duration) -> f64 {
        let effective = self.effective_time(now);
        match self.model {
            BurnModel::Multiplier { passive_burn, .. } => progress(effective, passive_burn),
            BurnModel::Accelerating {
                slow_burn,
                fastest_burn,
                ramp,
            } => accel::progress(effective, slow_burn, fastest_burn, ramp),
        }
    }
}
