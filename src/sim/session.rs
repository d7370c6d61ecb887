//! One cigarette, from session start to the spent state and back.
//!
//! `BurnSimulator` is the single writer of burn state. Input edges mutate it
//! synchronously; render ticks only project it. Sound is requested by pushing
//! `CueCommand`s into a caller-owned buffer, which the front-end plays.

use super::burn::{visible_length, BurnClock};
use super::config::BurnConfig;
use super::constants::*;
use super::frame::{FrameScheduler, FrameTicket, RenderLoop, Tick};
use super::input::{edge_for, Edge, RawInput};
use smallvec::SmallVec;
use std::time::Duration;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Burning passively; the lighter has not been struck yet.
    Unlit,
    Lit,
    /// Fully consumed. Only `restart` leaves this state.
    Spent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    Light,
    Smoke,
    Exhale,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CueCommand {
    /// Play from the start, cutting off a previous instance.
    PlayOnce(Cue),
    PlayLoop {
        cue: Cue,
        volume: f32,
        delay: Duration,
    },
    SetVolume {
        cue: Cue,
        volume: f32,
    },
    /// Stop and rewind.
    Stop(Cue),
}

pub type CueBuffer = SmallVec<[CueCommand; 4]>;

/// Read-only projection handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameView {
    pub length: f32,
    pub progress: f64,
    pub active: bool,
    pub phase: Phase,
}

/// What the page shows under the cigarette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prompt {
    LightButton,
    Idle,
    Smoking,
    RestartButton,
}

impl Prompt {
    pub fn for_view(view: &FrameView) -> Self {
        match view.phase {
            Phase::Spent => Prompt::RestartButton,
            Phase::Unlit => Prompt::LightButton,
            Phase::Lit if view.active => Prompt::Smoking,
            Phase::Lit => Prompt::Idle,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Prompt::LightButton => "🔥 Light the cigarette",
            Prompt::Idle => {
                "Cigarette burning slowly. Press any key, click or touch to smoke actively."
            }
            Prompt::Smoking => "Smoking intensely...",
            Prompt::RestartButton => "Another one",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum RestartError {
    #[error("restart is only available once the cigarette is spent (phase: {0:?})")]
    NotSpent(Phase),
}

pub struct BurnSimulator {
    config: BurnConfig,
    clock: BurnClock,
    phase: Phase,
    frames: RenderLoop,
}

impl BurnSimulator {
    pub fn new(config: BurnConfig, now: Duration) -> Self {
        Self {
            clock: BurnClock::new(config.model, now),
            frames: RenderLoop::new(config.tick_interval),
            phase: Phase::Unlit,
            config,
        }
    }

    pub fn config(&self) -> &BurnConfig {
        &self.config
    }

    pub fn clock(&self) -> &BurnClock {
        &self.clock
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.clock.is_active()
    }

    pub fn is_running(&self) -> bool {
        self.frames.is_running()
    }

    pub fn view(&self, now: Duration) -> FrameView {
        let progress = self.clock.progress(now);
        let length = visible_length(self.config.initial_length, progress);
        let phase = if length <= 0.0 {
            Phase::Spent
        } else {
            self.phase
        };
        FrameView {
            length,
            progress,
            active: self.clock.is_active(),
            phase,
        }
    }

    /// Begin render scheduling. No-op when already running or spent.
    pub fn start<S: FrameScheduler>(&mut self, scheduler: &mut S) -> Option<FrameTicket> {
        if self.phase == Phase::Spent || self.frames.is_running() {
            return None;
        }
        let ticket = self.frames.start();
        scheduler.request(ticket);
        Some(ticket)
    }

    /// Strike the lighter. Only the first call per session does anything.
    pub fn light(&mut self, cues: &mut CueBuffer) -> bool {
        if self.phase != Phase::Unlit {
            return false;
        }
        self.phase = Phase::Lit;
        cues.push(CueCommand::PlayOnce(Cue::Light));
        cues.push(CueCommand::PlayLoop {
            cue: Cue::Smoke,
            volume: SMOKE_IDLE_VOLUME,
            delay: Duration::from_millis(SMOKE_LOOP_DELAY_MS),
        });
        log::info!("[session] lit");
        true
    }

    pub fn handle_input(&mut self, raw: RawInput, now: Duration, cues: &mut CueBuffer) -> bool {
        self.apply_edge(edge_for(raw), now, cues)
    }

    /// Apply a logical hold edge. Returns `false` when the edge was a
    /// duplicate or the cigarette is already consumed.
    pub fn apply_edge(&mut self, edge: Edge, now: Duration, cues: &mut CueBuffer) -> bool {
        if self.phase == Phase::Spent {
            return false;
        }
        match edge {
            Edge::Activate => {
                if self.clock.progress(now) >= 1.0 {
                    return false;
                }
                if self.phase == Phase::Unlit {
                    self.light(cues);
                }
                if !self.clock.on_activation_edge(now) {
                    return false;
                }
                cues.push(CueCommand::SetVolume {
                    cue: Cue::Smoke,
                    volume: SMOKE_ACTIVE_VOLUME,
                });
            }
            Edge::Deactivate => {
                if !self.clock.on_deactivation_edge(now) {
                    return false;
                }
                cues.push(CueCommand::SetVolume {
                    cue: Cue::Smoke,
                    volume: SMOKE_IDLE_VOLUME,
                });
                cues.push(CueCommand::PlayOnce(Cue::Exhale));
            }
        }
        log::info!(
            "[input] {:?} effective={:.1}s",
            edge,
            self.clock.effective_time(now).as_secs_f64()
        );
        true
    }

    /// Handle one frame callback. Returns a view only for ticks that pass the
    /// throttle; every live tick either reschedules or, on reaching zero
    /// length, stops the loop.
    pub fn frame<S: FrameScheduler>(
        &mut self,
        ticket: FrameTicket,
        now: Duration,
        scheduler: &mut S,
        cues: &mut CueBuffer,
    ) -> Option<FrameView> {
        match self.frames.tick(ticket, now) {
            Tick::Stale => None,
            Tick::Throttled => {
                scheduler.request(ticket);
                None
            }
            Tick::Render => {
                let view = self.view(now);
                if view.phase == Phase::Spent {
                    self.finish(now, scheduler, cues);
                } else {
                    scheduler.request(ticket);
                }
                Some(view)
            }
        }
    }

    fn finish<S: FrameScheduler>(&mut self, now: Duration, scheduler: &mut S, cues: &mut CueBuffer) {
        self.clock.on_deactivation_edge(now);
        self.phase = Phase::Spent;
        self.frames.stop();
        scheduler.cancel();
        cues.push(CueCommand::Stop(Cue::Smoke));
        log::info!("[session] spent after {:.1}s", now.as_secs_f64());
    }

    /// Fresh cigarette with the same config. Only allowed once spent.
    pub fn restart<S: FrameScheduler>(
        &mut self,
        now: Duration,
        scheduler: &mut S,
        cues: &mut CueBuffer,
    ) -> Result<FrameTicket, RestartError> {
        if self.phase != Phase::Spent {
            return Err(RestartError::NotSpent(self.phase));
        }
        self.frames.stop();
        scheduler.cancel();
        self.clock = BurnClock::new(self.config.model, now);
        self.phase = Phase::Unlit;
        cues.push(CueCommand::Stop(Cue::Smoke));
        cues.push(CueCommand::Stop(Cue::Exhale));
        let ticket = self.frames.start();
        scheduler.request(ticket);
        log::info!("[session] restarted");
        Ok(ticket)
    }
}
