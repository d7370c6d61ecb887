//! Smoke puffs drifting up from the ember while the hold gesture is active.

use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug)]
pub struct SmokeParams {
    pub max_puffs: usize,
    pub spawn_per_sec: f32,
    pub lifetime_sec: f32,
    pub rise_px_per_sec: f32,
    pub drift_px_per_sec: f32,
    pub base_radius_px: f32,
    pub growth_px_per_sec: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct SmokePuff {
    pub pos: Vec2,
    pub vel: Vec2,
    pub age_sec: f32,
}

pub struct SmokeField {
    params: SmokeParams,
    puffs: Vec<SmokePuff>,
    rng: StdRng,
    spawn_accum: f32,
}

impl SmokeField {
    pub fn new(params: SmokeParams, seed: u64) -> Self {
        Self {
            puffs: Vec::with_capacity(params.max_puffs),
            params,
            rng: StdRng::seed_from_u64(seed),
            spawn_accum: 0.0,
        }
    }

    pub fn puffs(&self) -> &[SmokePuff] {
        &self.puffs
    }

    pub fn clear(&mut self) {
        self.puffs.clear();
        self.spawn_accum = 0.0;
    }

    /// Age and move existing puffs; spawn new ones at `origin` while `emitting`.
    /// Screen space: y grows downward, so puffs rise with negative velocity.
    pub fn step(&mut self, dt_sec: f32, emitting: bool, origin: Vec2) {
        let p = self.params;
        self.puffs.retain_mut(|puff| {
            puff.age_sec += dt_sec;
            puff.pos += puff.vel * dt_sec;
            puff.age_sec < p.lifetime_sec
        });

        if !emitting {
            self.spawn_accum = 0.0;
            return;
        }
        self.spawn_accum += dt_sec * p.spawn_per_sec;
        while self.spawn_accum >= 1.0 {
            self.spawn_accum -= 1.0;
            if self.puffs.len() >= p.max_puffs {
                continue;
            }
            let drift = (self.rng.gen::<f32>() * 2.0 - 1.0) * p.drift_px_per_sec;
            let rise = p.rise_px_per_sec * (0.8 + 0.4 * self.rng.gen::<f32>());
            self.puffs.push(SmokePuff {
                pos: origin,
                vel: Vec2::new(drift, -rise),
                age_sec: 0.0,
            });
        }
    }

    /// Radius and opacity for drawing; opacity fades linearly over the lifetime.
    pub fn appearance(&self, puff: &SmokePuff) -> (f32, f32) {
        let p = self.params;
        let t = (puff.age_sec / p.lifetime_sec).clamp(0.0, 1.0);
        let radius = p.base_radius_px + p.growth_px_per_sec * puff.age_sec;
        (radius, (1.0 - t) * 0.6)
    }
}
