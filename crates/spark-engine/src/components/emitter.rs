use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::types::VisualMode;
use crate::core::settings::RuntimeConfig;
use crate::systems::particles::Rng;

/// Tuning for burst emission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterSettings {
    /// Particles per burst.
    pub burst_count: u32,
    /// Seconds between bursts.
    pub spawn_interval: f32,
    /// Min/max initial speed magnitude.
    pub speed_range: (f32, f32),
    /// Min/max lifetime in seconds.
    pub life_range: (f32, f32),
    /// Constant added to the initial vertical velocity so bursts pop upward.
    pub upward_bias: f32,
}

impl Default for EmitterSettings {
    fn default() -> Self {
        Self {
            burst_count: 5,
            spawn_interval: 0.02,
            speed_range: (30.0, 80.0),
            life_range: (2.0, 4.0),
            upward_bias: 50.0,
        }
    }
}

/// Everything needed to create one particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    pub position: Vec2,
    pub velocity: Vec2,
    pub life: f32,
    pub mode: VisualMode,
    pub base_size: f32,
}

/// Countdown emitter: fires one burst whenever the timer runs out.
#[derive(Debug, Clone)]
pub struct Emitter {
    /// Whether the emitter is spawning.
    pub active: bool,
    settings: EmitterSettings,
    timer: f32,
    rng: Rng,
}

impl Emitter {
    pub fn new(settings: EmitterSettings, seed: u64) -> Self {
        Self {
            active: true,
            settings,
            timer: 0.0,
            rng: Rng::new(seed),
        }
    }

    pub fn settings(&self) -> &EmitterSettings {
        &self.settings
    }

    /// Seconds until the next burst. Zero or negative means the next tick fires.
    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// Force the countdown, e.g. to fire on the next tick.
    pub fn set_timer(&mut self, timer: f32) {
        self.timer = timer;
    }

    /// Advance the countdown by `dt` and append any burst to `out`.
    /// Returns the number of requests appended.
    pub fn tick_into(&mut self, dt: f32, config: &RuntimeConfig, out: &mut Vec<SpawnRequest>) -> usize {
        if !self.active {
            return 0;
        }

        self.timer -= dt;
        if self.timer > 0.0 {
            return 0;
        }

        let count = self.settings.burst_count as usize;
        out.reserve(count);
        for _ in 0..count {
            out.push(self.roll(config));
        }
        // Absolute reset: a long stall still yields a single burst.
        self.timer = self.settings.spawn_interval;
        count
    }

    /// Advance the countdown by `dt`, returning this tick's spawn requests.
    pub fn tick(&mut self, dt: f32, config: &RuntimeConfig) -> Vec<SpawnRequest> {
        let mut out = Vec::new();
        self.tick_into(dt, config, &mut out);
        out
    }

    fn roll(&mut self, config: &RuntimeConfig) -> SpawnRequest {
        let s = &self.settings;
        let angle = self.rng.range(0.0, std::f32::consts::TAU);
        let speed = self.rng.range(s.speed_range.0, s.speed_range.1);
        let life = self.rng.range(s.life_range.0, s.life_range.1);
        SpawnRequest {
            position: config.spawn_position,
            velocity: Vec2::new(speed * angle.cos(), speed * angle.sin() + s.upward_bias),
            life,
            mode: config.visual_mode,
            base_size: config.particle_size() as f32,
        }
    }
}
