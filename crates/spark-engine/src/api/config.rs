use serde::{Deserialize, Serialize};

use crate::bridge::protocol::ProtocolLayout;
use crate::components::emitter::EmitterSettings;
use crate::core::settings::RuntimeConfig;
use crate::input::intent::KeyBindings;

/// Static engine configuration, provided by the host at init.
/// Every field has a default, so a partial JSON object is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Catch-up limit in ticks per host frame (default: 10).
    pub max_steps_per_frame: u32,
    /// Initial viewport width in world units.
    pub world_width: f32,
    /// Initial viewport height in world units.
    pub world_height: f32,
    /// Signed vertical acceleration. The world is y-up with the floor at y = 0,
    /// so negative values pull particles toward the floor.
    pub gravity: f32,
    /// Particle size at startup, clamped to [1, 20].
    pub initial_particle_size: u32,
    /// Live particle cap; the oldest are dropped beyond it. `null` disables the cap.
    pub max_particles: Option<usize>,
    /// Seed for the emitter's random stream.
    pub seed: u64,
    pub emitter: EmitterSettings,
    pub key_bindings: KeyBindings,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_steps_per_frame: 10,
            world_width: 1280.0,
            world_height: 720.0,
            gravity: -150.0,
            initial_particle_size: 3,
            max_particles: Some(4096),
            seed: 42,
            emitter: EmitterSettings::default(),
            key_bindings: KeyBindings::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a config from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: EngineConfig = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Repair values the engine cannot run with, logging each repair.
    pub fn sanitized(mut self) -> Self {
        let defaults = EngineConfig::default();

        if !(self.fixed_dt.is_finite() && self.fixed_dt > 0.0) {
            log::warn!("fixed_dt {} is invalid, using {}", self.fixed_dt, defaults.fixed_dt);
            self.fixed_dt = defaults.fixed_dt;
        }
        if self.max_steps_per_frame == 0 {
            log::warn!("max_steps_per_frame must be at least 1");
            self.max_steps_per_frame = 1;
        }
        if !(self.world_width > 0.0 && self.world_height > 0.0) {
            log::warn!(
                "world size {}x{} is invalid, using {}x{}",
                self.world_width, self.world_height, defaults.world_width, defaults.world_height
            );
            self.world_width = defaults.world_width;
            self.world_height = defaults.world_height;
        }
        if !self.gravity.is_finite() {
            log::warn!("gravity {} is not finite, using {}", self.gravity, defaults.gravity);
            self.gravity = defaults.gravity;
        }
        if !(RuntimeConfig::MIN_PARTICLE_SIZE..=RuntimeConfig::MAX_PARTICLE_SIZE)
            .contains(&self.initial_particle_size)
        {
            log::warn!("initial_particle_size {} is out of range, clamping", self.initial_particle_size);
            self.initial_particle_size = self
                .initial_particle_size
                .clamp(RuntimeConfig::MIN_PARTICLE_SIZE, RuntimeConfig::MAX_PARTICLE_SIZE);
        }

        if let Some(cap) = self.max_particles {
            let clamped = cap.clamp(1, ProtocolLayout::UNCAPPED_INSTANCES);
            if clamped != cap {
                log::warn!("max_particles {} is out of range, using {}", cap, clamped);
                self.max_particles = Some(clamped);
            }
        }

        let e = &mut self.emitter;
        if e.burst_count == 0 {
            log::warn!("emitter burst_count is 0, using {}", defaults.emitter.burst_count);
            e.burst_count = defaults.emitter.burst_count;
        }
        if !(e.spawn_interval.is_finite() && e.spawn_interval > 0.0) {
            log::warn!("emitter spawn_interval {} is invalid", e.spawn_interval);
            e.spawn_interval = defaults.emitter.spawn_interval;
        }
        e.speed_range = ordered(e.speed_range, "speed_range");
        e.life_range = ordered(e.life_range, "life_range");
        if !(e.life_range.0 > 0.0) {
            log::warn!("emitter life_range must be positive, using defaults");
            e.life_range = defaults.emitter.life_range;
        }

        self
    }

    /// Runtime settings at startup: spawn point in the middle of the world.
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig::new(
            self.initial_particle_size,
            self.gravity,
            glam::Vec2::new(self.world_width / 2.0, self.world_height / 2.0),
        )
    }
}

fn ordered(range: (f32, f32), name: &str) -> (f32, f32) {
    if range.0 > range.1 {
        log::warn!("emitter {} is inverted, swapping", name);
        (range.1, range.0)
    } else {
        range
    }
}
