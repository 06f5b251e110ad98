use glam::Vec2;

use crate::api::types::VisualMode;
use crate::input::intent::Intent;

/// Settings the user changes while the simulation runs.
/// Read by the emitter when spawning; particles in flight keep the values they spawned with.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    particle_size: u32,
    pub visual_mode: VisualMode,
    /// Signed acceleration along +y (world is y-up, negative pulls toward the floor).
    pub gravity: f32,
    pub spawn_position: Vec2,
}

impl RuntimeConfig {
    pub const MIN_PARTICLE_SIZE: u32 = 1;
    pub const MAX_PARTICLE_SIZE: u32 = 20;

    pub fn new(particle_size: u32, gravity: f32, spawn_position: Vec2) -> Self {
        Self {
            particle_size: particle_size.clamp(Self::MIN_PARTICLE_SIZE, Self::MAX_PARTICLE_SIZE),
            visual_mode: VisualMode::default(),
            gravity,
            spawn_position,
        }
    }

    pub fn particle_size(&self) -> u32 {
        self.particle_size
    }

    pub fn increase_size(&mut self) {
        self.particle_size = (self.particle_size + 1).min(Self::MAX_PARTICLE_SIZE);
    }

    pub fn decrease_size(&mut self) {
        self.particle_size = self.particle_size.saturating_sub(1).max(Self::MIN_PARTICLE_SIZE);
    }

    /// Apply a single intent.
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::IncreaseSize => self.increase_size(),
            Intent::DecreaseSize => self.decrease_size(),
            Intent::SelectMode(mode) => self.visual_mode = mode,
            Intent::PointerMoved { x, y } => self.spawn_position = Vec2::new(x, y),
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new(3, -150.0, Vec2::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_clamps_at_max() {
        let mut cfg = RuntimeConfig::new(20, 0.0, Vec2::ZERO);
        cfg.apply(Intent::IncreaseSize);
        assert_eq!(cfg.particle_size(), 20);
    }

    #[test]
    fn size_clamps_at_min() {
        let mut cfg = RuntimeConfig::new(1, 0.0, Vec2::ZERO);
        cfg.apply(Intent::DecreaseSize);
        assert_eq!(cfg.particle_size(), 1);
    }

    #[test]
    fn size_steps_by_one() {
        let mut cfg = RuntimeConfig::default();
        assert_eq!(cfg.particle_size(), 3);
        cfg.apply(Intent::IncreaseSize);
        cfg.apply(Intent::IncreaseSize);
        cfg.apply(Intent::DecreaseSize);
        assert_eq!(cfg.particle_size(), 4);
    }

    #[test]
    fn construction_clamps_out_of_range_size() {
        assert_eq!(RuntimeConfig::new(0, 0.0, Vec2::ZERO).particle_size(), 1);
        assert_eq!(RuntimeConfig::new(99, 0.0, Vec2::ZERO).particle_size(), 20);
    }

    #[test]
    fn mode_and_pointer_intents() {
        let mut cfg = RuntimeConfig::default();
        cfg.apply(Intent::SelectMode(VisualMode::ColorShift));
        cfg.apply(Intent::PointerMoved { x: 12.0, y: 34.0 });
        assert_eq!(cfg.visual_mode, VisualMode::ColorShift);
        assert_eq!(cfg.spawn_position, Vec2::new(12.0, 34.0));
        cfg.apply(Intent::SelectMode(VisualMode::Fading));
        assert_eq!(cfg.visual_mode, VisualMode::Fading);
    }
}
