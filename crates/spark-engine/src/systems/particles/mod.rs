//! Particle lifecycle: spawn, integrate, derive visuals, cull.
//!
//! `Simulation` owns the live set and the emitter feeding it. The individual
//! pieces are re-exported so hosts and tests can drive them directly.

mod rng;
mod visual;
mod particle;

pub use rng::Rng;
pub use visual::{derive, sweep_color, VisualState};
pub use particle::{Liveness, Particle};

use crate::api::types::Rgb;
use crate::components::emitter::{Emitter, SpawnRequest};
use crate::core::settings::RuntimeConfig;

/// What happened during one `Simulation::step`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    pub spawned: usize,
    pub expired: usize,
    pub out_of_bounds: usize,
    /// Oldest particles dropped to respect the live cap.
    pub evicted: usize,
    pub live: usize,
}

/// Read-only render view of a live particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleView {
    pub x: f32,
    pub y: f32,
    pub color: Rgb,
    pub size: f32,
}

/// The live particle set plus the emitter that feeds it.
pub struct Simulation {
    pub emitter: Emitter,
    particles: Vec<Particle>,
    max_particles: Option<usize>,
    spawn_buffer: Vec<SpawnRequest>,
}

impl Simulation {
    pub fn new(emitter: Emitter, max_particles: Option<usize>) -> Self {
        let capacity = max_particles.unwrap_or(1024).min(16384);
        Simulation {
            emitter,
            particles: Vec::with_capacity(capacity),
            max_particles,
            spawn_buffer: Vec::with_capacity(16),
        }
    }

    /// One tick: spawn, integrate everything (new particles included), cull the dead,
    /// then enforce the live cap by dropping the oldest.
    pub fn step(&mut self, dt: f32, viewport_height: f32, config: &RuntimeConfig) -> StepStats {
        let mut stats = StepStats::default();

        self.spawn_buffer.clear();
        stats.spawned = self.emitter.tick_into(dt, config, &mut self.spawn_buffer);
        self.particles.extend(self.spawn_buffer.drain(..).map(|req| {
            Particle::new(req.position, req.velocity, req.life, req.mode, req.base_size)
        }));

        let gravity = config.gravity;
        self.particles.retain_mut(|p| match p.integrate(dt, gravity, viewport_height) {
            Liveness::Alive => true,
            Liveness::Expired => {
                stats.expired += 1;
                false
            }
            Liveness::OutOfBounds => {
                stats.out_of_bounds += 1;
                false
            }
        });

        if let Some(max) = self.max_particles {
            if self.particles.len() > max {
                let excess = self.particles.len() - max;
                self.particles.drain(..excess);
                stats.evicted = excess;
                log::debug!("particle cap {} reached, dropped {} oldest", max, excess);
            }
        }

        stats.live = self.particles.len();
        stats
    }

    /// Live particles, oldest first.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Position, color and size of every live particle as of the last step.
    pub fn views(&self) -> impl Iterator<Item = ParticleView> + '_ {
        self.particles.iter().map(|p| ParticleView {
            x: p.position.x,
            y: p.position.y,
            color: p.color(),
            size: p.size(),
        })
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn max_particles(&self) -> Option<usize> {
        self.max_particles
    }

    /// Insert an already-built particle at the young end of the set.
    pub fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Remove every particle.
    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::VisualMode;
    use crate::components::emitter::EmitterSettings;
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    fn config() -> RuntimeConfig {
        RuntimeConfig::new(3, -150.0, Vec2::new(640.0, 360.0))
    }

    fn sim(max: Option<usize>) -> Simulation {
        Simulation::new(Emitter::new(EmitterSettings::default(), 42), max)
    }

    fn silent_sim(max: Option<usize>) -> Simulation {
        let mut s = sim(max);
        s.emitter.active = false;
        s
    }

    #[test]
    fn first_step_spawns_one_burst_near_pointer() {
        let mut s = sim(None);
        assert_eq!(s.emitter.timer(), 0.0);
        let stats = s.step(DT, 720.0, &config());
        assert_eq!(stats.spawned, 5);
        assert_eq!(stats.live, 5);
        assert_eq!(s.len(), 5);

        // |v| <= 80 + 50 bias, plus one tick of gravity
        let max_disp = (80.0 + 50.0 + 150.0 * DT) * DT;
        for p in s.particles() {
            assert!((p.position.y - 360.0).abs() <= max_disp + 1e-3, "y = {}", p.position.y);
            assert!((p.position.x - 640.0).abs() <= 80.0 * DT + 1e-3, "x = {}", p.position.x);
            assert!(p.remaining_life() > 1.9);
        }
    }

    #[test]
    fn empty_collection_is_fine() {
        let mut s = silent_sim(None);
        let stats = s.step(DT, 720.0, &config());
        assert_eq!(stats, StepStats::default());
        assert!(s.is_empty());
    }

    #[test]
    fn zero_dt_is_idempotent_after_first_burst() {
        let mut s = sim(None);
        let cfg = config();
        s.step(DT, 720.0, &cfg);
        let snapshot: Vec<_> = s
            .particles()
            .iter()
            .map(|p| (p.position, p.velocity, p.remaining_life()))
            .collect();
        let visuals: Vec<_> = s.views().collect();

        for _ in 0..10 {
            let stats = s.step(0.0, 720.0, &cfg);
            assert_eq!(stats.spawned, 0);
        }

        let after: Vec<_> = s
            .particles()
            .iter()
            .map(|p| (p.position, p.velocity, p.remaining_life()))
            .collect();
        assert_eq!(snapshot, after);
        assert_eq!(visuals, s.views().collect::<Vec<_>>());
    }

    #[test]
    fn dead_particles_are_removed_and_order_kept() {
        let mut s = silent_sim(None);
        let cfg = config();
        s.push(Particle::new(Vec2::new(1.0, 100.0), Vec2::ZERO, 1.0, VisualMode::Fading, 3.0));
        s.push(Particle::new(Vec2::new(2.0, 100.0), Vec2::ZERO, 0.1, VisualMode::Fading, 3.0));
        s.push(Particle::new(Vec2::new(3.0, 1.0), Vec2::new(0.0, -100.0), 5.0, VisualMode::Fading, 3.0));
        s.push(Particle::new(Vec2::new(4.0, 100.0), Vec2::ZERO, 2.0, VisualMode::Fading, 3.0));

        let stats = s.step(0.1, 720.0, &cfg);
        assert_eq!(stats.expired, 1);
        assert_eq!(stats.out_of_bounds, 1);
        assert_eq!(stats.live, 2);
        let xs: Vec<f32> = s.particles().iter().map(|p| p.position.x).collect();
        assert_eq!(xs, vec![1.0, 4.0]);
    }

    #[test]
    fn no_dead_particle_survives_a_step() {
        let mut s = sim(None);
        let cfg = config();
        for _ in 0..600 {
            s.step(DT, 720.0, &cfg);
            for p in s.particles() {
                assert!(p.remaining_life() > 0.0);
                assert!(p.position.y > 0.0);
            }
        }
        assert!(!s.is_empty());
    }

    #[test]
    fn cap_drops_oldest_first() {
        let mut s = silent_sim(Some(3));
        for i in 0..5 {
            s.push(Particle::new(Vec2::new(i as f32, 100.0), Vec2::ZERO, 10.0, VisualMode::Fading, 3.0));
        }
        let stats = s.step(DT, 720.0, &config());
        assert_eq!(stats.evicted, 2);
        assert_eq!(stats.live, 3);
        let xs: Vec<f32> = s.particles().iter().map(|p| p.position.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn cap_bounds_sustained_emission() {
        let mut s = sim(Some(100));
        let cfg = config();
        for _ in 0..300 {
            let stats = s.step(DT, 720.0, &cfg);
            assert!(stats.live <= 100);
        }
        assert_eq!(s.len(), 100);
    }

    #[test]
    fn mode_is_fixed_at_spawn() {
        let mut s = sim(None);
        let mut cfg = config();
        s.step(DT, 720.0, &cfg);
        cfg.visual_mode = VisualMode::ColorShift;
        s.step(DT, 720.0, &cfg);
        assert!(s.particles().iter().all(|p| p.mode() == VisualMode::Fading));
    }

    #[test]
    fn views_mirror_particles() {
        let mut s = sim(None);
        s.step(DT, 720.0, &config());
        let views: Vec<_> = s.views().collect();
        assert_eq!(views.len(), s.len());
        for (v, p) in views.iter().zip(s.particles()) {
            assert_eq!((v.x, v.y), (p.position.x, p.position.y));
            assert_eq!(v.color, p.color());
            assert_eq!(v.size, 3.0);
        }
    }
}
