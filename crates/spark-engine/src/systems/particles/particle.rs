//! A single particle: kinematics, lifetime and derived visual state.

use glam::Vec2;

use super::visual::{self, VisualState};
use crate::api::types::{Rgb, VisualMode};

/// Outcome of one integration step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Liveness {
    Alive,
    /// Remaining life ran out. Reported even if the particle also left the floor.
    Expired,
    /// Fell to or below `y = 0`.
    OutOfBounds,
}

impl Liveness {
    pub fn is_alive(self) -> bool {
        self == Liveness::Alive
    }
}

/// A live particle in world space (y-up, floor at `y = 0`).
#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    remaining_life: f32,
    max_life: f32,
    mode: VisualMode,
    base_size: f32,
    visual: VisualState,
}

impl Particle {
    /// Smallest lifetime accepted at construction.
    pub const MIN_LIFE: f32 = 1.0e-3;

    pub fn new(position: Vec2, velocity: Vec2, life: f32, mode: VisualMode, base_size: f32) -> Self {
        let life = if life.is_finite() && life > 0.0 {
            life
        } else {
            log::warn!("particle lifetime {} is not positive, using {}", life, Self::MIN_LIFE);
            Self::MIN_LIFE
        };
        Particle {
            position,
            velocity,
            remaining_life: life,
            max_life: life,
            mode,
            base_size,
            visual: VisualState::new(Rgb::WHITE, base_size),
        }
    }

    /// Advance by `dt` seconds under `gravity` (signed, along +y), then refresh
    /// the visual state against the current viewport height.
    pub fn integrate(&mut self, dt: f32, gravity: f32, viewport_height: f32) -> Liveness {
        self.velocity.y += gravity * dt;
        self.position += self.velocity * dt;
        self.remaining_life -= dt;

        let height_ratio = if viewport_height > 0.0 {
            (self.position.y / viewport_height).max(0.0)
        } else {
            0.0
        };
        self.visual = visual::derive(self.mode, self.base_size, height_ratio, self.life_ratio());

        if self.remaining_life <= 0.0 {
            Liveness::Expired
        } else if self.position.y <= 0.0 {
            Liveness::OutOfBounds
        } else {
            Liveness::Alive
        }
    }

    /// Fraction of life left, clamped at 0.
    pub fn life_ratio(&self) -> f32 {
        (self.remaining_life / self.max_life).max(0.0)
    }

    pub fn remaining_life(&self) -> f32 {
        self.remaining_life
    }

    pub fn max_life(&self) -> f32 {
        self.max_life
    }

    pub fn mode(&self) -> VisualMode {
        self.mode
    }

    pub fn base_size(&self) -> f32 {
        self.base_size
    }

    /// Color from the most recent integration.
    pub fn color(&self) -> Rgb {
        self.visual.color
    }

    /// Rendered size from the most recent integration.
    pub fn size(&self) -> f32 {
        self.visual.size
    }
}
