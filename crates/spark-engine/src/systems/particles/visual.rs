//! Color and size derivation for each visual mode.

use crate::api::types::{channel, Rgb, VisualMode};

/// Transient per-tick visual state of a particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub color: Rgb,
    pub size: f32,
}

impl VisualState {
    pub fn new(color: Rgb, size: f32) -> Self {
        Self { color, size }
    }
}

/// Derive the visual state for `mode`.
///
/// `height_ratio` and `life_ratio` are expected non-negative; `life_ratio`
/// is clamped to 1 so sweep position never leaves [0, 1].
pub fn derive(mode: VisualMode, base_size: f32, height_ratio: f32, life_ratio: f32) -> VisualState {
    match mode {
        VisualMode::Fading => fading(base_size, height_ratio, life_ratio),
        VisualMode::ColorShift => color_shift(base_size, life_ratio),
    }
}

/// Greyscale dimmed by whichever of height or remaining life is lower.
fn fading(base_size: f32, height_ratio: f32, life_ratio: f32) -> VisualState {
    let fade = height_ratio.min(life_ratio).clamp(0.0, 1.0);
    VisualState::new(Rgb::grey(channel(255.0 * fade)), base_size)
}

fn color_shift(base_size: f32, life_ratio: f32) -> VisualState {
    let life_ratio = life_ratio.clamp(0.0, 1.0);
    VisualState::new(sweep_color(1.0 - life_ratio), base_size * life_ratio)
}

/// Piecewise-linear sweep over `t` in [0, 1]:
/// red → orange → yellow (held) → green → blue.
pub fn sweep_color(t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    if t < 0.25 {
        let u = t / 0.25;
        Rgb::new(255, channel(255.0 * u), 0)
    } else if t < 0.5 {
        Rgb::new(255, 255, 0)
    } else if t < 0.75 {
        let u = (t - 0.5) / 0.25;
        Rgb::new(channel(255.0 * (1.0 - u)), 255, 0)
    } else {
        let u = (t - 0.75) / 0.25;
        Rgb::new(0, channel(255.0 * (1.0 - u)), channel(255.0 * u))
    }
}
