use serde::{Deserialize, Serialize};

/// How a particle derives its color and size over its lifetime.
/// Captured when the particle spawns and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualMode {
    /// Greyscale that dims with height and remaining life. Size stays constant.
    #[default]
    Fading,
    /// Hue sweep red → yellow → green → blue while shrinking to nothing.
    ColorShift,
}

impl VisualMode {
    /// Numeric tag written into the render protocol.
    pub fn as_f32(self) -> f32 {
        match self {
            VisualMode::Fading => 0.0,
            VisualMode::ColorShift => 1.0,
        }
    }
}

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn grey(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Channels normalized to [0, 1] for the GPU.
    pub fn to_unit(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

/// Convert a nominal 0–255 intensity to a channel: truncate, then clamp.
/// NaN maps to 0.
pub fn channel(value: f32) -> u8 {
    // `as` saturates at the u8 bounds and maps NaN to 0.
    value as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_truncates_and_clamps() {
        assert_eq!(channel(127.9), 127);
        assert_eq!(channel(-4.0), 0);
        assert_eq!(channel(300.0), 255);
        assert_eq!(channel(f32::NAN), 0);
    }

    #[test]
    fn to_unit_scales_channels() {
        assert_eq!(Rgb::new(255, 0, 51).to_unit(), [1.0, 0.0, 0.2]);
    }

    #[test]
    fn visual_mode_parses_snake_case() {
        let mode: VisualMode = serde_json::from_str("\"color_shift\"").unwrap();
        assert_eq!(mode, VisualMode::ColorShift);
        assert_eq!(VisualMode::default(), VisualMode::Fading);
    }
}
