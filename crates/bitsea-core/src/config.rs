//! Field configuration record.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// The three colors of a field: backdrop, `1` digits, `0` digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Fill color for the whole surface.
    pub background: Rgb,
    /// Digit color for glyphs showing `1`.
    pub primary: Rgb,
    /// Digit color for glyphs showing `0`.
    pub secondary: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::new(0x00, 0x00, 0x00),
            primary: Rgb::new(0xff, 0xff, 0xff),
            secondary: Rgb::new(0x88, 0x88, 0x88),
        }
    }
}

/// Immutable-per-field configuration snapshot.
///
/// A running field never picks up changes to these values; the host tears
/// the field down and builds a new one instead. The field itself applies no
/// range clamping, so out-of-range values degrade the picture but never
/// fail. The documented control ranges live with the host surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Canvas width in field units.
    pub width: f32,
    /// Canvas height in field units.
    pub height: f32,
    /// Number of glyphs in the population.
    pub density: usize,
    /// Base horizontal drift multiplier.
    pub speed: f32,
    /// Amplitude of the primary wave, in field units.
    pub wave_amplitude: f32,
    /// Spatial frequency of the primary wave.
    pub wave_frequency: f32,
    /// Nominal glyph size in field units.
    pub font_size: f32,
    /// Color triple.
    pub colors: Palette,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
            density: 100,
            speed: 1.0,
            wave_amplitude: 50.0,
            wave_frequency: 0.02,
            font_size: 14.0,
            colors: Palette::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_defaults() {
        let config = FieldConfig::default();
        assert_eq!(config.width, 800.0);
        assert_eq!(config.height, 400.0);
        assert_eq!(config.density, 100);
        assert_eq!(config.speed, 1.0);
        assert_eq!(config.wave_amplitude, 50.0);
        assert_eq!(config.wave_frequency, 0.02);
        assert_eq!(config.font_size, 14.0);
        assert_eq!(config.colors.background, Rgb::new(0, 0, 0));
        assert_eq!(config.colors.primary, Rgb::new(255, 255, 255));
        assert_eq!(config.colors.secondary, Rgb::new(0x88, 0x88, 0x88));
    }
}
