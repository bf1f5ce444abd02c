//! Named configuration presets.

use crate::color::Rgb;
use crate::config::{FieldConfig, Palette};

/// A full parameter bundle selectable as a unit.
///
/// Presets carry everything except the canvas dimensions, which belong to
/// the surface the field is mounted on. Applying a preset replaces every
/// carried field at once; it never merges with the previous values.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    pub density: usize,
    pub speed: f32,
    pub wave_amplitude: f32,
    pub wave_frequency: f32,
    pub font_size: f32,
    pub colors: Palette,
}

/// The built-in presets, in cycle order.
pub const PRESETS: &[Preset] = &[
    Preset {
        name: "Screenshot Style",
        density: 200,
        speed: 0.3,
        wave_amplitude: 60.0,
        wave_frequency: 0.008,
        font_size: 12.0,
        colors: Palette {
            background: Rgb::new(0x00, 0x00, 0x00),
            primary: Rgb::new(0xff, 0xff, 0xff),
            secondary: Rgb::new(0xcc, 0xcc, 0xcc),
        },
    },
    Preset {
        name: "Ocean Waves",
        density: 180,
        speed: 0.6,
        wave_amplitude: 80.0,
        wave_frequency: 0.015,
        font_size: 16.0,
        colors: Palette {
            background: Rgb::new(0x00, 0x11, 0x22),
            primary: Rgb::new(0x00, 0xdd, 0xff),
            secondary: Rgb::new(0x00, 0x88, 0xbb),
        },
    },
    Preset {
        name: "Digital Tsunami",
        density: 250,
        speed: 1.2,
        wave_amplitude: 120.0,
        wave_frequency: 0.008,
        font_size: 14.0,
        colors: Palette {
            background: Rgb::new(0x00, 0x00, 0x11),
            primary: Rgb::new(0x00, 0xff, 0x88),
            secondary: Rgb::new(0x00, 0x44, 0x44),
        },
    },
    Preset {
        name: "Calm Sea",
        density: 120,
        speed: 0.4,
        wave_amplitude: 40.0,
        wave_frequency: 0.025,
        font_size: 18.0,
        colors: Palette {
            background: Rgb::new(0x00, 0x08, 0x08),
            primary: Rgb::new(0x88, 0xff, 0xff),
            secondary: Rgb::new(0x44, 0x66, 0x66),
        },
    },
    Preset {
        name: "Storm",
        density: 300,
        speed: 2.5,
        wave_amplitude: 100.0,
        wave_frequency: 0.012,
        font_size: 12.0,
        colors: Palette {
            background: Rgb::new(0x11, 0x11, 0x11),
            primary: Rgb::new(0xff, 0xff, 0xff),
            secondary: Rgb::new(0x66, 0x66, 0x66),
        },
    },
];

impl Preset {
    /// Look up a preset by name, ignoring ASCII case.
    pub fn find(name: &str) -> Option<&'static Preset> {
        PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Build the configuration this preset describes, keeping the canvas
    /// dimensions from `base`.
    pub fn apply(&self, base: &FieldConfig) -> FieldConfig {
        FieldConfig {
            width: base.width,
            height: base.height,
            density: self.density,
            speed: self.speed,
            wave_amplitude: self.wave_amplitude,
            wave_frequency: self.wave_frequency,
            font_size: self.font_size,
            colors: self.colors,
        }
    }
}
