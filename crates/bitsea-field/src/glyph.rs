//! A single animated binary digit.

use bitsea_core::FieldConfig;
use rand::Rng;

/// The value a glyph is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    /// Draw a fresh uniform bit.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) { Bit::One } else { Bit::Zero }
    }

    /// The character drawn for this bit.
    pub fn glyph(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }
}

/// One drifting digit of the field.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    /// Horizontal position in field units.
    pub x: f32,
    /// Resting vertical position; the waves offset it at draw time but
    /// never write it back.
    pub y: f32,
    /// Displayed bit.
    pub value: Bit,
    /// Base transparency factor.
    pub opacity: f32,
    /// Per-glyph drift factor, multiplied with the configured base speed.
    pub speed: f32,
    /// Free-running angular accumulator. Advanced every frame, read by
    /// nothing yet; reserved for future per-glyph effects.
    pub phase: f32,
}

impl Glyph {
    /// Spawn a glyph anywhere on the canvas with fresh random state.
    pub fn spawn<R: Rng>(rng: &mut R, config: &FieldConfig) -> Self {
        Self {
            x: rng.gen_range(0.0..1.0) * config.width,
            y: rng.gen_range(0.0..1.0) * config.height,
            value: Bit::random(rng),
            opacity: rng.gen_range(0.0..1.0) * 0.8 + 0.2,
            speed: rng.gen_range(0.0..1.0) * config.speed + 0.5,
            phase: rng.gen_range(0.0..1.0) * std::f32::consts::TAU,
        }
    }

    /// Relocate an off-screen glyph to a fresh start beyond the right edge.
    pub fn recycle<R: Rng>(&mut self, rng: &mut R, config: &FieldConfig) {
        self.x = config.width + config.font_size + rng.gen_range(0.0..1.0) * 200.0;
        self.y = rng.gen_range(0.0..1.0) * config.height;
        self.value = Bit::random(rng);
        self.opacity = rng.gen_range(0.0..1.0) * 0.6 + 0.4;
        self.speed = rng.gen_range(0.0..1.0) * config.speed + 0.2;
    }
}
