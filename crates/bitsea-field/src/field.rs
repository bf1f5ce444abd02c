//! Field state and the per-frame update.

use bitsea_core::FieldConfig;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::glyph::{Bit, Glyph};
use crate::wave;

/// Fraction of the per-glyph speed applied to x each frame.
const DRIFT_FACTOR: f32 = 0.5;
/// A glyph recycles once x drops below minus this many font sizes.
const RECYCLE_MARGIN: f32 = 3.0;
/// Depths below this render with the soft-focus treatment.
const BLUR_THRESHOLD: f32 = 0.4;
/// Per-frame chance that a glyph flips to a fresh random bit.
const FLIP_CHANCE: f64 = 0.0005;
/// Phase advance per frame, scaled by the configured speed.
const PHASE_STEP: f32 = 0.005;

/// Everything the draw pass needs for one glyph this frame.
///
/// `x` is the glyph's position after drift (and after a recycle, so a
/// freshly recycled glyph carries an off-screen x and is clipped), while
/// `y` already includes the wave and flow offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawnGlyph {
    pub x: f32,
    pub y: f32,
    pub value: Bit,
    /// Final opacity after the wave and depth factors.
    pub opacity: f32,
    /// Depth-scaled glyph size in field units.
    pub size: f32,
    /// True for far glyphs that get the soft-focus treatment.
    pub blurred: bool,
}

/// The animated field: a fixed-size glyph population plus a frame counter.
///
/// The population is created once from the configuration and then only
/// mutated by [`update`](Self::update); its size never changes for the
/// lifetime of the field. Two fields built from the same configuration and
/// seed evolve identically.
#[derive(Debug)]
pub struct BinaryField {
    config: FieldConfig,
    glyphs: Vec<Glyph>,
    drawn: Vec<DrawnGlyph>,
    time: u64,
    rng: SmallRng,
}

impl BinaryField {
    /// Build a field with `config.density` freshly randomized glyphs.
    pub fn new(config: FieldConfig, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let glyphs = (0..config.density)
            .map(|_| Glyph::spawn(&mut rng, &config))
            .collect();
        Self {
            drawn: Vec::with_capacity(config.density),
            config,
            glyphs,
            time: 0,
            rng,
        }
    }

    /// Advance the animation by one frame.
    ///
    /// Mirrors the drawing order of the effect: waves are evaluated at the
    /// pre-drift x, depth at the post-drift x, and the recycle happens
    /// before the bit and opacity are latched for drawing.
    pub fn update(&mut self) {
        let Self {
            config,
            glyphs,
            drawn,
            time,
            rng,
        } = self;
        let t = *time as f32;

        drawn.clear();
        for (index, glyph) in glyphs.iter_mut().enumerate() {
            let combined =
                wave::combined_offset(glyph.x, t, config.wave_amplitude, config.wave_frequency);
            let flow = wave::vertical_flow(t, index);

            glyph.x -= glyph.speed * config.speed * DRIFT_FACTOR;
            let draw_y = glyph.y + combined + flow;

            let depth = wave::depth(glyph.x, t);
            let size = config.font_size * (0.7 + 0.3 * depth);

            if glyph.x < -(config.font_size * RECYCLE_MARGIN) {
                glyph.recycle(rng, config);
            }

            let brightness = 0.4 + 0.6 * wave::intensity(combined);
            let depth_fade = 0.3 + 0.7 * depth;
            drawn.push(DrawnGlyph {
                x: glyph.x,
                y: draw_y,
                value: glyph.value,
                opacity: glyph.opacity * brightness * depth_fade,
                size,
                blurred: depth < BLUR_THRESHOLD,
            });

            glyph.phase += PHASE_STEP * config.speed;
            if rng.gen_bool(FLIP_CHANCE) {
                glyph.value = Bit::random(rng);
            }
        }

        *time += 1;
    }

    /// The configuration this field was built from.
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// The glyph population.
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// Per-glyph draw state from the most recent [`update`](Self::update).
    /// Empty before the first frame.
    pub fn drawn(&self) -> &[DrawnGlyph] {
        &self.drawn
    }

    /// Frames rendered since this field was built.
    pub fn frame_count(&self) -> u64 {
        self.time
    }
}
