//! Wave math for the field.
//!
//! All multipliers here are fixed constants of the visual design. The only
//! externally configurable knobs are the primary amplitude and spatial
//! frequency; the secondary and tertiary layers scale off them.

/// Temporal rate of the primary wave, in frame-counter units.
const PRIMARY_RATE: f32 = 0.008;
/// Temporal rate of the secondary wave (faster ripple).
const SECONDARY_RATE: f32 = 0.012;
/// Temporal rate of the tertiary wave (slow swell).
const TERTIARY_RATE: f32 = 0.006;

/// Spatial frequency multipliers relative to the configured frequency.
const SECONDARY_FREQ: f32 = 1.7;
const TERTIARY_FREQ: f32 = 0.3;

/// Amplitude multipliers relative to the configured amplitude.
const SECONDARY_AMP: f32 = 0.4;
const TERTIARY_AMP: f32 = 0.8;

/// Rate and per-glyph step of the slow vertical flow.
const FLOW_RATE: f32 = 0.003;
const FLOW_STEP: f32 = 0.05;
const FLOW_AMPLITUDE: f32 = 5.0;

/// Spatial and temporal rates of the depth oscillation.
const DEPTH_X_RATE: f32 = 0.003;
const DEPTH_T_RATE: f32 = 0.004;

/// Rate at which the combined wave modulates brightness.
const INTENSITY_RATE: f32 = 0.01;

/// Vertical offset from the three superposed waves at position `x` and
/// frame `t`.
pub fn combined_offset(x: f32, t: f32, amplitude: f32, frequency: f32) -> f32 {
    let primary = (x * frequency + t * PRIMARY_RATE).sin() * amplitude;
    let secondary = (x * frequency * SECONDARY_FREQ + t * SECONDARY_RATE).sin()
        * (amplitude * SECONDARY_AMP);
    let tertiary =
        (x * frequency * TERTIARY_FREQ + t * TERTIARY_RATE).sin() * (amplitude * TERTIARY_AMP);
    primary + secondary + tertiary
}

/// Slow per-glyph vertical drift, staggered by glyph index.
pub fn vertical_flow(t: f32, index: usize) -> f32 {
    (t * FLOW_RATE + index as f32 * FLOW_STEP).sin() * FLOW_AMPLITUDE
}

/// Depth factor in [0, 1] simulating parallax: far glyphs are smaller,
/// dimmer and blurred.
pub fn depth(x: f32, t: f32) -> f32 {
    ((x * DEPTH_X_RATE + t * DEPTH_T_RATE).sin() + 1.0) * 0.5
}

/// Brightness factor in [0, 1] derived from the combined wave offset.
pub fn intensity(combined: f32) -> f32 {
    ((combined * INTENSITY_RATE).sin() + 1.0) * 0.5
}
