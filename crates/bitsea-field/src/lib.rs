//! Animated binary wave field rendering for the bitsea terminal app.
//!
//! This crate owns the drifting population of `0`/`1` glyphs and the
//! per-frame update that pushes them through three superposed sine waves.
//! The field lives in abstract canvas units so the wave math is independent
//! of the terminal size; drawing projects field coordinates onto the cell
//! grid of a Ratatui frame each frame.
//!
//! The field is a one-way sink for configuration: build it with a
//! [`FieldConfig`] and a seed, call [`BinaryField::update`] once per frame,
//! and draw with [`render`]. Reconfiguration means dropping the field and
//! constructing a new one.

mod field;
mod glyph;
mod render;
mod wave;

pub use field::{BinaryField, DrawnGlyph};
pub use glyph::{Bit, Glyph};
pub use render::render;
