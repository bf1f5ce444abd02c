//! Core types for the bitsea binary wave animation.
//!
//! This crate holds the value types shared by the field renderer and the
//! host application: the field configuration record, the validated RGB
//! color triple, and the named presets. It contains no animation logic.

mod color;
mod config;
mod preset;

pub use color::{ParseColorError, Rgb};
pub use config::{FieldConfig, Palette};
pub use preset::{Preset, PRESETS};
