//! Validated RGB colors parsed from `#rrggbb` strings.

use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when a color string is not a 6-digit hex triple.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("color `{0}` is not a #rrggbb hex triple")]
pub struct ParseColorError(pub String);

/// An RGB color.
///
/// Colors are only ever constructed from `#rrggbb` strings (or literals in
/// the preset table), so anything holding an [`Rgb`] is known to be a valid
/// color. Named or functional color syntax is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to a Ratatui color.
    pub fn to_color(self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }

    /// Blend this color toward `background` by the given opacity.
    ///
    /// Opacity 1.0 yields this color unchanged, 0.0 yields the background.
    /// This is the terminal counterpart of drawing with an alpha channel on
    /// an opaque backdrop.
    pub fn blend(self, background: Rgb, opacity: f32) -> Rgb {
        let t = opacity.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| (bg as f32 + (fg as f32 - bg as f32) * t) as u8;
        Rgb {
            r: mix(self.r, background.r),
            g: mix(self.g, background.g),
            b: mix(self.b, background.b),
        }
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ParseColorError(s.to_string()))?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError(s.to_string()));
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        Ok(Rgb::new(channel(0), channel(2), channel(4)))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_triples() {
        assert_eq!("#000000".parse::<Rgb>().unwrap(), Rgb::new(0, 0, 0));
        assert_eq!("#ffffff".parse::<Rgb>().unwrap(), Rgb::new(255, 255, 255));
        assert_eq!("#00DDff".parse::<Rgb>().unwrap(), Rgb::new(0, 0xdd, 0xff));
    }

    #[test]
    fn rejects_non_hex_colors() {
        for bad in ["black", "#fff", "#gggggg", "00ff00", "#00ff001", ""] {
            assert!(bad.parse::<Rgb>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn display_round_trips() {
        let c = Rgb::new(0x12, 0xab, 0xef);
        assert_eq!(c.to_string().parse::<Rgb>().unwrap(), c);
    }

    #[test]
    fn blend_endpoints() {
        let fg = Rgb::new(200, 100, 50);
        let bg = Rgb::new(0, 0, 0);
        assert_eq!(fg.blend(bg, 1.0), fg);
        assert_eq!(fg.blend(bg, 0.0), bg);
        let mid = fg.blend(bg, 0.5);
        assert_eq!(mid, Rgb::new(100, 50, 25));
    }
}
