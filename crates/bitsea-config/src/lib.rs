//! Configuration file loading for the bitsea terminal app.
//!
//! Settings live in a TOML file in the platform config directory (for
//! example `~/.config/bitsea/config.toml` on Linux). Every key is optional
//! and falls back to the documented default; colors must be `#rrggbb` hex
//! triples and anything else fails the load with a typed error rather than
//! producing a broken picture.
//!
//! ```toml
//! density = 200
//! speed = 0.3
//! wave_amplitude = 60.0
//! wave_frequency = 0.008
//! font_size = 12.0
//!
//! [colors]
//! background = "#000000"
//! primary = "#ffffff"
//! secondary = "#cccccc"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use bitsea_core::FieldConfig;
use directories::ProjectDirs;

/// Errors raised while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// The default config file location for this platform, if one exists.
pub fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "bitsea").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load the configuration from the default location.
///
/// A missing file is not an error; it yields the built-in defaults.
pub fn load() -> Result<FieldConfig, ConfigError> {
    match default_path() {
        Some(path) if path.exists() => load_from(&path),
        _ => Ok(FieldConfig::default()),
    }
}

/// Load the configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<FieldConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use bitsea_core::{FieldConfig, Rgb};

    #[test]
    fn empty_file_yields_defaults() {
        let config: FieldConfig = toml::from_str("").unwrap();
        assert_eq!(config, FieldConfig::default());
    }

    #[test]
    fn partial_file_keeps_defaults_for_the_rest() {
        let config: FieldConfig = toml::from_str(
            r##"
            density = 250
            speed = 1.2

            [colors]
            primary = "#00ff88"
            "##,
        )
        .unwrap();
        assert_eq!(config.density, 250);
        assert_eq!(config.speed, 1.2);
        assert_eq!(config.colors.primary, Rgb::new(0x00, 0xff, 0x88));
        // Untouched keys fall back to defaults.
        assert_eq!(config.wave_amplitude, 50.0);
        assert_eq!(config.colors.background, Rgb::new(0, 0, 0));
    }

    #[test]
    fn named_colors_are_rejected() {
        let result = toml::from_str::<FieldConfig>(
            r#"
            [colors]
            background = "black"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn full_file_round_trips() {
        let mut config = FieldConfig::default();
        config.density = 300;
        config.colors.secondary = Rgb::new(0x66, 0x66, 0x66);
        let text = toml::to_string(&config).unwrap();
        let parsed: FieldConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
