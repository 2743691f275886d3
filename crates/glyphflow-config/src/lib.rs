//! Configuration for glyphflow.
//!
//! A config file is TOML. Every field is optional; a file without an
//! `elements` list plays the built-in demo scene.

mod error;
mod paths;
mod scene;

pub use error::ConfigError;
pub use paths::{config_path, log_dir};
pub use scene::{ElementSpec, FrameSpec, demo_elements};

use std::path::Path;
use std::time::Duration;

use glyphflow_core::{ColorTheme, GridScale, InitialPaint};
use glyphflow_scene::Driver;
use serde::Deserialize;
use tracing::{debug, info};

/// Default pause between two cycles, roughly one display refresh.
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Milliseconds between two driver cycles.
    pub frame_interval_ms: u64,
    pub initial_paint: InitialPaint,
    pub theme: ColorTheme,
    /// Show the key help line at the bottom of the screen.
    pub show_help: bool,
    pub grid: GridScale,
    pub elements: Vec<ElementSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            initial_paint: InitialPaint::default(),
            theme: ColorTheme::default(),
            show_help: true,
            grid: GridScale::default(),
            elements: demo_elements(),
        }
    }
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file that must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        info!(path = %path.display(), elements = config.elements.len(), "loaded config");
        Ok(config)
    }

    /// Load the config from the platform config directory, falling back to
    /// defaults when there is no file.
    pub fn load_default() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            Some(path) => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            None => {
                debug!("no config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(())
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// Build every configured element into a driver, in file order.
    pub fn build_scene(&self) -> Result<Driver, ConfigError> {
        let elements = self
            .elements
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                spec.build()
                    .map_err(|source| ConfigError::Element { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!(elements = elements.len(), "built scene");
        Ok(Driver::new(elements))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphflow_core::{Direction, Speed};
    use std::io::Write;

    #[test]
    fn test_default_config_plays_demo() {
        let config = Config::default();
        assert_eq!(config.frame_interval(), Duration::from_millis(16));
        assert_eq!(config.initial_paint, InitialPaint::FirstFrame);
        let driver = config.build_scene().unwrap();
        assert_eq!(driver.elements().len(), 3);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_full_document() {
        let config = Config::from_toml_str(
            r#"
            frame_interval_ms = 40
            initial_paint = "blank"
            theme = "amber"
            show_help = false

            [grid]
            cell_width = 2
            cell_height = 1

            [[elements]]
            x = 0
            y = 0
            kind = "text"
            text = "hello"

            [[elements]]
            x = 1
            y = 2
            speed = 3
            kind = "sweep"
            direction = "down"
            length = 4

            [[elements]]
            x = 5
            y = 6
            speed = 7
            kind = "fill"
            growing = true
            length = 8
            "#,
        )
        .unwrap();

        assert_eq!(config.frame_interval_ms, 40);
        assert_eq!(config.initial_paint, InitialPaint::Blank);
        assert_eq!(config.theme, ColorTheme::Amber);
        assert!(!config.show_help);
        assert_eq!(config.grid.cell_width.get(), 2);
        assert_eq!(config.elements.len(), 3);
        assert_eq!(config.elements[0].speed, Speed::Static);
        assert_eq!(
            config.elements[1].frames,
            FrameSpec::Sweep {
                direction: Direction::Down,
                length: 4
            }
        );

        let driver = config.build_scene().unwrap();
        assert_eq!(driver.elements()[1].frames().len(), 5);
        assert_eq!(driver.elements()[2].frames().len(), 9);
    }

    #[test]
    fn test_negative_length_reports_element() {
        let config = Config::from_toml_str(
            r#"
            [[elements]]
            x = 0
            y = 0
            speed = 1
            kind = "fill"
            growing = true
            length = -1
            "#,
        )
        .unwrap();

        let err = config.build_scene().unwrap_err();
        assert!(matches!(err, ConfigError::Element { index: 0, .. }));
    }

    #[test]
    fn test_invalid_speed_rejected() {
        let source = r#"
            [[elements]]
            x = 0
            y = 0
            speed = 0
            kind = "text"
            text = "x"
        "#;
        assert!(matches!(
            Config::from_toml_str(source),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_misspelled_element_key_rejected() {
        let misspelled_speed = r#"
            [[elements]]
            x = 0
            y = 0
            sped = 2
            kind = "fill"
            growing = true
            length = 3
        "#;
        assert!(matches!(
            Config::from_toml_str(misspelled_speed),
            Err(ConfigError::Parse(_))
        ));

        let misspelled_length = r#"
            [[elements]]
            x = 0
            y = 0
            speed = 2
            kind = "sweep"
            length = 3
            lenght = 9
        "#;
        assert!(matches!(
            Config::from_toml_str(misspelled_length),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_zero_interval_rejected() {
        assert!(matches!(
            Config::from_toml_str("frame_interval_ms = 0"),
            Err(ConfigError::ZeroInterval)
        ));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(Config::from_toml_str("frame_rate = 60").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "frame_interval_ms = 25").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.frame_interval_ms, 25);
        assert_eq!(config.elements, demo_elements());
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_example_config_parses() {
        let config = Config::from_toml_str(include_str!("../../../config.example.toml")).unwrap();
        config.build_scene().unwrap();
    }
}
