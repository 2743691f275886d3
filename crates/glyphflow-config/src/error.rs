//! Configuration errors.

use std::path::PathBuf;

use glyphflow_scene::SceneError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config")]
    Parse(#[from] toml::de::Error),
    #[error("frame_interval_ms must be at least 1")]
    ZeroInterval,
    #[error("invalid element #{index}")]
    Element {
        index: usize,
        #[source]
        source: SceneError,
    },
}
