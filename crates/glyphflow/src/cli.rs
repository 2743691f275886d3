//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use glyphflow_config::{Config, ConfigError};
use glyphflow_core::InitialPaint;

/// Looping text-art diagram animations in the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Config file to load instead of the one in the config directory
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Milliseconds between animation ticks
    #[arg(short, long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: Option<u64>,

    /// Leave animated elements blank until their first tick
    #[arg(long)]
    pub blank_first_frame: bool,
}

impl Cli {
    /// Load the selected config and apply command-line overrides.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load_default()?,
        };
        self.apply(&mut config);
        Ok(config)
    }

    fn apply(&self, config: &mut Config) {
        if let Some(interval) = self.interval {
            config.frame_interval_ms = interval;
        }
        if self.blank_first_frame {
            config.initial_paint = InitialPaint::Blank;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_overrides_applied() {
        let cli = Cli::try_parse_from(["glyphflow", "-i", "50", "--blank-first-frame"]).unwrap();
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.frame_interval_ms, 50);
        assert_eq!(config.initial_paint, InitialPaint::Blank);
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let cli = Cli::try_parse_from(["glyphflow"]).unwrap();
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_zero_interval_rejected() {
        assert!(Cli::try_parse_from(["glyphflow", "--interval", "0"]).is_err());
    }
}
