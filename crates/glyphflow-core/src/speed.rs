//! Playback speed of an animated element.

use std::num::NonZeroU64;

use serde::Deserialize;

/// Rejected speed input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpeedError {
    #[error("speed must be a positive tick interval, got {0}")]
    NonPositive(i64),
    #[error("unknown speed {0:?}, expected a positive integer or \"static\"")]
    Unknown(String),
}

/// Number of ticks between two frame advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawSpeed")]
pub enum Speed {
    /// Advance on every tick divisible by the interval.
    Every(NonZeroU64),
    /// Never advance.
    Static,
}

impl Speed {
    /// Build an interval speed, rejecting zero.
    pub fn every(ticks: u64) -> Result<Self, SpeedError> {
        NonZeroU64::new(ticks)
            .map(Speed::Every)
            .ok_or(SpeedError::NonPositive(0))
    }

    /// Whether an element with this speed advances on `tick`.
    pub fn is_due(self, tick: u64) -> bool {
        match self {
            Speed::Every(interval) => tick % interval.get() == 0,
            Speed::Static => false,
        }
    }

    pub fn is_static(self) -> bool {
        self == Speed::Static
    }
}

impl TryFrom<i64> for Speed {
    type Error = SpeedError;

    fn try_from(ticks: i64) -> Result<Self, Self::Error> {
        match u64::try_from(ticks) {
            Ok(ticks) if ticks > 0 => Speed::every(ticks),
            _ => Err(SpeedError::NonPositive(ticks)),
        }
    }
}

/// Config form: an integer interval or the word `static`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSpeed {
    Ticks(i64),
    Named(String),
}

impl TryFrom<RawSpeed> for Speed {
    type Error = SpeedError;

    fn try_from(raw: RawSpeed) -> Result<Self, Self::Error> {
        match raw {
            RawSpeed::Ticks(ticks) => Speed::try_from(ticks),
            RawSpeed::Named(name) if name.eq_ignore_ascii_case("static") => Ok(Speed::Static),
            RawSpeed::Named(name) => Err(SpeedError::Unknown(name)),
        }
    }
}
