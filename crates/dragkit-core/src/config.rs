//! Tracker configuration.

use crate::gesture_constants::{DEFAULT_MIN_VELOCITY_INTERVAL_MS, DEFAULT_THROTTLE_INTERVAL_MS};

/// Tunables for a [`GestureTracker`](crate::GestureTracker).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackerConfig {
    /// Moves closer together than this (in ms) do not advance the stored sample.
    pub throttle_interval_ms: f64,
    /// Elapsed time below this (in ms) is clamped up before computing velocity.
    pub min_velocity_interval_ms: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            throttle_interval_ms: DEFAULT_THROTTLE_INTERVAL_MS,
            min_velocity_interval_ms: DEFAULT_MIN_VELOCITY_INTERVAL_MS,
        }
    }
}

impl TrackerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_throttle_interval(mut self, millis: f64) -> Self {
        self.throttle_interval_ms = millis;
        self
    }

    pub fn with_min_velocity_interval(mut self, millis: f64) -> Self {
        self.min_velocity_interval_ms = millis;
        self
    }

    /// Checks that both intervals are finite and usable.
    ///
    /// A zero throttle is allowed (every move advances the sample); the
    /// velocity interval must be strictly positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.throttle_interval_ms.is_finite() || self.throttle_interval_ms < 0.0 {
            return Err(ConfigError::InvalidThrottle {
                value: self.throttle_interval_ms,
            });
        }
        if !self.min_velocity_interval_ms.is_finite() || self.min_velocity_interval_ms <= 0.0 {
            return Err(ConfigError::NonPositiveMinInterval {
                value: self.min_velocity_interval_ms,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    InvalidThrottle { value: f64 },
    NonPositiveMinInterval { value: f64 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidThrottle { value } => {
                write!(f, "throttle interval must be finite and >= 0, got {value}")
            }
            ConfigError::NonPositiveMinInterval { value } => {
                write!(f, "minimum velocity interval must be finite and > 0, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
