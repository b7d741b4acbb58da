//! Weapon configuration and construction-time validation.
//!
//! Every field falls back to its `constants` default when omitted from JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Per-weapon tuning. Immutable once a controller is built from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponConfig {
    /// Damage dealt to whatever a shot hits.
    pub damage: f64,
    /// Maximum shot distance (meters).
    pub max_range: f64,
    /// Rounds available to refill the magazine.
    pub ammo_reserve: u32,
    /// Rounds per full magazine.
    pub magazine_capacity: u32,
    /// Minimum seconds between shots.
    pub fire_interval: f64,
    /// Seconds a reload takes.
    pub reload_duration: f64,
    /// Seconds the shot trail stays visible.
    pub trail_duration: f64,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            damage: DEFAULT_DAMAGE,
            max_range: DEFAULT_MAX_RANGE,
            ammo_reserve: DEFAULT_AMMO_RESERVE,
            magazine_capacity: DEFAULT_MAGAZINE_CAPACITY,
            fire_interval: DEFAULT_FIRE_INTERVAL,
            reload_duration: DEFAULT_RELOAD_DURATION,
            trail_duration: SHOT_TRAIL_DURATION,
        }
    }
}

impl WeaponConfig {
    /// Parse a JSON document and validate the result.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: WeaponConfig = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the permanent invariants a weapon relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let floats = [
            ("damage", self.damage),
            ("max_range", self.max_range),
            ("fire_interval", self.fire_interval),
            ("reload_duration", self.reload_duration),
            ("trail_duration", self.trail_duration),
        ];
        if let Some(&(field, _)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NotFinite { field });
        }

        if self.magazine_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.damage < 0.0 {
            return Err(ConfigError::NegativeDamage(self.damage));
        }
        if self.max_range <= 0.0 {
            return Err(ConfigError::NonPositiveRange(self.max_range));
        }

        let durations = [
            ("fire_interval", self.fire_interval),
            ("reload_duration", self.reload_duration),
            ("trail_duration", self.trail_duration),
        ];
        if let Some(&(field, value)) = durations.iter().find(|(_, v)| *v < 0.0) {
            return Err(ConfigError::NegativeDuration { field, value });
        }

        Ok(())
    }
}

/// Why a weapon could not be built.
#[derive(Debug)]
pub enum ConfigError {
    /// Magazine capacity must be at least one round.
    ZeroCapacity,
    NegativeDamage(f64),
    NonPositiveRange(f64),
    NegativeDuration { field: &'static str, value: f64 },
    NotFinite { field: &'static str },
    /// The JSON document could not be read as a `WeaponConfig`.
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroCapacity => write!(f, "magazine capacity must be greater than zero"),
            ConfigError::NegativeDamage(v) => write!(f, "damage must not be negative (got {v})"),
            ConfigError::NonPositiveRange(v) => {
                write!(f, "max range must be greater than zero (got {v})")
            }
            ConfigError::NegativeDuration { field, value } => {
                write!(f, "{field} must not be negative (got {value})")
            }
            ConfigError::NotFinite { field } => write!(f, "{field} must be a finite number"),
            ConfigError::Parse(e) => write!(f, "invalid weapon config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}
