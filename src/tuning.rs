//! Data-driven game balance
//!
//! Defaults match the shipped game. A JSON file may override any subset of
//! fields; missing fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to load a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(&'static str),
}

/// Gameplay balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Lives at round start (also the HUD heart count)
    pub max_lives: u8,
    /// Base ship speed (px/s per axis)
    pub player_speed: f32,
    /// Ship speed while the speed power-up is active
    pub boost_speed: f32,
    /// Speed power-up duration (seconds)
    pub powerup_duration: f32,
    /// Shield power-up duration (seconds)
    pub shield_duration: f32,
    /// Round countdown (whole seconds)
    pub round_time_secs: u32,
    /// Score per collectible
    pub collectible_bonus: u64,
    /// Invulnerability window after an obstacle hit (seconds)
    pub hit_cooldown: f32,
    /// Target progress along its curve per second
    pub target_speed: f32,
    /// Clearance added to a new object's radius when placing it
    pub place_min_dist: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            max_lives: 5,
            player_speed: 240.0,
            boost_speed: 420.0,
            powerup_duration: 4.0,
            shield_duration: 4.0,
            round_time_secs: 60,
            collectible_bonus: 5,
            hit_cooldown: 0.5,
            target_speed: 0.35,
            place_min_dist: 26.0,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Load from `path` if given, falling back to defaults on any failure
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::load(path).unwrap_or_else(|e| {
                log::warn!("{e}; using default tuning");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.max_lives == 0 {
            return Err(TuningError::Invalid("max_lives must be at least 1"));
        }
        if self.player_speed <= 0.0 || self.boost_speed <= 0.0 {
            return Err(TuningError::Invalid("speeds must be positive"));
        }
        if self.powerup_duration < 0.0 || self.shield_duration < 0.0 || self.hit_cooldown < 0.0
        {
            return Err(TuningError::Invalid("durations must not be negative"));
        }
        if self.round_time_secs == 0 {
            return Err(TuningError::Invalid("round_time_secs must be at least 1"));
        }
        if self.target_speed <= 0.0 {
            return Err(TuningError::Invalid("target_speed must be positive"));
        }
        if self.place_min_dist < 0.0 {
            return Err(TuningError::Invalid("place_min_dist must not be negative"));
        }
        Ok(())
    }
}
