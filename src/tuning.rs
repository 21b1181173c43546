//! Movement and timer tuning
//!
//! The level layout is fixed; how the player moves through it is data.
//! Every field falls back to its default when missing from the JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tunable feel parameters (frame units)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Horizontal velocity multiplier applied per tick with no direction held
    pub friction: f32,
    /// Horizontal run speed
    pub run_speed: f32,
    /// Vertical velocity set by a jump (negative is up)
    pub jump_impulse: f32,
    pub star_speed_multiplier: f32,
    pub star_jump_multiplier: f32,
    /// Fraction of the remaining distance the camera covers each tick
    pub camera_smoothing: f32,
    /// Minimum ticks between two fireballs
    pub fire_cooldown_ticks: u32,
    /// Star power (and its invincibility) duration
    pub star_ticks: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.6,
            friction: 0.8,
            run_speed: 5.0,
            jump_impulse: -14.0,
            star_speed_multiplier: 1.5,
            star_jump_multiplier: 1.2,
            camera_smoothing: 0.1,
            fire_cooldown_ticks: 18,
            star_ticks: 600,
        }
    }
}

/// Why a tuning could not be used
#[derive(Debug)]
pub enum TuningError {
    Parse(serde_json::Error),
    OutOfRange { field: &'static str, value: f32 },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid tuning JSON: {err}"),
            Self::OutOfRange { field, value } => {
                write!(f, "tuning field `{field}` out of range: {value}")
            }
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::OutOfRange { .. } => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!("Loaded tuning: {:?}", tuning);
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would break the simulation's invariants
    pub fn validate(&self) -> Result<(), TuningError> {
        check("gravity", self.gravity, |v| v > 0.0)?;
        check("friction", self.friction, |v| (0.0..=1.0).contains(&v))?;
        check("run_speed", self.run_speed, |v| v > 0.0)?;
        check("jump_impulse", self.jump_impulse, |v| v < 0.0)?;
        check("star_speed_multiplier", self.star_speed_multiplier, |v| v >= 1.0)?;
        check("star_jump_multiplier", self.star_jump_multiplier, |v| v >= 1.0)?;
        check("camera_smoothing", self.camera_smoothing, |v| v > 0.0 && v <= 1.0)?;
        Ok(())
    }
}

fn check(field: &'static str, value: f32, ok: impl Fn(f32) -> bool) -> Result<(), TuningError> {
    if value.is_finite() && ok(value) {
        Ok(())
    } else {
        Err(TuningError::OutOfRange { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.5 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.5);
        assert_eq!(tuning.run_speed, Tuning::default().run_speed);
    }

    #[test]
    fn test_rejects_upward_gravity() {
        let err = Tuning::from_json(r#"{ "gravity": -1.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::OutOfRange { field: "gravity", .. }));
    }

    #[test]
    fn test_rejects_garbage() {
        let err = Tuning::from_json("not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
        assert!(err.to_string().starts_with("invalid tuning JSON"));
    }

    #[test]
    fn test_json_roundtrip() {
        let tuning = Tuning {
            star_ticks: 300,
            ..Default::default()
        };
        let json = tuning.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }
}
