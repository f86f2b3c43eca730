//! Random scenario settings
//!
//! Loaded from JSON by callers that want non-default ranges; every field
//! falls back to its default when missing.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_FRAME_RATE, DEFAULT_SEQUENCE_LENGTH, IMAGE_HEIGHT, IMAGE_WIDTH};
use crate::error::SimError;

/// Closed-open interval sampled uniformly
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniformRange {
    pub min: f64,
    pub max: f64,
}

impl UniformRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// A range that always yields `value`
    pub const fn fixed(value: f64) -> Self {
        Self::new(value, value)
    }

    /// Map a unit sample `u` in `[0, 1)` onto the range
    #[inline]
    pub fn lerp(&self, u: f64) -> f64 {
        self.min + (self.max - self.min) * u
    }

    pub fn validate(&self, name: &'static str) -> Result<(), SimError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(SimError::InvalidRange {
                name,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Sampler configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerSettings {
    /// Frames per sequence
    pub sequence_length: usize,
    /// Simulation sub-steps per frame
    pub frame_rate: u32,

    // === Launch ===
    pub speed: UniformRange,
    /// Radians, screen convention
    pub direction: UniformRange,

    // === Start position (physics coordinates) ===
    pub position_x: UniformRange,
    pub position_y: UniformRange,

    // === Environment ===
    pub gravity: UniformRange,
    pub restitution: UniformRange,
}

impl Default for SamplerSettings {
    fn default() -> Self {
        Self {
            sequence_length: DEFAULT_SEQUENCE_LENGTH,
            frame_rate: DEFAULT_FRAME_RATE,

            speed: UniformRange::new(0.0, 10.0),
            direction: UniformRange::new(0.0, TAU),

            position_x: UniformRange::new(0.0, IMAGE_WIDTH),
            position_y: UniformRange::new(0.0, IMAGE_HEIGHT),

            gravity: UniformRange::new(5.0, 10.0),
            restitution: UniformRange::new(0.5, 1.0),
        }
    }
}

impl SamplerSettings {
    /// Parse settings from JSON, filling in defaults for missing fields
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every range, in sampling order
    pub fn validate(&self) -> Result<(), SimError> {
        self.speed.validate("speed")?;
        self.direction.validate("direction")?;
        self.position_x.validate("position_x")?;
        self.position_y.validate("position_y")?;
        self.gravity.validate("gravity")?;
        self.restitution.validate("restitution")?;
        Ok(())
    }
}
