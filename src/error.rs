//! Error type for sequence generation and sampling

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
    #[error("scene {name} must be {requirement}, got {value}")]
    InvalidScene {
        name: &'static str,
        requirement: &'static str,
        value: f64,
    },
    #[error("range {name} is invalid: min {min} is greater than max {max}")]
    InvalidRange {
        name: &'static str,
        min: f64,
        max: f64,
    },
    #[error("frame buffer holds {len} pixels, expected {width}x{height}")]
    FrameSize {
        width: usize,
        height: usize,
        len: usize,
    },
    #[error("invalid sampler settings: {0}")]
    Settings(#[from] serde_json::Error),
}

/// Reject NaN and infinities before they reach the stepper
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<(), SimError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimError::NonFinite { name, value })
    }
}
