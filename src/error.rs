//! Crate error type
//!
//! Every variant is an initialisation-time failure. Per-frame simulation
//! operations never return errors.

/// Errors raised while configuring the simulation
#[derive(thiserror::Error, Debug)]
pub enum SimError {
    /// Field bounds must be finite and strictly positive
    #[error("invalid field bounds {width}x{height}")]
    InvalidBounds { width: f32, height: f32 },

    /// Shape radius base must be finite and non-negative
    #[error("invalid asteroid radius base: {radius}")]
    InvalidShape { radius: f32 },

    /// Twinkle preset index outside 0..=2
    #[error("twinkle preset {0} out of range (expected 0-2)")]
    InvalidPreset(u8),

    /// Persisted settings text could not be parsed
    #[error("settings parse error: {0}")]
    Settings(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
