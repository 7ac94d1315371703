//! Error type shared by every generation entry point.

use thiserror::Error;

/// Errors reported when a generation request cannot be honoured.
///
/// Every variant is local to the call that produced it. No partial buffer is
/// returned alongside an error and the RNG handle that was passed in stays
/// usable for the next call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NoiseError {
    /// Audio duration is not positive and finite, or rounds down to zero samples.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration { duration: f64 },

    /// Image width or height is zero, or `width * height` does not fit in memory.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// The noise family selector is not one this engine knows.
    #[error("unknown noise family: '{0}'")]
    InvalidFamily(String),

    /// A numeric parameter is outside its accepted range.
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NoiseError>;
