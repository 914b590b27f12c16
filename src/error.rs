use thiserror::Error;

/// Errors produced by the compositor core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompositorError {
    /// Alpha weight outside the unit interval (or NaN).
    #[error("invalid alpha weight {0}; expected a value in [0, 1]")]
    InvalidColorValue(f32),

    /// Hex color string with the wrong length or non-hex digits.
    #[error("malformed hex color string {0:?}")]
    InvalidColorFormat(String),

    /// A timing log was asked for its average before any sample was recorded.
    #[error("log {0:?} has no recorded samples")]
    NoSamples(String),
}
