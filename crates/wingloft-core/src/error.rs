//! Error handling for WingLoft
//!
//! Provides the error taxonomy shared by every stage of the loft pipeline:
//! - Airfoil specification errors (bad NACA codes)
//! - Contour errors (imported profiles with no usable points)
//! - Span errors (adjacent stations closer than one layer)
//! - Parameter errors (invalid numeric configuration)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Errors raised while generating a loft toolpath.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoftError {
    /// The shape identifier does not decode to a known NACA family.
    #[error("Invalid airfoil spec '{code}': {reason}")]
    InvalidAirfoilSpec {
        /// The offending NACA code.
        code: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A contour has no usable points.
    #[error("Empty contour: {0}")]
    EmptyContour(String),

    /// Two adjacent stations are closer in z than one layer pitch.
    #[error(
        "Degenerate span {span}: z {z_start}..{z_end} is thinner than one layer ({layer_height})"
    )]
    DegenerateSpan {
        /// Index of the lower station of the span.
        span: usize,
        /// z of the lower station.
        z_start: f64,
        /// z of the upper station.
        z_end: f64,
        /// Configured layer height.
        layer_height: f64,
    },

    /// Invalid parameters were provided to a generator.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// A parameter validation error occurred.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),
}

impl LoftError {
    /// Shorthand for an [`LoftError::InvalidAirfoilSpec`].
    pub fn airfoil(code: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAirfoilSpec {
            code: code.into(),
            reason: reason.into(),
        }
    }
}

/// Errors related to parameter validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A parameter value is invalid.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },
}

impl ParameterError {
    /// Builds an [`ParameterError::InvalidValue`].
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Checks that `value` is finite and strictly positive.
    pub fn require_positive(name: &str, value: f64) -> ParameterResult<()> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(Self::OutOfRange {
                name: name.to_string(),
                value,
                min: 0.0,
                max: f64::INFINITY,
            })
        }
    }
}

/// Result type alias for loft operations.
pub type LoftResult<T> = Result<T, LoftError>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;
