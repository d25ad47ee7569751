//! Error types for pricewise.

use thiserror::Error;

/// Result type alias for indicator computations.
pub type Result<T> = std::result::Result<T, IndicatorError>;

/// Errors produced by the indicator engine.
///
/// Every failure is one of two kinds: the caller handed in something the
/// engine cannot work with, or the engine could not finish a computation it
/// had accepted. No partially populated result is ever returned alongside
/// either kind.
#[derive(Error, Debug)]
pub enum IndicatorError {
    /// Malformed or out-of-range input.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Allocation or a dependent sub-computation failed.
    #[error("Computation failed: {context}")]
    ComputationFailed {
        context: String,
        #[source]
        source: Option<Box<IndicatorError>>,
    },
}

impl IndicatorError {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an invalid argument error for two series that must line up.
    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::invalid_argument(format!(
            "series length mismatch: expected {expected}, got {actual}"
        ))
    }

    /// Create an invalid argument error for an empty input series.
    pub fn empty_series(context: &str) -> Self {
        Self::invalid_argument(format!("{context} requires a non-empty series"))
    }

    /// Create an invalid argument error for a window outside `1..len`.
    pub fn window_out_of_range(context: &str, window: usize, len: usize) -> Self {
        Self::invalid_argument(format!(
            "{context} window must satisfy 0 < window < {len}, got {window}"
        ))
    }

    /// Wrap a failed sub-computation.
    pub fn computation_failed(context: impl Into<String>, source: IndicatorError) -> Self {
        Self::ComputationFailed {
            context: context.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an allocation failure error.
    pub fn allocation_failed(len: usize) -> Self {
        Self::ComputationFailed {
            context: format!("failed to allocate buffer of {len} values"),
            source: None,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    pub fn is_computation_failed(&self) -> bool {
        matches!(self, Self::ComputationFailed { .. })
    }
}
