/// Convenience result type used across the crate.
pub type SorterResult<T> = Result<T, SorterError>;

/// Top-level error taxonomy used by generator APIs.
#[derive(thiserror::Error, Debug)]
pub enum SorterError {
    /// Invalid user-provided configuration or input values.
    #[error("validation error: {0}")]
    Validation(String),

    /// More distinct shape/color pairs were requested than the catalog offers.
    #[error("insufficient combinations: requested {requested}, catalog offers {available}")]
    InsufficientCombinations {
        /// Number of distinct pairs requested.
        requested: usize,
        /// Number of distinct pairs in the catalog.
        available: usize,
    },

    /// An arrangement could not satisfy its spacing constraint.
    #[error("placement error: {0}")]
    Placement(String),

    /// Every resample attempt produced a layout already seen in the batch.
    #[error("uniqueness exhausted after {attempts} attempts")]
    UniquenessExhausted {
        /// Number of attempts made before giving up.
        attempts: u32,
    },

    /// Non-positive or non-finite animation timing.
    #[error("invalid animation parameters: {0}")]
    InvalidAnimationParameters(String),

    /// Errors while rasterizing a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while encoding a frame sequence.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SorterError {
    /// Build a [`SorterError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SorterError::Placement`] value.
    pub fn placement(msg: impl Into<String>) -> Self {
        Self::Placement(msg.into())
    }

    /// Build a [`SorterError::InvalidAnimationParameters`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::InvalidAnimationParameters(msg.into())
    }

    /// Build a [`SorterError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SorterError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Whether resampling a fresh layout can clear this error.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Placement(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
