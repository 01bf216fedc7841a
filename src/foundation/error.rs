/// Convenience result type used across folio-motion.
pub type MotionResult<T> = Result<T, MotionError>;

/// Error taxonomy for construction and configuration APIs.
///
/// Runtime paths (event handling, sampling) never return these; they degrade to
/// inert output instead.
#[derive(thiserror::Error, Debug)]
pub enum MotionError {
    /// Invalid user-provided mapping, variant, or domain data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid or unreadable configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MotionError {
    /// Build a [`MotionError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MotionError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`MotionError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
