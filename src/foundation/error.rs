/// Convenience result type used across Duffle.
pub type DuffleResult<T> = Result<T, DuffleError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum DuffleError {
    /// A blend-mode name outside the supported set.
    #[error("unknown blend mode '{0}'")]
    UnknownBlendMode(String),

    /// A composite-operator name outside the supported set.
    #[error("unknown composite operator '{0}'")]
    UnknownCompositeOp(String),

    /// Invalid buffer geometry or caller-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DuffleError {
    /// Build a [`DuffleError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
