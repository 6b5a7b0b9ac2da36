/// Convenience result type used across the crate.
pub type RoseResult<T> = Result<T, RoseError>;

/// Top-level error taxonomy used by the frame pipeline.
#[derive(thiserror::Error, Debug)]
pub enum RoseError {
    /// Invalid user-provided options or parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// The drawing surface could not be acquired or presented.
    #[error("surface error: {0}")]
    Surface(String),

    /// The metrics report could not be written.
    #[error("report error: {0}")]
    Report(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RoseError {
    /// Build a [`RoseError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RoseError::Surface`] value.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Build a [`RoseError::Report`] value.
    pub fn report(msg: impl Into<String>) -> Self {
        Self::Report(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
