/// Convenience result type used across the crate.
pub type CardResult<T> = Result<T, CardError>;

/// Top-level error taxonomy for the rendering core.
///
/// Degraded-but-successful outcomes (missing template, failed vector
/// rasterization, missing font face) are absorbed by their documented
/// fallbacks and never appear here. Every variant below fails the whole
/// request it occurred in.
#[derive(thiserror::Error, Debug)]
pub enum CardError {
    /// Invalid caller-provided data, naming the offending field.
    #[error("validation error: {0}")]
    Validation(String),

    /// Unreadable or corrupt raster template asset.
    #[error("template error: {0}")]
    Template(String),

    /// Internal compositor or layout fault.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO, notably output
    /// write failures.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CardError {
    /// Build a [`CardError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CardError::Template`] value.
    pub fn template(msg: impl Into<String>) -> Self {
        Self::Template(msg.into())
    }

    /// Build a [`CardError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
