//! Error types for aq-render.

use thiserror::Error;

/// A failure to draw one layer or entity.  Always transient: the renderer
/// skips the offender and carries on with the frame.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RenderError {
    /// A coordinate, size or angle was NaN or infinite.
    #[error("non-finite {what}")]
    NonFinite { what: &'static str },

    /// The drawing backend rejected a call.
    #[error("surface backend error: {0}")]
    Backend(String),
}

/// Alias for `Result<T, RenderError>`.
pub type RenderResult<T> = Result<T, RenderError>;
