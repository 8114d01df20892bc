//! Core error type.
//!
//! Sub-crates define their own error enums and convert `AqError` into them
//! via `#[from]`, or return it directly when nothing more specific applies.

use thiserror::Error;

/// The top-level error type for `aq-core` and a common base for sub-crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AqError {
    /// Invalid tunables or an unusable drawing surface at construction.
    #[error("configuration error: {0}")]
    Config(String),

    /// The host-supplied surface identifier did not resolve.
    #[error("drawing surface {0:?} not found")]
    SurfaceNotFound(String),

    /// A mutating call arrived while the aquarium was not bound to a surface.
    #[error("{op} is not valid while the aquarium is {state}")]
    InvalidState {
        op:    &'static str,
        state: &'static str,
    },
}

/// Shorthand result type for all `aq-*` crates.
pub type AqResult<T> = Result<T, AqError>;
