//! Error types for the Globe3D view core
//!
//! This module defines the error types returned by the per-frame transform
//! core: argument validation, degenerate geometry, and queries made before a
//! frame has been computed.

use std::fmt;

/// Result type for Globe3D operations
pub type Result<T> = std::result::Result<T, Error>;

/// Globe3D errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A required input is missing, non-finite, or out of range
    InvalidArgument(String),

    /// The geometry cannot be computed (singular matrix, zero W, collapsed clip range)
    DegenerateGeometry(String),

    /// The draw context has no valid frame (reset never called or last reset failed)
    InvalidState(String),
}

impl Error {
    pub(crate) fn non_finite(what: &str) -> Self {
        Error::InvalidArgument(format!("{} is missing or not finite", what))
    }

    pub(crate) fn singular(what: &str) -> Self {
        Error::DegenerateGeometry(format!("{} is singular", what))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::DegenerateGeometry(msg) => write!(f, "Degenerate geometry: {}", msg),
            Error::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
