//! Error types for the sundry crate.

use thiserror::Error;

/// Errors that can occur while invoking element methods or scheduling
/// deferred work.
///
/// Most operators in this crate cannot fail: out-of-range counts clamp and
/// empty inputs produce empty (or `None`) results.
#[derive(Debug, Error)]
pub enum Error {
    /// The element does not expose a method with this name.
    #[error("unknown method '{method}'")]
    UnknownMethod { method: String },

    /// The method exists but rejected the argument group it was given.
    #[error("invalid arguments for '{method}': {reason}")]
    InvalidArguments {
        method: &'static str,
        reason: &'static str,
    },

    /// The scheduler could not start the deferred task.
    #[error("failed to schedule deferred call: {0}")]
    Schedule(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for [`Error::UnknownMethod`].
    pub fn unknown_method(method: impl Into<String>) -> Self {
        Error::UnknownMethod {
            method: method.into(),
        }
    }
}

/// Result type for sundry operations.
pub type Result<T> = std::result::Result<T, Error>;
