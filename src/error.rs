//! Error types raised by the library itself.
//!
//! User-raised failures (see the `conditional` module) use the caller's own
//! error type; [`FnError`] only covers the failures this crate detects.

use thiserror::Error;

/// Represents the failures detected by the library's own helpers.
///
/// # Examples
///
/// ```rust
/// use fnkit::FnError;
///
/// let error = FnError::missing_key(&"foo");
/// assert_eq!(error.to_string(), "missing key: \"foo\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FnError {
    /// An argument was outside the accepted domain (e.g. a negative count).
    #[error("{function}: {message}")]
    InvalidArgument {
        /// The name of the function that rejected the argument.
        function: &'static str,
        /// Why the argument was rejected.
        message: String,
    },

    /// A requested key was absent from an associative container.
    #[error("missing key: {key}")]
    MissingKey {
        /// Debug rendering of the missing key.
        key: String,
    },

    /// A method name was not found in a type's dispatch table.
    #[error("{target} has no method named `{method}`")]
    UnknownMethod {
        /// The type the method was looked up on.
        target: &'static str,
        /// The requested method name.
        method: String,
    },

    /// No constructor was registered under the requested name.
    #[error("no constructor registered under `{name}`")]
    UnknownType {
        /// The requested type name.
        name: String,
    },
}

impl FnError {
    /// Creates an [`FnError::InvalidArgument`].
    #[must_use]
    pub fn invalid_argument(function: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            function,
            message: message.into(),
        }
    }

    /// Creates an [`FnError::MissingKey`] from the key's debug rendering.
    #[must_use]
    pub fn missing_key<Q: std::fmt::Debug + ?Sized>(key: &Q) -> Self {
        Self::MissingKey {
            key: format!("{key:?}"),
        }
    }

    /// Creates an [`FnError::UnknownMethod`].
    #[must_use]
    pub fn unknown_method(target: &'static str, method: &str) -> Self {
        Self::UnknownMethod {
            target,
            method: method.to_string(),
        }
    }

    /// Creates an [`FnError::UnknownType`].
    #[must_use]
    pub fn unknown_type(name: &str) -> Self {
        Self::UnknownType {
            name: name.to_string(),
        }
    }
}
