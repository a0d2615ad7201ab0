//! Error types for combinator application.
//!
//! Every fallible operation in this crate returns [`Result<T>`], whose error
//! side is the unified [`Error`] enum. There are exactly two kinds of failure:
//!
//! - [`ArityError`]: a callable was invoked with too few arguments
//!   (typically zero where at least one is required).
//! - [`TypeError`]: a value had the wrong shape for the operation, such as
//!   mapping over a number or adding a boolean.
//!
//! Errors are raised at the point of the offending call and propagate
//! unchanged to the caller. Nothing inside the library recovers from them.
//!
//! # Examples
//!
//! ```rust
//! use functional::{Error, TypeError};
//!
//! let error = Error::from(TypeError::new("map", "an ordered sequence or keyed mapping", "Number"));
//! assert!(error.is_type_error());
//! assert_eq!(
//!     format!("{error}"),
//!     "map: expected an ordered sequence or keyed mapping, found Number"
//! );
//! ```

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Raised when a callable receives fewer arguments than it requires.
///
/// # Examples
///
/// ```rust
/// use functional::ArityError;
///
/// let error = ArityError::new(1, 0);
/// assert_eq!(format!("{error}"), "at least one argument required (received 0)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArityError {
    /// The minimum number of arguments the callable accepts.
    pub expected: usize,
    /// The number of arguments actually supplied.
    pub received: usize,
}

impl ArityError {
    /// Creates a new `ArityError`.
    #[must_use]
    pub const fn new(expected: usize, received: usize) -> Self {
        Self { expected, received }
    }
}

impl std::fmt::Display for ArityError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.expected == 1 {
            write!(
                formatter,
                "at least one argument required (received {})",
                self.received
            )
        } else {
            write!(
                formatter,
                "at least {} arguments required (received {})",
                self.expected, self.received
            )
        }
    }
}

impl std::error::Error for ArityError {}

/// Raised when a value does not have the shape an operation needs.
///
/// # Examples
///
/// ```rust
/// use functional::TypeError;
///
/// let error = TypeError::new("add", "a number", "Bool");
/// assert_eq!(format!("{error}"), "add: expected a number, found Bool");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeError {
    /// The operation that rejected the value.
    pub operation: &'static str,
    /// A description of what the operation accepts.
    pub expected: &'static str,
    /// The type name of the offending value.
    pub found: &'static str,
}

impl TypeError {
    /// Creates a new `TypeError`.
    #[must_use]
    pub const fn new(operation: &'static str, expected: &'static str, found: &'static str) -> Self {
        Self {
            operation,
            expected,
            found,
        }
    }
}

impl std::fmt::Display for TypeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: expected {}, found {}",
            self.operation, self.expected, self.found
        )
    }
}

impl std::error::Error for TypeError {}

/// The unified error type for all combinator failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Too few arguments were supplied.
    Arity(ArityError),
    /// A value had an unsupported shape.
    Type(TypeError),
}

impl Error {
    /// Returns `true` if this is an [`ArityError`].
    #[must_use]
    pub const fn is_arity_error(&self) -> bool {
        matches!(self, Self::Arity(_))
    }

    /// Returns `true` if this is a [`TypeError`].
    #[must_use]
    pub const fn is_type_error(&self) -> bool {
        matches!(self, Self::Type(_))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arity(error) => write!(formatter, "{error}"),
            Self::Type(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Arity(error) => Some(error),
            Self::Type(error) => Some(error),
        }
    }
}

impl From<ArityError> for Error {
    fn from(error: ArityError) -> Self {
        Self::Arity(error)
    }
}

impl From<TypeError> for Error {
    fn from(error: TypeError) -> Self {
        Self::Type(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_error_display_plural() {
        let error = ArityError::new(3, 0);
        assert_eq!(
            format!("{error}"),
            "at least 3 arguments required (received 0)"
        );
    }

    #[test]
    fn test_error_wraps_kind_and_exposes_source() {
        use std::error::Error as _;

        let error = Error::from(ArityError::new(1, 0));
        assert!(error.is_arity_error());
        assert!(!error.is_type_error());
        assert_eq!(
            error.source().map(ToString::to_string),
            Some("at least one argument required (received 0)".to_string())
        );
    }

    #[test]
    fn test_type_error_equality() {
        let first = TypeError::new("map", "a function", "Number");
        let second = TypeError::new("map", "a function", "Number");
        let third = TypeError::new("filter", "a function", "Number");
        assert_eq!(first, second);
        assert_ne!(first, third);
    }
}
