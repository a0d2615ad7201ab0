//! Function values.
//!
//! A [`Function`] is an opaque callable with a fixed arity that is known before
//! it is first called. Its body receives the supplied arguments through an
//! [`Arguments`] view, which yields [`Value::Null`] for any position the caller
//! did not fill. A body written for `n` parameters therefore tolerates being
//! called with fewer arguments, and silently ignores extras.
//!
//! Two transforms build new functions out of existing ones:
//!
//! - [`curry`]: accept the arguments across any number of successive calls
//! - [`pipe`]: thread a value through functions from left to right
//!
//! # Examples
//!
//! ```rust
//! use functional::{Function, Value, curry};
//!
//! let volume = Function::named("volume", 3, |arguments| {
//!     let width = arguments.get(0).expect_number("volume")?;
//!     let height = arguments.get(1).expect_number("volume")?;
//!     let depth = arguments.get(2).expect_number("volume")?;
//!     Ok(Value::from(width * height * depth))
//! });
//!
//! let curried = curry(&volume);
//! let with_width = curried.call(&[Value::from(2)]).unwrap();
//! let with_width = with_width.as_function().unwrap();
//! assert_eq!(with_width.arity(), 2);
//! assert_eq!(
//!     with_width.call(&[Value::from(3), Value::from(4)]),
//!     Ok(Value::from(24))
//! );
//! ```

mod curry;
mod pipe;

pub use curry::{Curried, curry};
pub use pipe::{Pipeline, pipe};

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::value::Value;

static NULL: Value = Value::Null;

/// The signature every function body implements.
pub type Body = dyn Fn(Arguments<'_>) -> Result<Value> + Send + Sync;

/// A borrowed view of the arguments passed to a function body.
#[derive(Debug, Clone, Copy)]
pub struct Arguments<'a> {
    values: &'a [Value],
}

impl<'a> Arguments<'a> {
    /// Wraps a slice of argument values.
    #[must_use]
    pub const fn new(values: &'a [Value]) -> Self {
        Self { values }
    }

    /// Returns the argument at `index`, or [`Value::Null`] if it was not supplied.
    #[must_use]
    pub fn get(&self, index: usize) -> &'a Value {
        self.values.get(index).unwrap_or(&NULL)
    }

    /// Returns the number of arguments actually supplied.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no arguments were supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the supplied arguments as a slice.
    #[must_use]
    pub const fn as_slice(&self) -> &'a [Value] {
        self.values
    }

    /// Iterates the supplied arguments.
    pub fn iter(&self) -> std::slice::Iter<'a, Value> {
        self.values.iter()
    }
}

/// A callable value with a fixed arity.
///
/// Cloning a `Function` is cheap: the body is shared. Two functions are equal
/// only if they share the same body.
#[derive(Clone)]
pub struct Function {
    name: Option<Arc<str>>,
    arity: usize,
    body: Arc<Body>,
}

impl Function {
    /// Creates an anonymous function of the given arity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional::{Function, Value};
    ///
    /// let first = Function::new(2, |arguments| Ok(arguments.get(0).clone()));
    /// assert_eq!(first.arity(), 2);
    /// assert_eq!(first.call(&[Value::from(1)]), Ok(Value::from(1)));
    /// ```
    pub fn new<F>(arity: usize, body: F) -> Self
    where
        F: Fn(Arguments<'_>) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            name: None,
            arity,
            body: Arc::new(body),
        }
    }

    /// Creates a named function of the given arity.
    pub fn named<F>(name: &str, arity: usize, body: F) -> Self
    where
        F: Fn(Arguments<'_>) -> Result<Value> + Send + Sync + 'static,
    {
        Self::new(arity, body).with_name(name)
    }

    /// Returns this function renamed to `name`, sharing the same body.
    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(Arc::from(name));
        self
    }

    pub(crate) fn with_name_of(mut self, other: &Self) -> Self {
        self.name.clone_from(&other.name);
        self
    }

    /// Returns the function's name, if it has one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the number of parameters the function declares.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Invokes the function with `arguments`.
    ///
    /// # Errors
    ///
    /// Propagates whatever error the body returns.
    pub fn call(&self, arguments: &[Value]) -> Result<Value> {
        (self.body)(Arguments::new(arguments))
    }

    /// Invokes the function with a single argument.
    ///
    /// # Errors
    ///
    /// Propagates whatever error the body returns.
    pub fn call1(&self, argument: Value) -> Result<Value> {
        self.call(std::slice::from_ref(&argument))
    }

    /// Returns `true` if both functions share the same body.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Function")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(formatter, "<function {name}/{}>", self.arity),
            None => write!(formatter, "<function/{}>", self.arity),
        }
    }
}

static_assertions::assert_impl_all!(Function: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_arguments_read_as_null() {
        let second = Function::new(2, |arguments| Ok(arguments.get(1).clone()));
        assert_eq!(second.call(&[Value::from(1)]), Ok(Value::Null));
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        let first = Function::new(1, |arguments| Ok(arguments.get(0).clone()));
        assert_eq!(
            first.call(&[Value::from("a"), Value::from("b")]),
            Ok(Value::from("a"))
        );
    }

    #[test]
    fn test_clones_are_equal_but_rebuilt_functions_are_not() {
        let make = || Function::new(0, |_| Ok(Value::Null));
        let original = make();
        assert_eq!(original, original.clone());
        assert_ne!(original, make());
    }

    #[test]
    fn test_display_includes_name_and_arity() {
        let named = Function::named("add", 2, |_| Ok(Value::Null));
        let anonymous = Function::new(1, |_| Ok(Value::Null));
        assert_eq!(named.to_string(), "<function add/2>");
        assert_eq!(anonymous.to_string(), "<function/1>");
    }

    #[test]
    fn test_renaming_keeps_the_body() {
        let original = Function::new(1, |_| Ok(Value::Null));
        let renamed = original.clone().with_name("noop");
        assert_eq!(renamed.name(), Some("noop"));
        assert!(renamed.ptr_eq(&original));
    }
}
