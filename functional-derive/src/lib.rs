//! Procedural macros for the `functional` crate.
//!
//! # Available Function-like Macros
//!
//! - [`function!`]: Builds a `functional::Function` from a closure, taking the
//!   arity from the closure's parameter list
//! - [`curried!`]: Same as [`function!`], then curries the result
//!
//! # Example
//!
//! ```rust,ignore
//! use functional::{Value, curried, function};
//!
//! let first = function!(|value| Ok(value));
//! assert_eq!(first.arity(), 1);
//!
//! let add = curried!(|left, right| functional::combinators::arithmetic::sum(&left, &right));
//! let add_five = add.call(&[Value::from(5)]).unwrap();
//! assert_eq!(
//!     add_five.as_function().unwrap().call(&[Value::from(3)]),
//!     Ok(Value::from(8))
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod function;

use proc_macro::TokenStream;

/// Builds a `functional::Function` from a closure or from a body function and arity.
///
/// # Closure Form
///
/// `function!(|a, b, ...| body)` creates a function whose arity is the number
/// of closure parameters. Each parameter is bound to a clone of the argument
/// in the same position, or `Value::Null` if the caller supplied fewer
/// arguments. Parameters may carry a type annotation and may be `_`. The body
/// must evaluate to `functional::Result<functional::Value>`.
///
/// # Path Form
///
/// `function!(body, arity)` wraps an existing
/// `Fn(functional::Arguments<'_>) -> functional::Result<functional::Value>`
/// with an explicit arity, which must be an integer literal.
///
/// # Example
///
/// ```rust,ignore
/// use functional::{Arguments, Result, Value, function};
///
/// let swap = function!(|left, right| Ok(Value::List(vec![right, left])));
/// assert_eq!(
///     swap.call(&[Value::from(1), Value::from(2)]),
///     Ok(Value::List(vec![Value::from(2), Value::from(1)]))
/// );
///
/// fn count(arguments: Arguments<'_>) -> Result<Value> {
///     Ok(Value::from(arguments.len() as u32))
/// }
/// let counter = function!(count, 3);
/// assert_eq!(counter.arity(), 3);
/// ```
///
/// # Compile Errors
///
/// - A function path without an arity
/// - A non-integer arity
/// - A destructuring or by-reference closure parameter
#[proc_macro]
pub fn function(input: TokenStream) -> TokenStream {
    TokenStream::from(function::function_impl(input.into()))
}

/// Builds a curried `functional::Function`.
///
/// Accepts exactly the same input as [`function!`] and passes the result
/// through `functional::curry`, so arguments may be supplied across several
/// calls.
///
/// # Example
///
/// ```rust,ignore
/// use functional::{Value, curried};
///
/// let triple = curried!(|a, b, c| Ok(Value::List(vec![a, b, c])));
/// let partial = triple.call(&[Value::from(1)]).unwrap();
/// let result = partial
///     .as_function()
///     .unwrap()
///     .call(&[Value::from(2), Value::from(3)]);
/// assert_eq!(
///     result,
///     Ok(Value::List(vec![Value::from(1), Value::from(2), Value::from(3)]))
/// );
/// ```
#[proc_macro]
pub fn curried(input: TokenStream) -> TokenStream {
    TokenStream::from(function::curried_impl(input.into()))
}
