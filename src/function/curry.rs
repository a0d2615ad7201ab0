//! The currying engine.
//!
//! [`curry`] turns a function of arity `n` into one that accepts its arguments
//! across any number of successive calls. Each call must supply at least one
//! argument. When a single call supplies at least as many arguments as are
//! still missing, the original function fires with every argument bound so far
//! followed by every argument of that call, excess included. Otherwise the call
//! returns a new curried function with the arguments appended to its prefix.
//!
//! The accumulated state is explicit: a [`Curried`] holds the original function
//! and the bound prefix, and derives the remaining arity from the two.
//! Partial applications never share a prefix mutably, so one partial
//! application can be reused with different continuations.
//!
//! ```text
//! curry(f)(a)(b)(c)   == f(a, b, c)
//! curry(f)(a, b)(c)   == f(a, b, c)
//! curry(f)(a)(b, c)   == f(a, b, c)
//! curry(f)(a, b, c)   == f(a, b, c)
//! curry(f)(a)(b, c, d) == f(a, b, c, d)
//! curry(f)()          -> ArityError
//! ```

use smallvec::SmallVec;
use tracing::{debug, trace};

use super::Function;
use crate::error::{ArityError, Result};
use crate::value::Value;

type Prefix = SmallVec<[Value; 4]>;

/// A function together with the arguments bound to it so far.
#[derive(Clone)]
pub struct Curried {
    original: Function,
    bound: Prefix,
}

impl Curried {
    /// Starts a curry chain over `original` with nothing bound.
    #[must_use]
    pub fn new(original: Function) -> Self {
        Self {
            original,
            bound: Prefix::new(),
        }
    }

    /// Returns the function the chain will eventually invoke.
    #[must_use]
    pub const fn original(&self) -> &Function {
        &self.original
    }

    /// Returns the arguments bound so far, in order.
    #[must_use]
    pub fn bound(&self) -> &[Value] {
        &self.bound
    }

    /// Returns how many arguments are still missing.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.original.arity().saturating_sub(self.bound.len())
    }

    /// Applies one call's worth of arguments.
    ///
    /// Returns the original function's result if this call completes the
    /// argument list, or a [`Value::Function`] holding the extended chain.
    ///
    /// # Errors
    ///
    /// Returns an [`ArityError`] if `arguments` is empty, and propagates any
    /// error raised by the original function when it fires.
    pub fn apply(&self, arguments: &[Value]) -> Result<Value> {
        if arguments.is_empty() {
            debug!(
                function = self.original.name(),
                remaining = self.remaining(),
                "curried function called without arguments"
            );
            return Err(ArityError::new(1, 0).into());
        }

        if arguments.len() >= self.remaining() {
            trace!(
                function = self.original.name(),
                bound = self.bound.len(),
                supplied = arguments.len(),
                "curried function saturated"
            );
            let mut complete: SmallVec<[Value; 8]> =
                SmallVec::with_capacity(self.bound.len() + arguments.len());
            complete.extend(self.bound.iter().cloned());
            complete.extend(arguments.iter().cloned());
            return self.original.call(&complete);
        }

        let mut bound = self.bound.clone();
        bound.extend(arguments.iter().cloned());
        let extended = Self {
            original: self.original.clone(),
            bound,
        };
        trace!(
            function = self.original.name(),
            bound = extended.bound.len(),
            remaining = extended.remaining(),
            "curried function extended"
        );
        Ok(Value::Function(extended.into_function()))
    }

    /// Exposes the chain as a [`Function`] whose arity is the remaining arity.
    #[must_use]
    pub fn into_function(self) -> Function {
        let arity = self.remaining();
        let original = self.original.clone();
        Function::new(arity, move |arguments| self.apply(arguments.as_slice()))
            .with_name_of(&original)
    }
}

impl std::fmt::Debug for Curried {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("original", &self.original)
            .field("bound", &self.bound)
            .field("remaining", &self.remaining())
            .finish()
    }
}

/// Returns the curried form of `function`.
///
/// The arity is read once from `function`. Currying a curried function wraps
/// it again using its reported remaining arity.
///
/// # Examples
///
/// ```rust
/// use functional::{Function, Value, curry};
///
/// let sum = Function::named("sum", 4, |arguments| {
///     let mut total = 0.0;
///     for index in 0..4 {
///         total += arguments.get(index).expect_number("sum")?;
///     }
///     Ok(Value::from(total))
/// });
/// let curried = curry(&sum);
///
/// let step = curried.call(&[Value::from(1), Value::from(2)]).unwrap();
/// let step = step.as_function().unwrap().call(&[Value::from(3)]).unwrap();
/// let result = step.as_function().unwrap().call(&[Value::from(4)]).unwrap();
/// assert_eq!(result, Value::from(10));
///
/// assert!(curried.call(&[]).unwrap_err().is_arity_error());
/// ```
#[must_use]
pub fn curry(function: &Function) -> Function {
    Curried::new(function.clone()).into_function()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn collect(arity: usize) -> Function {
        Function::named("collect", arity, |arguments| {
            Ok(Value::List(arguments.as_slice().to_vec()))
        })
    }

    fn numbers(values: &[i32]) -> Vec<Value> {
        values.iter().copied().map(Value::from).collect()
    }

    #[test]
    fn test_remaining_shrinks_with_each_partial_application() {
        let chain = Curried::new(collect(3));
        assert_eq!(chain.remaining(), 3);

        let partial = chain.apply(&numbers(&[1])).unwrap();
        let partial = partial.as_function().unwrap();
        assert_eq!(partial.arity(), 2);
        assert_eq!(partial.name(), Some("collect"));
    }

    #[test]
    fn test_excess_arguments_are_forwarded() {
        let curried = curry(&collect(2));
        let partial = curried.call(&numbers(&[1])).unwrap();
        let result = partial
            .as_function()
            .unwrap()
            .call(&numbers(&[2, 3, 4]))
            .unwrap();
        assert_eq!(result, Value::List(numbers(&[1, 2, 3, 4])));
    }

    #[test]
    fn test_partial_application_is_reusable() {
        let curried = curry(&collect(2));
        let partial = curried.call(&numbers(&[10])).unwrap();
        let partial = partial.as_function().unwrap();

        assert_eq!(
            partial.call(&numbers(&[1])),
            Ok(Value::List(numbers(&[10, 1])))
        );
        assert_eq!(
            partial.call(&numbers(&[2])),
            Ok(Value::List(numbers(&[10, 2])))
        );
    }

    #[test]
    fn test_zero_arity_function_fires_on_first_argument() {
        let curried = curry(&collect(0));
        assert!(curried.call(&[]).unwrap_err().is_arity_error());
        assert_eq!(
            curried.call(&numbers(&[7])),
            Ok(Value::List(numbers(&[7])))
        );
    }

    #[test]
    fn test_zero_arguments_fail_mid_chain() {
        let curried = curry(&collect(3));
        let partial = curried.call(&numbers(&[1])).unwrap();
        let error = partial.as_function().unwrap().call(&[]).unwrap_err();
        assert_eq!(error, Error::from(ArityError::new(1, 0)));
    }

    #[test]
    fn test_currying_a_curried_function_uses_remaining_arity() {
        let once = curry(&collect(3));
        let partial = once.call(&numbers(&[1])).unwrap();
        let twice = curry(partial.as_function().unwrap());
        assert_eq!(twice.arity(), 2);

        let step = twice.call(&numbers(&[2])).unwrap();
        let result = step.as_function().unwrap().call(&numbers(&[3])).unwrap();
        assert_eq!(result, Value::List(numbers(&[1, 2, 3])));
    }
}
