//! Left-to-right composition.
//!
//! ```text
//! pipe(f1, f2, ..., fn)(args) == fn(...f2(f1(args)))
//! ```
//!
//! The first stage receives the full argument list; every later stage
//! receives exactly one argument, the previous stage's result.

use std::sync::Arc;

use tracing::trace;

use super::Function;
use crate::error::{ArityError, Result};
use crate::value::Value;

/// An ordered, non-empty list of stages.
#[derive(Debug, Clone)]
pub struct Pipeline {
    stages: Arc<[Function]>,
}

impl Pipeline {
    /// Builds a pipeline from its stages.
    ///
    /// # Errors
    ///
    /// Returns an [`ArityError`] if there are no stages.
    pub fn new<I>(stages: I) -> Result<Self>
    where
        I: IntoIterator<Item = Function>,
    {
        let stages: Arc<[Function]> = stages.into_iter().collect();
        if stages.is_empty() {
            return Err(ArityError::new(1, 0).into());
        }
        Ok(Self { stages })
    }

    /// Returns the stages in application order.
    #[must_use]
    pub fn stages(&self) -> &[Function] {
        &self.stages
    }

    /// Runs `arguments` through every stage.
    ///
    /// # Errors
    ///
    /// Stops at, and returns, the first error any stage raises.
    pub fn run(&self, arguments: &[Value]) -> Result<Value> {
        let (first, rest) = self
            .stages
            .split_first()
            .ok_or(ArityError::new(1, 0))?;
        trace!(stages = self.stages.len(), "running pipeline");
        rest.iter()
            .try_fold(first.call(arguments)?, |value, stage| stage.call1(value))
    }

    /// Exposes the pipeline as a [`Function`] with the first stage's arity.
    #[must_use]
    pub fn into_function(self) -> Function {
        let arity = self.stages[0].arity();
        Function::new(arity, move |arguments| self.run(arguments.as_slice()))
    }
}

/// Composes `functions` from left to right.
///
/// # Errors
///
/// Returns an [`ArityError`] if `functions` is empty.
///
/// # Examples
///
/// ```rust
/// use functional::{Value, add, mult, negate, pipe};
///
/// assert!(pipe(std::iter::empty()).unwrap_err().is_arity_error());
///
/// let add_ten = add().call(&[Value::from(10)]).unwrap();
/// let double = mult().call(&[Value::from(2)]).unwrap();
/// let composed = pipe([
///     add_ten.as_function().unwrap().clone(),
///     double.as_function().unwrap().clone(),
///     negate(),
/// ])
/// .unwrap();
/// assert_eq!(composed.call(&[Value::from(5)]), Ok(Value::from(-30)));
/// ```
pub fn pipe<I>(functions: I) -> Result<Function>
where
    I: IntoIterator<Item = Function>,
{
    Pipeline::new(functions).map(Pipeline::into_function)
}
