//! Arithmetic on values.
//!
//! Operands must be numbers; [`sum`] additionally concatenates two texts.
//! Division follows IEEE-754: dividing by zero produces an infinity or NaN,
//! never an error.

use crate::error::{Result, TypeError};
use crate::value::Value;

/// Adds two numbers, or concatenates two texts.
///
/// # Errors
///
/// Returns a [`TypeError`] for any other pair of operands.
pub fn sum(left: &Value, right: &Value) -> Result<Value> {
    match (left, right) {
        (Value::Number(left), Value::Number(right)) => Ok(Value::Number(left + right)),
        (Value::Text(left), Value::Text(right)) => Ok(Value::Text(format!("{left}{right}"))),
        (Value::Number(_), other) | (other, _) => {
            Err(TypeError::new("add", "two numbers or two texts", other.type_name()).into())
        }
    }
}

/// Multiplies two numbers.
///
/// # Errors
///
/// Returns a [`TypeError`] if either operand is not a number.
pub fn product(left: &Value, right: &Value) -> Result<Value> {
    Ok(Value::Number(
        left.expect_number("mult")? * right.expect_number("mult")?,
    ))
}

/// Divides `left` by `right`.
///
/// # Errors
///
/// Returns a [`TypeError`] if either operand is not a number.
pub fn quotient(left: &Value, right: &Value) -> Result<Value> {
    Ok(Value::Number(
        left.expect_number("div")? / right.expect_number("div")?,
    ))
}

/// Negates a number.
///
/// # Errors
///
/// Returns a [`TypeError`] if the operand is not a number.
pub fn negation(operand: &Value) -> Result<Value> {
    Ok(Value::Number(-operand.expect_number("negate")?))
}
