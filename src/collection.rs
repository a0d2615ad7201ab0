//! Shape-polymorphic collection operators.
//!
//! [`map`] and [`filter`] accept both ordered sequences (lists and text) and
//! keyed mappings; [`fold_left`] and [`fold_right`] accept ordered sequences
//! only. Each operator classifies its container once through
//! [`Container::of`] and then runs the matching implementation. Inputs are
//! never modified; every result is a freshly built value.
//!
//! | operator | Sequence | Mapping | otherwise |
//! |---|---|---|---|
//! | `map` | `List` of results | `Map`, same keys | `TypeError` |
//! | `filter` | same kind, kept elements | `Map`, kept entries | `TypeError` |
//! | `fold_left` | `f(acc, x)` ascending | `TypeError` | `TypeError` |
//! | `fold_right` | `f(x, acc)` descending | `TypeError` | `TypeError` |
//!
//! # Examples
//!
//! ```rust
//! use functional::{Function, Value, collection};
//!
//! let double = Function::new(1, |arguments| {
//!     Ok(Value::from(arguments.get(0).expect_number("double")? * 2.0))
//! });
//!
//! let list = Value::from(vec![Value::from(1), Value::from(2)]);
//! assert_eq!(
//!     collection::map(&double, &list),
//!     Ok(Value::from(vec![Value::from(2), Value::from(4)]))
//! );
//!
//! let record = Value::from_entries([("a", 1), ("b", 2)]);
//! assert_eq!(
//!     collection::map(&double, &record),
//!     Ok(Value::from_entries([("a", 2), ("b", 4)]))
//! );
//! ```

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::error::{Error, Result, TypeError};
use crate::function::Function;
use crate::value::{Container, Sequence, Value};

const CONTAINER: &str = "an ordered sequence or keyed mapping";
const SEQUENCE: &str = "an ordered sequence";

fn unsupported(operation: &'static str, expected: &'static str, value: &Value) -> Error {
    debug!(
        operation,
        found = value.type_name(),
        "unsupported container shape"
    );
    TypeError::new(operation, expected, value.type_name()).into()
}

/// Applies `function` to every element of a sequence or every value of a mapping.
///
/// Sequences produce a [`Value::List`] of the same length (text included);
/// mappings produce a [`Value::Map`] with the same keys.
///
/// # Errors
///
/// Returns a [`TypeError`] if `container` is neither a sequence nor a mapping,
/// and propagates the first error `function` raises.
pub fn map(function: &Function, container: &Value) -> Result<Value> {
    match Container::of(container) {
        Container::Sequence(sequence) => {
            trace!(operation = "map", length = sequence.len(), "mapping sequence");
            sequence
                .iter()
                .map(|element| function.call1(element))
                .collect::<Result<Vec<_>>>()
                .map(Value::List)
        }
        Container::Mapping(entries) => {
            trace!(operation = "map", length = entries.len(), "mapping entries");
            entries
                .iter()
                .map(|(key, value)| Ok((key.clone(), function.call1(value.clone())?)))
                .collect::<Result<BTreeMap<_, _>>>()
                .map(Value::Map)
        }
        Container::Unsupported(value) => Err(unsupported("map", CONTAINER, value)),
    }
}

/// Keeps the elements of a sequence, or the entries of a mapping, whose value
/// makes `predicate` return a truthy result.
///
/// Lists stay lists and text stays text; relative order is preserved.
///
/// # Errors
///
/// Returns a [`TypeError`] if `container` is neither a sequence nor a mapping,
/// and propagates the first error `predicate` raises.
pub fn filter(predicate: &Function, container: &Value) -> Result<Value> {
    let keep = |value: &Value| -> Result<bool> {
        Ok(predicate.call1(value.clone())?.is_truthy())
    };

    match Container::of(container) {
        Container::Sequence(Sequence::List(elements)) => {
            trace!(operation = "filter", length = elements.len(), "filtering list");
            let mut kept = Vec::new();
            for element in elements {
                if keep(element)? {
                    kept.push(element.clone());
                }
            }
            Ok(Value::List(kept))
        }
        Container::Sequence(Sequence::Text(characters)) => {
            trace!(operation = "filter", length = characters.len(), "filtering text");
            let mut kept = String::new();
            for character in characters {
                if keep(&Value::from(character))? {
                    kept.push(character);
                }
            }
            Ok(Value::Text(kept))
        }
        Container::Mapping(entries) => {
            trace!(operation = "filter", length = entries.len(), "filtering entries");
            let mut kept = BTreeMap::new();
            for (key, value) in entries {
                if keep(value)? {
                    kept.insert(key.clone(), value.clone());
                }
            }
            Ok(Value::Map(kept))
        }
        Container::Unsupported(value) => Err(unsupported("filter", CONTAINER, value)),
    }
}

fn sequence_of<'a>(operation: &'static str, container: &'a Value) -> Result<Sequence<'a>> {
    match Container::of(container) {
        Container::Sequence(sequence) => Ok(sequence),
        Container::Mapping(_) | Container::Unsupported(_) => {
            Err(unsupported(operation, SEQUENCE, container))
        }
    }
}

/// Folds a sequence from the first element to the last.
///
/// Each step computes `accumulator = function(accumulator, element)`. An empty
/// sequence returns `initial` unchanged.
///
/// # Errors
///
/// Returns a [`TypeError`] if `container` is not an ordered sequence (mappings
/// included), and propagates the first error `function` raises.
pub fn fold_left(function: &Function, initial: Value, container: &Value) -> Result<Value> {
    let sequence = sequence_of("foldl", container)?;
    trace!(operation = "foldl", length = sequence.len(), "folding sequence");
    sequence.iter().try_fold(initial, |accumulator, element| {
        function.call(&[accumulator, element])
    })
}

/// Folds a sequence from the last element to the first.
///
/// Each step computes `accumulator = function(element, accumulator)`; note the
/// element comes first. An empty sequence returns `initial` unchanged.
///
/// # Errors
///
/// Returns a [`TypeError`] if `container` is not an ordered sequence (mappings
/// included), and propagates the first error `function` raises.
pub fn fold_right(function: &Function, initial: Value, container: &Value) -> Result<Value> {
    let sequence = sequence_of("foldr", container)?;
    trace!(operation = "foldr", length = sequence.len(), "folding sequence");
    sequence.iter().rev().try_fold(initial, |accumulator, element| {
        function.call(&[element, accumulator])
    })
}
