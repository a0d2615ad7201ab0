//! Container classification.
//!
//! The collection operators accept any [`Value`] and decide how to traverse it
//! by looking at its shape once per call:
//!
//! - [`Shape::Sequence`]: lists and text. Text is traversed as a sequence of
//!   Unicode scalar values, each exposed as a one-character [`Value::Text`].
//! - [`Shape::Mapping`]: string-keyed maps. Only the map's own entries exist.
//! - [`Shape::Unsupported`]: everything else, including [`Value::Null`].
//!
//! [`Container`] is the borrowed, tagged view that carries the classified data
//! to the operator that dispatched on it.
//!
//! # Examples
//!
//! ```rust
//! use functional::{Shape, Value, classify};
//!
//! assert_eq!(classify(&Value::from(vec![Value::from(1)])), Shape::Sequence);
//! assert_eq!(classify(&Value::from("abc")), Shape::Sequence);
//! assert_eq!(classify(&Value::from_entries([("a", 1)])), Shape::Mapping);
//! assert_eq!(classify(&Value::Null), Shape::Unsupported);
//! assert_eq!(classify(&Value::from(42)), Shape::Unsupported);
//! ```

use std::collections::BTreeMap;

use super::Value;

/// The shape of a container value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Indexed, order-preserving, finite.
    Sequence,
    /// Keyed by name.
    Mapping,
    /// Neither.
    Unsupported,
}

/// Classifies a value by shape.
#[must_use]
pub const fn classify(value: &Value) -> Shape {
    match value {
        Value::List(_) | Value::Text(_) => Shape::Sequence,
        Value::Map(_) => Shape::Mapping,
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::Function(_) => {
            Shape::Unsupported
        }
    }
}

/// A classified, borrowed view of a container value.
#[derive(Debug, Clone)]
pub enum Container<'a> {
    /// A list or text value.
    Sequence(Sequence<'a>),
    /// A map value.
    Mapping(&'a BTreeMap<String, Value>),
    /// A value that is not a container.
    Unsupported(&'a Value),
}

impl<'a> Container<'a> {
    /// Classifies `value` and wraps it in the matching view.
    #[must_use]
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::List(elements) => Self::Sequence(Sequence::List(elements)),
            Value::Text(text) => Self::Sequence(Sequence::Text(text.chars().collect())),
            Value::Map(entries) => Self::Mapping(entries),
            Value::Null
            | Value::Bool(_)
            | Value::Number(_)
            | Value::Function(_) => Self::Unsupported(value),
        }
    }

    /// Returns the shape tag of this view.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Sequence(_) => Shape::Sequence,
            Self::Mapping(_) => Shape::Mapping,
            Self::Unsupported(_) => Shape::Unsupported,
        }
    }
}

/// An indexable view of an ordered sequence.
///
/// Text is decoded into characters up front so that indexing by position is
/// constant time.
#[derive(Debug, Clone, PartialEq)]
pub enum Sequence<'a> {
    /// The elements of a list.
    List(&'a [Value]),
    /// The characters of a text value.
    Text(Vec<char>),
}

impl Sequence<'_> {
    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::List(elements) => elements.len(),
            Self::Text(characters) => characters.len(),
        }
    }

    /// Returns `true` if there are no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Value> {
        match self {
            Self::List(elements) => elements.get(index).cloned(),
            Self::Text(characters) => characters.get(index).copied().map(Value::from),
        }
    }

    /// Iterates the elements in order. The iterator is double-ended.
    #[must_use]
    pub fn iter(&self) -> SequenceIter<'_> {
        SequenceIter {
            sequence: self,
            front: 0,
            back: self.len(),
        }
    }
}

impl<'s> IntoIterator for &'s Sequence<'_> {
    type Item = Value;
    type IntoIter = SequenceIter<'s>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the elements of a [`Sequence`].
#[derive(Debug, Clone)]
pub struct SequenceIter<'s> {
    sequence: &'s Sequence<'s>,
    front: usize,
    back: usize,
}

impl Iterator for SequenceIter<'_> {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let element = self.sequence.get(self.front);
        self.front += 1;
        element
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for SequenceIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.sequence.get(self.back)
    }
}

impl ExactSizeIterator for SequenceIter<'_> {}
