//! The runtime value model.
//!
//! Every combinator in this crate consumes and produces [`Value`]s. The set of
//! variants is closed: a value is null, a boolean, a number, text, a list, a
//! string-keyed map, or a function.
//!
//! # Examples
//!
//! ```rust
//! use functional::Value;
//!
//! let list = Value::from(vec![Value::from(1), Value::from("two")]);
//! assert_eq!(list.type_name(), "List");
//! assert_eq!(format!("{list}"), r#"[1, "two"]"#);
//!
//! let record = Value::from_entries([("a", 1), ("b", 2)]);
//! assert_eq!(format!("{record}"), "{a: 1, b: 2}");
//! ```

mod shape;

#[cfg(feature = "serde")]
mod serialization;

pub use shape::{Container, Sequence, SequenceIter, Shape, classify};

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Result, TypeError};
use crate::function::Function;

/// A dynamically shaped runtime value.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// The absence of a value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A 64-bit IEEE-754 number.
    Number(f64),
    /// UTF-8 text. Treated as a sequence of characters by the collection operators.
    Text(String),
    /// An ordered list of values.
    List(Vec<Value>),
    /// A string-keyed mapping, iterated in key order.
    Map(BTreeMap<String, Value>),
    /// A callable.
    Function(Function),
}

impl Value {
    /// Builds a [`Value::Map`] from key/value pairs.
    ///
    /// Later duplicates replace earlier ones.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional::Value;
    ///
    /// let value = Value::from_entries([("x", 1.5), ("y", -2.0)]);
    /// assert_eq!(value.as_map().map(|entries| entries.len()), Some(2));
    /// ```
    pub fn from_entries<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Self>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Returns the name of this value's variant, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool(_) => "Bool",
            Self::Number(_) => "Number",
            Self::Text(_) => "Text",
            Self::List(_) => "List",
            Self::Map(_) => "Map",
            Self::Function(_) => "Function",
        }
    }

    /// Returns whether the value counts as true in a predicate position.
    ///
    /// `Null`, `false`, `0`, `NaN` and empty text are falsy. Everything else,
    /// including empty lists and maps, is truthy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional::Value;
    ///
    /// assert!(!Value::from(0).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(Value::List(vec![]).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Number(number) => *number != 0.0 && !number.is_nan(),
            Self::Text(text) => !text.is_empty(),
            Self::List(_) | Self::Map(_) | Self::Function(_) => true,
        }
    }

    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the number, if this is a [`Value::Number`].
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the text, if this is a [`Value::Text`].
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the elements, if this is a [`Value::List`].
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(elements) => Some(elements),
            _ => None,
        }
    }

    /// Returns the entries, if this is a [`Value::Map`].
    #[must_use]
    pub const fn as_map(&self) -> Option<&BTreeMap<String, Self>> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Returns the function, if this is a [`Value::Function`].
    #[must_use]
    pub const fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Returns the number or a [`TypeError`] attributed to `operation`.
    ///
    /// # Errors
    ///
    /// Fails when the value is not a number.
    pub fn expect_number(&self, operation: &'static str) -> Result<f64> {
        self.as_number()
            .ok_or_else(|| TypeError::new(operation, "a number", self.type_name()).into())
    }

    /// Returns the function or a [`TypeError`] attributed to `operation`.
    ///
    /// # Errors
    ///
    /// Fails when the value is not a function.
    pub fn expect_function(&self, operation: &'static str) -> Result<&Function> {
        self.as_function()
            .ok_or_else(|| TypeError::new(operation, "a function", self.type_name()).into())
    }

    fn fmt_nested(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(formatter, "{text:?}"),
            other => write!(formatter, "{other}"),
        }
    }
}

fn fmt_number(number: f64, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
    if number.is_nan() {
        formatter.write_str("NaN")
    } else if number.is_infinite() {
        formatter.write_str(if number > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        write!(formatter, "{number}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => formatter.write_str("null"),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Number(number) => fmt_number(*number, formatter),
            Self::Text(text) => formatter.write_str(text),
            Self::List(elements) => {
                formatter.write_str("[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    element.fmt_nested(formatter)?;
                }
                formatter.write_str("]")
            }
            Self::Map(entries) => {
                formatter.write_str("{")?;
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{key}: ")?;
                    value.fmt_nested(formatter)?;
                }
                formatter.write_str("}")
            }
            Self::Function(function) => write!(formatter, "{function}"),
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<u32> for Value {
    fn from(number: u32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<i64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(number: i64) -> Self {
        Self::Number(number as f64)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<char> for Value {
    fn from(character: char) -> Self {
        Self::Text(character.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Self>) -> Self {
        Self::List(elements)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(entries: BTreeMap<String, Self>) -> Self {
        Self::Map(entries)
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Self>>(iterator: I) -> Self {
        Self::List(iterator.into_iter().collect())
    }
}

static_assertions::assert_impl_all!(Value: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness_of_numbers() {
        assert!(Value::from(1).is_truthy());
        assert!(Value::from(-0.5).is_truthy());
        assert!(!Value::from(0.0).is_truthy());
        assert!(!Value::Number(f64::NAN).is_truthy());
    }

    #[test]
    fn test_display_special_numbers() {
        assert_eq!(Value::Number(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Value::Number(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Value::Number(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::from(2.5).to_string(), "2.5");
        assert_eq!(Value::from(10).to_string(), "10");
    }

    #[test]
    fn test_display_nested_containers() {
        let value = Value::from_entries([
            ("name", Value::from("x")),
            ("tags", Value::from(vec![Value::Null, Value::from(true)])),
        ]);
        assert_eq!(value.to_string(), r#"{name: "x", tags: [null, true]}"#);
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("a")), Value::from("a"));
    }

    #[test]
    fn test_expect_number_reports_found_type() {
        let error = Value::from("a").expect_number("mult").unwrap_err();
        assert_eq!(error.to_string(), "mult: expected a number, found Text");
    }

    #[test]
    fn test_collect_into_list() {
        let value: Value = (1..=3).map(Value::from).collect();
        assert_eq!(
            value,
            Value::List(vec![Value::from(1), Value::from(2), Value::from(3)])
        );
    }
}
