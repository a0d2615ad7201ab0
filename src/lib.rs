//! # functional
//!
//! A small functional programming toolkit over dynamically shaped values:
//! currying, left-to-right composition, arithmetic combinators, and
//! collection operators that treat lists, text, and keyed maps through one
//! interface.
//!
//! ## Overview
//!
//! - **Values**: [`Value`] is the closed set of runtime values every
//!   combinator consumes and produces.
//! - **Functions**: [`Function`] is a callable with an arity known up front.
//! - **Currying**: [`curry`] accepts a function's arguments across any number
//!   of calls and fires once enough have arrived.
//! - **Composition**: [`pipe`] threads a value through functions left to right.
//! - **Collections**: [`collection::map`], [`collection::filter`],
//!   [`collection::fold_left`] and [`collection::fold_right`] dispatch on the
//!   container's [`Shape`].
//! - **Combinators**: [`combinators`] holds the exported, curried function
//!   values (`add`, `mult`, `div`, `negate`, `identity`, `pipe`, `curry`,
//!   `map`, `filter`, `foldl`, `foldr`).
//!
//! ## Feature Flags
//!
//! - `derive`: the [`function!`] and [`curried!`] macros (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` for [`Value`]
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use functional::prelude::*;
//!
//! let add_ten = add().call(&[Value::from(10)]).unwrap();
//! let double = mult().call(&[Value::from(2)]).unwrap();
//! let composed = pipe([
//!     add_ten.as_function().unwrap().clone(),
//!     double.as_function().unwrap().clone(),
//!     negate(),
//! ])
//! .unwrap();
//!
//! // (((5 + 10) * 2) * -1)
//! assert_eq!(composed.call(&[Value::from(5)]), Ok(Value::from(-30)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use functional::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection;
    pub use crate::combinators::{self, add, div, identity, mult, negate};
    pub use crate::error::{ArityError, Error, Result, TypeError};
    pub use crate::function::{Arguments, Curried, Function, Pipeline, curry, pipe};
    pub use crate::value::{Container, Sequence, Shape, Value, classify};

    #[cfg(feature = "derive")]
    pub use crate::{curried, function};
}

pub mod collection;
pub mod combinators;
pub mod error;
pub mod function;
pub mod value;

pub use combinators::{add, div, exports, identity, lookup, mult, negate};
pub use error::{ArityError, Error, Result, TypeError};
pub use function::{Arguments, Body, Curried, Function, Pipeline, curry, pipe};
pub use value::{Container, Sequence, SequenceIter, Shape, Value, classify};

#[cfg(feature = "derive")]
pub use functional_derive::{curried, function};
