//! The exported combinator set.
//!
//! Every combinator is a statically defined, immutable [`Function`] value,
//! created once per process on first use. The accessor functions below hand
//! out cheap clones that share the same body, so `add() == add()`.
//!
//! | name | arity | curried | behavior |
//! |---|---|---|---|
//! | `add` | 2 | yes | sum (or text concatenation) |
//! | `mult` | 2 | yes | product |
//! | `div` | 2 | yes | IEEE-754 quotient |
//! | `negate` | 1 | no | arithmetic negation |
//! | `identity` | 1 | no | returns its argument |
//! | `pipe` | variadic | no | left-to-right composition |
//! | `curry` | 1 | no | curried form of a function |
//! | `map` | 2 | yes | [`collection::map`] |
//! | `filter` | 2 | yes | [`collection::filter`] |
//! | `foldl` | 3 | yes | [`collection::fold_left`] |
//! | `foldr` | 3 | yes | [`collection::fold_right`] |
//!
//! # Examples
//!
//! ```rust
//! use functional::{Value, combinators};
//!
//! let add_ten = combinators::add().call(&[Value::from(10)]).unwrap();
//! let list = Value::from(vec![Value::from(1), Value::from(2), Value::from(3)]);
//! let result = combinators::map()
//!     .call(&[add_ten, list])
//!     .unwrap();
//! assert_eq!(
//!     result,
//!     Value::from(vec![Value::from(11), Value::from(12), Value::from(13)])
//! );
//! ```

pub mod arithmetic;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::collection;
use crate::function::{self, Function};
use crate::value::Value;

static ADD: LazyLock<Function> = LazyLock::new(|| {
    function::curry(&Function::named("add", 2, |arguments| {
        arithmetic::sum(arguments.get(0), arguments.get(1))
    }))
});

static MULT: LazyLock<Function> = LazyLock::new(|| {
    function::curry(&Function::named("mult", 2, |arguments| {
        arithmetic::product(arguments.get(0), arguments.get(1))
    }))
});

static DIV: LazyLock<Function> = LazyLock::new(|| {
    function::curry(&Function::named("div", 2, |arguments| {
        arithmetic::quotient(arguments.get(0), arguments.get(1))
    }))
});

static NEGATE: LazyLock<Function> = LazyLock::new(|| {
    Function::named("negate", 1, |arguments| {
        arithmetic::negation(arguments.get(0))
    })
});

static IDENTITY: LazyLock<Function> =
    LazyLock::new(|| Function::named("identity", 1, |arguments| Ok(arguments.get(0).clone())));

static PIPE: LazyLock<Function> = LazyLock::new(|| {
    Function::named("pipe", 1, |arguments| {
        let stages = arguments
            .iter()
            .map(|argument| argument.expect_function("pipe").cloned())
            .collect::<crate::Result<Vec<_>>>()?;
        function::pipe(stages).map(Value::Function)
    })
});

static CURRY: LazyLock<Function> = LazyLock::new(|| {
    Function::named("curry", 1, |arguments| {
        let target = arguments.get(0).expect_function("curry")?;
        Ok(Value::Function(function::curry(target)))
    })
});

static MAP: LazyLock<Function> = LazyLock::new(|| {
    function::curry(&Function::named("map", 2, |arguments| {
        let mapper = arguments.get(0).expect_function("map")?;
        collection::map(mapper, arguments.get(1))
    }))
});

static FILTER: LazyLock<Function> = LazyLock::new(|| {
    function::curry(&Function::named("filter", 2, |arguments| {
        let predicate = arguments.get(0).expect_function("filter")?;
        collection::filter(predicate, arguments.get(1))
    }))
});

static FOLDL: LazyLock<Function> = LazyLock::new(|| {
    function::curry(&Function::named("foldl", 3, |arguments| {
        let reducer = arguments.get(0).expect_function("foldl")?;
        collection::fold_left(reducer, arguments.get(1).clone(), arguments.get(2))
    }))
});

static FOLDR: LazyLock<Function> = LazyLock::new(|| {
    function::curry(&Function::named("foldr", 3, |arguments| {
        let reducer = arguments.get(0).expect_function("foldr")?;
        collection::fold_right(reducer, arguments.get(1).clone(), arguments.get(2))
    }))
});

/// Curried addition: `add(x)(y) == x + y`.
#[must_use]
pub fn add() -> Function {
    ADD.clone()
}

/// Curried multiplication: `mult(x)(y) == x * y`.
#[must_use]
pub fn mult() -> Function {
    MULT.clone()
}

/// Curried division: `div(x)(y) == x / y`.
#[must_use]
pub fn div() -> Function {
    DIV.clone()
}

/// Arithmetic negation.
#[must_use]
pub fn negate() -> Function {
    NEGATE.clone()
}

/// Returns its argument unchanged.
#[must_use]
pub fn identity() -> Function {
    IDENTITY.clone()
}

/// Variadic left-to-right composition. Returns the composed function as a value.
#[must_use]
pub fn pipe() -> Function {
    PIPE.clone()
}

/// Returns the curried form of its function argument.
#[must_use]
pub fn curry() -> Function {
    CURRY.clone()
}

/// Curried [`collection::map`]: `map(f)(xs)`.
#[must_use]
pub fn map() -> Function {
    MAP.clone()
}

/// Curried [`collection::filter`]: `filter(f)(xs)`.
#[must_use]
pub fn filter() -> Function {
    FILTER.clone()
}

/// Curried [`collection::fold_left`]: `foldl(f)(acc)(xs)`.
#[must_use]
pub fn foldl() -> Function {
    FOLDL.clone()
}

/// Curried [`collection::fold_right`]: `foldr(f)(acc)(xs)`.
#[must_use]
pub fn foldr() -> Function {
    FOLDR.clone()
}

const EXPORTS: [(&str, fn() -> Function); 11] = [
    ("add", add),
    ("mult", mult),
    ("div", div),
    ("negate", negate),
    ("identity", identity),
    ("pipe", pipe),
    ("curry", curry),
    ("map", map),
    ("filter", filter),
    ("foldl", foldl),
    ("foldr", foldr),
];

/// Returns the full export table, keyed by name.
///
/// # Examples
///
/// ```rust
/// use functional::combinators;
///
/// let table = combinators::exports();
/// assert_eq!(table.len(), 11);
/// assert_eq!(table["foldr"].arity(), 3);
/// ```
#[must_use]
pub fn exports() -> BTreeMap<&'static str, Function> {
    EXPORTS
        .iter()
        .map(|(name, accessor)| (*name, accessor()))
        .collect()
}

/// Looks up one export by name.
#[must_use]
pub fn lookup(name: &str) -> Option<Function> {
    EXPORTS
        .iter()
        .find(|(export, _)| *export == name)
        .map(|(_, accessor)| accessor())
}
