//! Integration tests for the function! and curried! macros.

use functional::prelude::*;
use functional::{curried, function};
use rstest::rstest;

// =============================================================================
// function!
// =============================================================================

mod function_macro {
    use super::*;

    #[rstest]
    fn arity_comes_from_the_closure_parameters() {
        assert_eq!(function!(|| Ok(Value::Null)).arity(), 0);
        assert_eq!(function!(|value| Ok(value)).arity(), 1);
        assert_eq!(function!(|_, _, third| Ok(third)).arity(), 3);
    }

    #[rstest]
    fn parameters_bind_arguments_by_position() {
        let swap = function!(|left, right| Ok(Value::List(vec![right, left])));
        assert_eq!(
            swap.call(&[Value::from(1), Value::from(2)]),
            Ok(Value::List(vec![Value::from(2), Value::from(1)]))
        );
    }

    #[rstest]
    fn missing_arguments_bind_null() {
        let second = function!(|_, second| Ok(second));
        assert_eq!(second.call(&[Value::from(1)]), Ok(Value::Null));
    }

    #[rstest]
    fn typed_and_mutable_parameters() {
        let append = function!(|mut list: Value, element: Value| {
            if let Value::List(elements) = &mut list {
                elements.push(element);
            }
            Ok(list)
        });
        assert_eq!(
            append.call(&[Value::List(vec![Value::from(1)]), Value::from(2)]),
            Ok(Value::List(vec![Value::from(1), Value::from(2)]))
        );
    }

    #[rstest]
    fn body_errors_propagate_with_question_mark() {
        let halve = function!(|value| Ok(Value::from(value.expect_number("halve")? / 2.0)));
        assert_eq!(halve.call(&[Value::from(9)]), Ok(Value::from(4.5)));
        assert!(halve.call(&[Value::from("x")]).unwrap_err().is_type_error());
    }

    #[rstest]
    fn captured_environment_moves_into_the_body() {
        let suffix = String::from("!");
        let shout = function!(|text| {
            let text = text.as_text().unwrap_or_default();
            Ok(Value::from(format!("{text}{suffix}")))
        });
        assert_eq!(shout.call(&[Value::from("hi")]), Ok(Value::from("hi!")));
    }

    fn count(arguments: Arguments<'_>) -> Result<Value> {
        Ok(Value::from(u32::try_from(arguments.len()).unwrap_or(u32::MAX)))
    }

    #[rstest]
    fn path_form_uses_the_given_arity() {
        let counter = function!(count, 3);
        assert_eq!(counter.arity(), 3);
        assert_eq!(counter.call(&[Value::Null]), Ok(Value::from(1)));
    }

    #[rstest]
    fn built_functions_work_with_collection_operators() {
        let square = function!(|value| {
            let number = value.expect_number("square")?;
            Ok(Value::from(number * number))
        });
        let list: Value = [1, 2, 3].into_iter().map(Value::from).collect();
        assert_eq!(
            collection::map(&square, &list),
            Ok([1, 4, 9].into_iter().map(Value::from).collect())
        );
    }
}

// =============================================================================
// curried!
// =============================================================================

mod curried_macro {
    use super::*;

    #[rstest]
    fn accepts_arguments_across_calls() {
        let triple = curried!(|a, b, c| Ok(Value::List(vec![a, b, c])));
        let partial = triple.call(&[Value::from(1)]).unwrap();
        let result = partial
            .as_function()
            .unwrap()
            .call(&[Value::from(2), Value::from(3)]);
        assert_eq!(
            result,
            Ok(Value::List(vec![Value::from(1), Value::from(2), Value::from(3)]))
        );
    }

    #[rstest]
    fn rejects_zero_arguments() {
        let pair = curried!(|a, b| Ok(Value::List(vec![a, b])));
        assert!(pair.call(&[]).unwrap_err().is_arity_error());
    }

    #[rstest]
    fn works_as_a_fold_reducer() {
        let subtract = curried!(|left, right| {
            Ok(Value::from(
                left.expect_number("subtract")? - right.expect_number("subtract")?,
            ))
        });
        let list: Value = [1, 2, 3].into_iter().map(Value::from).collect();

        // ((10 - 1) - 2) - 3
        let left = collection::fold_left(&subtract, Value::from(10), &list);
        // 1 - (2 - (3 - 10))
        let right = collection::fold_right(&subtract, Value::from(10), &list);

        assert_eq!(left, Ok(Value::from(4)));
        assert_eq!(right, Ok(Value::from(-8)));
    }
}
