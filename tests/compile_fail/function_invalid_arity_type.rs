//! Test that passing a non-integer literal for arity produces a compile error.

fn main() {
    let _ = functional::function!(body, "two");
}
