//! Test that a function path without an arity produces a compile error.

fn main() {
    let _ = functional::function!(body);
}
