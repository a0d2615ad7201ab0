//! Test that a destructuring closure parameter produces a compile error.

fn main() {
    let _ = functional::function!(|(left, right)| Ok(left));
}
