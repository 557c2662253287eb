//! The naive recursive Fibonacci implementation

use crate::error::{check_index, Error};

/// Compute the `n`th Fibonacci number by direct recursion
///
/// The sequence is 1-based with `F(1) = F(2) = 1`. Each step spawns two recursive calls and no
/// intermediate results are cached, so the running time grows with `φⁿ` and the stack depth with
/// `n`. Use [`crate::fibonacci_iterative`] if you need the value and not the call tree.
///
/// Indices above [`crate::MAX_INDEX`] wrap around silently.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `n < 1`.
///
/// # Examples
///
/// ```rust
/// use fibonacci::fibonacci_recursive;
///
/// assert_eq!(fibonacci_recursive(10), Ok(55));
/// assert!(fibonacci_recursive(0).is_err());
/// ```
pub fn fibonacci_recursive(n: i64) -> Result<i64, Error> {
    check_index(n)?;
    Ok(recurse(n))
}

fn recurse(n: i64) -> i64 {
    match n {
        1 | 2 => 1,
        n => recurse(n - 1).wrapping_add(recurse(n - 2)),
    }
}
