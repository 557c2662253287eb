//! The iterative Fibonacci implementation

use crate::error::{check_index, Error};

/// Compute the `n`th Fibonacci number in a single forward pass
///
/// Same contract as [`crate::fibonacci_recursive`] but in linear time and constant space. Indices
/// above [`crate::MAX_INDEX`] wrap around silently.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `n < 1`.
///
/// # Examples
///
/// ```rust
/// use fibonacci::fibonacci_iterative;
///
/// assert_eq!(fibonacci_iterative(20), Ok(6765));
/// ```
pub fn fibonacci_iterative(n: i64) -> Result<i64, Error> {
    check_index(n)?;

    let mut previous = 1i64;
    let mut current = 1i64;
    for _ in 3..=n {
        let next = previous.wrapping_add(current);
        previous = current;
        current = next;
    }

    Ok(current)
}
