//! Compute the nth number of the Fibonacci sequence `1, 1, 2, 3, 5, 8, ...`
//!
//! Two interchangeable algorithms are provided which agree on every valid index:
//!
//! - [`fibonacci_recursive`]: the textbook recursion without memoization. It is deliberately
//!   slow (`O(φⁿ)`) and mostly useful as a benchmark subject.
//! - [`fibonacci_iterative`]: a linear single pass over the sequence with constant space.
//!
//! Both take a 1-based index and reject indices below `1` with [`Error::InvalidArgument`].
//!
//! # Numeric range
//!
//! Results are `i64`. [`MAX_INDEX`] is the largest index whose Fibonacci number is representable.
//! Beyond it the additions wrap around in two's complement, in debug and release builds alike,
//! so the returned values are meaningless but deterministic.
//!
//! # Examples
//!
//! ```rust
//! use fibonacci::{fibonacci_iterative, fibonacci_recursive, Method};
//!
//! assert_eq!(fibonacci_recursive(20), fibonacci_iterative(20));
//!
//! let method: Method = "iterative".parse().unwrap();
//! assert_eq!(method.compute(3), Ok(2));
//! ```

#![doc(test(attr(warn(unused))))]

pub mod error;
mod iterative;
mod recursive;

use strum::{Display, EnumIter, EnumString};

pub use error::Error;
pub use iterative::fibonacci_iterative;
pub use recursive::fibonacci_recursive;

/// The largest index whose Fibonacci number fits into an `i64`
pub const MAX_INDEX: i64 = 92;

/// The algorithm used to compute a Fibonacci number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Method {
    /// See [`fibonacci_recursive`]
    Recursive,
    /// See [`fibonacci_iterative`]
    Iterative,
}

impl Method {
    /// Compute the `n`th Fibonacci number with this method
    pub fn compute(self, n: i64) -> Result<i64, Error> {
        log::debug!("Computing fibonacci number {n} with the {self} method");
        match self {
            Self::Recursive => fibonacci_recursive(n),
            Self::Iterative => fibonacci_iterative(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;

    #[rstest]
    #[case::recursive("recursive", Method::Recursive)]
    #[case::iterative("iterative", Method::Iterative)]
    fn test_method_from_str(#[case] name: &str, #[case] expected: Method) {
        assert_eq!(Method::from_str(name), Ok(expected));
        assert_eq!(expected.to_string(), name);
    }

    #[rstest]
    #[case::empty("")]
    #[case::capitalized("Recursive")]
    #[case::unknown("memoized")]
    fn test_method_from_str_when_unknown(#[case] name: &str) {
        assert_eq!(
            Method::from_str(name),
            Err(strum::ParseError::VariantNotFound)
        );
    }

    #[test]
    fn test_method_iter() {
        assert_eq!(
            Method::iter().collect::<Vec<_>>(),
            vec![Method::Recursive, Method::Iterative]
        );
    }

    #[rstest]
    fn test_method_compute(#[values(Method::Recursive, Method::Iterative)] method: Method) {
        assert_eq!(method.compute(10), Ok(55));
        assert_eq!(method.compute(0), Err(Error::InvalidArgument(0)));
    }
}
