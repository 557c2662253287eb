//! The module containing the crate main [`Error`] type

use std::fmt::Display;

/// The main error type of this crate
#[derive(Debug, PartialEq, Clone, Copy, Eq)]
pub enum Error {
    /// The requested index is outside of the 1-based Fibonacci sequence
    ///
    /// `InvalidArgument(index)`
    InvalidArgument(i64),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(index) => {
                write!(f, "Invalid argument: index must be >= 1 but was '{index}'")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Return [`Error::InvalidArgument`] if `n` is not a valid 1-based index
pub(crate) fn check_index(n: i64) -> Result<(), Error> {
    if n < 1 {
        log::debug!("Rejecting fibonacci index {n}");
        return Err(Error::InvalidArgument(n));
    }
    Ok(())
}
