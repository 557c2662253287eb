//! Helpers shared by the fibonacci benchmarks

use fibonacci::Method;

/// Parse the benchmarked [`Method`] from its name
///
/// Used as benchmark `setup` so the parsing is not attributed to the benchmarked function.
pub fn setup_method(name: &str) -> Method {
    name.parse().unwrap_or_else(|_| panic!("Unknown fibonacci method: '{name}'"))
}
