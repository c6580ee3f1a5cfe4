//! MSD radix sorting with a small array record store around it.
//!
//! The [`radix`] module is the core: a most-significant-digit-first bucket
//! sort over a configurable radix. The [`input`], [`store`] and [`bench`]
//! modules are the plumbing that feeds it: textual array acquisition, a flat
//! persisted record store of original/sorted pairs, and a wall-clock timing
//! harness for bulk store operations.

use std::time::Duration;

pub mod bench;
pub mod input;
pub mod radix;
pub mod store;

/// Marks an instrumentation scope. Compiles to nothing unless the `profile`
/// feature is enabled.
#[macro_export]
macro_rules! scope {
    ($name:expr) => {
        #[cfg(feature = "profile")]
        profiling::scope!($name);
    };
}

/// A wrapper struct for `std::time::Duration` to provide pretty-printing of durations.
///
/// Seconds and milliseconds are printed with two decimal places, anything
/// below a millisecond as whole microseconds.
#[doc(hidden)]
pub struct PrettyDuration(pub Duration);

impl std::fmt::Display for PrettyDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let d = self.0;
        if d.as_secs() > 0 {
            write!(f, "{:.2}s", d.as_secs_f64())
        } else if d.subsec_millis() > 0 {
            write!(f, "{:.2}ms", d.as_nanos() as f64 / 1_000_000.0)
        } else {
            write!(f, "{}µs", d.as_micros())
        }
    }
}
