//! Declarative time windows over an externally supplied clock.
//!
//! A [`Timeline`] is rebuilt from scratch every frame with the current time
//! sample, then a chain of [`span`](Timeline::span),
//! [`repeat`](Timeline::repeat), [`repeat_n`](Timeline::repeat_n) and
//! [`once`](Timeline::once) calls lays out consecutive windows along the time
//! axis. Only the callbacks whose window contains the sample run.
//!
//! ```rust
//! use timeline::Timeline;
//!
//! let mut fired = Vec::new();
//! for t in 0..6 {
//!     Timeline::new(t)
//!         .span(3, |tl| fired.push(("a", tl.elapsed())))
//!         .span(3, |tl| fired.push(("b", tl.elapsed())));
//! }
//! assert_eq!(
//!     fired,
//!     [("a", 0), ("a", 1), ("a", 2), ("b", 0), ("b", 1), ("b", 2)]
//! );
//! ```
reexport!(testing, test);
reexport!(unit);
reexport!(timeline);
reexport!(error);
reexport!(config);

#[cfg(test)]
mod timeline_tests;

#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn};

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}
