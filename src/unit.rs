//! Signed integer time units.
//!
//! A timeline only needs a handful of operations from its clock type: the
//! four arithmetic operators, ordering, a zero, and lossy conversions to
//! `f64` and to/from the plain `i64` used for iteration indices and counts.
//! [`Int`] bundles them and is implemented for every primitive signed integer.
use std::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::{Add, Div, Mul, Sub},
};

/// A signed integer usable as a timeline's time unit (frames, ticks, ms...).
pub trait Int:
    Copy
    + Ord
    + Hash
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    const ZERO: Self;

    /// Converts to `f64`, rounding to the nearest representable value.
    fn to_f64(self) -> f64;

    /// Converts to an iteration index. Truncates when `Self` is wider than `i64`.
    fn to_index(self) -> i64;

    /// Converts an iteration index or count. Truncates when `Self` is narrower
    /// than `i64`.
    fn from_index(index: i64) -> Self;
}

macro_rules! impl_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Int for $ty {
                const ZERO: Self = 0;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn to_index(self) -> i64 {
                    self as i64
                }

                #[inline]
                fn from_index(index: i64) -> Self {
                    index as $ty
                }
            }
        )*
    };
}

impl_int!(i8, i16, i32, i64, i128, isize);
