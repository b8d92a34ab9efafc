//! The segment cursor and its chainable window operations.
//!
//! Every operation is a pure function of the cursor it is called on: the
//! sample `now` is carried unchanged through the whole chain and each
//! windowing call hands back the seam where the next window begins.
//!
//! Callbacks come in two flavours. The plain methods (`span`, `repeat`,
//! `repeat_n`, `once`) take a single closure. The `*_all` methods take an
//! ordered slice of callbacks, all invoked in slice order with the same
//! derived cursor:
//!
//! ```rust
//! use timeline::Timeline;
//!
//! let (mut a, mut b) = (0, 0.0);
//! Timeline::new(7).span_all(10, &mut [
//!     &mut |tl| a = tl.elapsed(),
//!     &mut |tl| b = tl.ratio(),
//! ]);
//! assert_eq!((a, b), (7, 0.7));
//! ```
use crate::*;
use derive_more::Display;

/// A half-open window `[from, to)` on the time axis, sampled at `now`.
///
/// Created with [`Timeline::new`] once per sample and then chained:
///
/// ```rust
/// use timeline::Timeline;
///
/// let mut ratios = Vec::new();
/// for t in 0..15 {
///     Timeline::new(t)
///         .span(5, |tl| ratios.push(tl.ratio()))
///         .span(10, |tl| ratios.push(tl.ratio()));
/// }
/// assert_eq!(&ratios[..5], &[0.0, 0.2, 0.4, 0.6, 0.8]);
/// assert_eq!(ratios[5], 0.0);
/// assert_eq!(ratios[14], 0.9);
/// ```
///
/// Invariants:
/// - `from <= to` for every cursor produced by the operations below
/// - `now` is identical for every cursor derived from one `new` call
/// - each windowing call returns a cursor whose `from` is the previous `to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
#[display("[{from}, {to}) @ {now}")]
pub struct Timeline<T> {
    from: T,
    to: T,
    now: T,
}

impl<T: Int> Timeline<T> {
    /// A zero-width cursor at the origin, sampled at `now`.
    pub const fn new(now: T) -> Self {
        Self {
            from: T::ZERO,
            to: T::ZERO,
            now,
        }
    }

    /// Inclusive start of the current window.
    pub fn from(&self) -> T {
        self.from
    }

    /// Exclusive end of the current window.
    pub fn to(&self) -> T {
        self.to
    }

    pub fn now(&self) -> T {
        self.now
    }

    /// Time since the window started. Negative when `now` precedes `from`.
    pub fn elapsed(&self) -> T {
        self.now - self.from
    }

    /// [`elapsed`](Self::elapsed) as `f64`.
    pub fn elapsed_f64(&self) -> f64 {
        self.elapsed().to_f64()
    }

    /// Progress through the window, in `[0, 1)` while `now` is inside it.
    ///
    /// A zero-width window yields exactly `0.0`. Values outside the window are
    /// not clamped.
    pub fn ratio(&self) -> f64 {
        let width = self.to - self.from;
        if width == T::ZERO {
            return 0.0;
        }
        self.elapsed().to_f64() / width.to_f64()
    }

    /// Runs `f` when `now` lies in `[from, from + duration)`, then returns the
    /// seam at `from + duration` regardless.
    pub fn span(self, duration: T, f: impl FnOnce(Self)) -> Self {
        let (hit, next) = self.span_window(duration);
        if let Some(window) = hit {
            f(window);
        }
        next
    }

    /// [`span`](Self::span) with any number of callbacks, run in order.
    pub fn span_all(self, duration: T, callbacks: &mut [&mut dyn FnMut(Self)]) -> Self {
        let (hit, next) = self.span_window(duration);
        if let Some(window) = hit {
            for callback in callbacks {
                callback(window);
            }
        }
        next
    }

    /// Advances the seam by `duration` without running anything.
    pub fn skip(self, duration: T) -> Self {
        self.span_window(duration).1
    }

    /// Runs `f` for the period of length `duration` containing `now`, repeating
    /// forever from `from`. `f` receives the zero-based iteration index.
    ///
    /// Nothing runs while `now < from`. This is the end of a chain: an
    /// unbounded repetition has no seam after it.
    ///
    /// # Panics
    ///
    /// Panics on a zero `duration` (integer division by zero). See
    /// [`try_repeat`](Self::try_repeat) for a checked form.
    pub fn repeat(self, duration: T, f: impl FnOnce(i64, Self)) {
        if let Some((index, window)) = self.repeat_window(duration) {
            f(index, window);
        }
    }

    /// [`repeat`](Self::repeat) with any number of callbacks, run in order.
    pub fn repeat_all(self, duration: T, callbacks: &mut [&mut dyn FnMut(i64, Self)]) {
        if let Some((index, window)) = self.repeat_window(duration) {
            for callback in callbacks {
                callback(index, window);
            }
        }
    }

    /// Like [`repeat`](Self::repeat) but limited to `n` periods. Returns the
    /// seam at `from + n * duration` so the chain can continue.
    ///
    /// # Panics
    ///
    /// Panics on a zero `duration`. See [`try_repeat_n`](Self::try_repeat_n).
    pub fn repeat_n(self, duration: T, n: i64, f: impl FnOnce(i64, Self)) -> Self {
        let (hit, next) = self.repeat_n_window(duration, n);
        if let Some((index, window)) = hit {
            f(index, window);
        }
        next
    }

    /// [`repeat_n`](Self::repeat_n) with any number of callbacks, run in order.
    pub fn repeat_n_all(
        self,
        duration: T,
        n: i64,
        callbacks: &mut [&mut dyn FnMut(i64, Self)],
    ) -> Self {
        let (hit, next) = self.repeat_n_window(duration, n);
        if let Some((index, window)) = hit {
            for callback in callbacks {
                callback(index, window);
            }
        }
        next
    }

    /// Runs `f` only when `now == from` exactly, and returns `self` unchanged.
    ///
    /// NOTE: a sample that steps over `from` never fires. Drive the clock in
    /// unit steps when relying on this.
    pub fn once(self, f: impl FnOnce()) -> Self {
        if self.now == self.from {
            trace!("once fired at {}", self.now);
            f();
        }
        self
    }

    /// [`once`](Self::once) with any number of callbacks, run in order.
    pub fn once_all(self, callbacks: &mut [&mut dyn FnMut()]) -> Self {
        if self.now == self.from {
            trace!("once fired at {}", self.now);
            for callback in callbacks {
                callback();
            }
        }
        self
    }

    /// [`repeat`](Self::repeat) that rejects a non-positive `duration` instead
    /// of dividing by it. Nothing runs on error.
    pub fn try_repeat(self, duration: T, f: impl FnOnce(i64, Self)) -> Result {
        Self::check_duration(duration)?;
        self.repeat(duration, f);
        Ok(())
    }

    /// [`repeat_n`](Self::repeat_n) that rejects a non-positive `duration` or a
    /// negative `n`. Nothing runs on error.
    pub fn try_repeat_n(self, duration: T, n: i64, f: impl FnOnce(i64, Self)) -> Result<Self> {
        Self::check_duration(duration)?;
        if n < 0 {
            debug!("Rejecting negative repetition count {n}");
            return Err(Error::NegativeCount(n));
        }
        Ok(self.repeat_n(duration, n, f))
    }

    fn check_duration(duration: T) -> Result {
        if duration <= T::ZERO {
            debug!("Rejecting non-positive duration {duration}");
            return Err(Error::NonPositiveDuration(duration.to_string()));
        }
        Ok(())
    }

    /// Zero-width cursor at `at`, used as the start of the next window.
    fn seam(at: T, now: T) -> Self {
        Self {
            from: at,
            to: at,
            now,
        }
    }

    fn contains_now(&self) -> bool {
        self.from <= self.now && self.now < self.to
    }

    /// The `index`-th period of length `duration` counted from `from`.
    fn period(&self, index: T, duration: T) -> Self {
        let start = self.from + index * duration;
        Self {
            from: start,
            to: start + duration,
            now: self.now,
        }
    }

    fn span_window(self, duration: T) -> (Option<Self>, Self) {
        let end = self.from + duration;
        let window = Self { to: end, ..self };
        let hit = window.contains_now().then(|| {
            trace!("span {window} hit");
            window
        });
        (hit, Self::seam(end, self.now))
    }

    fn repeat_window(self, duration: T) -> Option<(i64, Self)> {
        if self.now < self.from {
            return None;
        }
        let index = self.elapsed() / duration;
        let window = self.period(index, duration);
        trace!("repeat {window} hit, iteration {index}");
        Some((index.to_index(), window))
    }

    fn repeat_n_window(self, duration: T, n: i64) -> (Option<(i64, Self)>, Self) {
        let count = T::from_index(n);
        let index = self.elapsed() / duration;
        let hit = (T::ZERO <= index && index < count).then(|| {
            let window = self.period(index, duration);
            trace!("repeat_n {window} hit, iteration {index} of {n}");
            (index.to_index(), window)
        });
        (hit, Self::seam(self.from + count * duration, self.now))
    }
}
