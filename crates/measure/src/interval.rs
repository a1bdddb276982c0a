//! Closed intervals of non-NaN floating-point values.

use std::fmt;

use thiserror::Error;

/// Error raised when an interval bound, shift, or ordering constraint is
/// violated. Validation always precedes mutation, so an `Err` means the
/// interval is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum IntervalError {
    /// A bound or shift amount was NaN, or a shift of an infinite bound
    /// by the opposite infinity would have produced one.
    #[error("interval bound or shift is NaN")]
    Nan,
    /// The requested bounds are out of order.
    #[error("minimum above maximum: {min} > {max}")]
    MinAboveMax { min: f64, max: f64 },
}

/// A closed interval `[min, max]`.
///
/// Both bounds are non-NaN and `min <= max` at all times. Infinite bounds
/// are allowed; zero-width intervals (`min == max`) are allowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    min: f64,
    max: f64,
}

impl Interval {
    /// Create the interval `[min, max]`.
    pub fn new(min: f64, max: f64) -> Result<Interval, IntervalError> {
        if min.is_nan() || max.is_nan() {
            return Err(IntervalError::Nan);
        }
        if min > max {
            return Err(IntervalError::MinAboveMax { min, max });
        }
        return Ok(Interval { min, max });
    }

    /// The minimum value of this interval.
    pub fn min(&self) -> f64 {
        return self.min;
    }

    /// The maximum value of this interval.
    pub fn max(&self) -> f64 {
        return self.max;
    }

    /// The width of this interval, `max - min`. Widths too large to
    /// represent land on `+∞` by IEEE arithmetic.
    pub fn width(&self) -> f64 {
        return self.max - self.min;
    }

    /// Lower the interval's floor (or raise it, up to the current
    /// maximum).
    pub fn set_min(&mut self, min: f64) -> Result<(), IntervalError> {
        if min.is_nan() {
            return Err(IntervalError::Nan);
        }
        if min > self.max {
            return Err(IntervalError::MinAboveMax { min, max: self.max });
        }
        self.min = min;
        return Ok(());
    }

    /// Raise the interval's ceiling (or lower it, down to the current
    /// minimum).
    pub fn set_max(&mut self, max: f64) -> Result<(), IntervalError> {
        if max.is_nan() {
            return Err(IntervalError::Nan);
        }
        if max < self.min {
            return Err(IntervalError::MinAboveMax { min: self.min, max });
        }
        self.max = max;
        return Ok(());
    }

    /// Translate both bounds by `delta`.
    ///
    /// Shifting an infinite bound by the opposite infinity would produce a
    /// NaN bound, so that shift is rejected whole; both bounds move or
    /// neither does.
    pub fn shift_by(&mut self, delta: f64) -> Result<(), IntervalError> {
        if delta.is_nan() {
            return Err(IntervalError::Nan);
        }
        let min = self.min + delta;
        let max = self.max + delta;
        if min.is_nan() || max.is_nan() {
            return Err(IntervalError::Nan);
        }
        self.min = min;
        self.max = max;
        return Ok(());
    }

    /// `true` iff `min <= val <= max`. NaN is never inside an interval.
    pub fn contains(&self, val: f64) -> bool {
        return self.min <= val && val <= self.max;
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "[{}, {}]", self.min, self.max);
    }
}
