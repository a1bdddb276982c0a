//! Floating-point values pinned inside a fixed interval.

use std::fmt;
use std::mem;

use thiserror::Error;

use crate::interval::{Interval, IntervalError};

/// Error raised when constructing or updating a ranged value.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RangedValueError {
    /// The requested interval itself was invalid.
    #[error(transparent)]
    Interval(#[from] IntervalError),
    /// The requested value falls outside the interval. NaN is outside
    /// every interval.
    #[error("value out of interval bounds: {value} not in [{min}, {max}]")]
    OutOfInterval { value: f64, min: f64, max: f64 },
}

/// An `f64` guaranteed to lie within an interval fixed at construction.
///
/// The value can change; the interval cannot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangedValue {
    interval: Interval,
    value: f64,
}

impl RangedValue {
    /// Create a value constrained to `[min, max]`.
    pub fn new(min: f64, max: f64, value: f64) -> Result<RangedValue, RangedValueError> {
        let interval = Interval::new(min, max)?;
        if !interval.contains(value) {
            return Err(RangedValueError::OutOfInterval { value, min, max });
        }
        return Ok(RangedValue { interval, value });
    }

    /// The minimum value this value can take.
    pub fn min(&self) -> f64 {
        return self.interval.min();
    }

    /// The maximum value this value can take.
    pub fn max(&self) -> f64 {
        return self.interval.max();
    }

    /// The interval this value is constrained to, by copy.
    pub fn interval(&self) -> Interval {
        return self.interval;
    }

    /// The current value.
    pub fn value(&self) -> f64 {
        return self.value;
    }

    /// Replace the value, returning the value it displaces.
    pub fn set_value(&mut self, value: f64) -> Result<f64, RangedValueError> {
        if !self.interval.contains(value) {
            return Err(RangedValueError::OutOfInterval {
                value,
                min: self.interval.min(),
                max: self.interval.max(),
            });
        }
        return Ok(mem::replace(&mut self.value, value));
    }
}

impl fmt::Display for RangedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(
            f,
            "[{} : {} : {}]",
            self.interval.min(),
            self.value,
            self.interval.max()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_validates_interval_and_containment() {
        assert!(RangedValue::new(0.0, 10.0, 5.0).is_ok());
        assert!(RangedValue::new(0.0, 10.0, 0.0).is_ok());
        assert!(RangedValue::new(0.0, 10.0, 10.0).is_ok());

        assert_eq!(
            RangedValue::new(10.0, 0.0, 5.0),
            Err(RangedValueError::Interval(IntervalError::MinAboveMax {
                min: 10.0,
                max: 0.0,
            }))
        );
        assert_eq!(
            RangedValue::new(f64::NAN, 0.0, 0.0),
            Err(RangedValueError::Interval(IntervalError::Nan))
        );
        assert_eq!(
            RangedValue::new(0.0, 10.0, 10.5),
            Err(RangedValueError::OutOfInterval {
                value: 10.5,
                min: 0.0,
                max: 10.0,
            })
        );
    }

    #[test]
    fn set_value_returns_previous() {
        let mut rv = RangedValue::new(0.0, 10.0, 5.0).unwrap();
        assert_eq!(rv.set_value(7.5), Ok(5.0));
        assert_eq!(rv.value(), 7.5);
    }

    #[test]
    fn set_value_rejects_out_of_interval() {
        let mut rv = RangedValue::new(0.0, 10.0, 5.0).unwrap();
        assert_eq!(
            rv.set_value(-1.0),
            Err(RangedValueError::OutOfInterval {
                value: -1.0,
                min: 0.0,
                max: 10.0,
            })
        );
        assert!(rv.set_value(f64::NAN).is_err());
        assert_eq!(rv.value(), 5.0);
    }

    #[test]
    fn interval_is_a_copy() {
        let rv = RangedValue::new(0.0, 10.0, 5.0).unwrap();
        let mut iv = rv.interval();
        iv.set_max(4.0).unwrap();
        // The constraint on the ranged value is unaffected.
        assert_eq!(rv.max(), 10.0);
    }

    #[test]
    fn display_renders_min_value_max() {
        let rv = RangedValue::new(0.0, 10.0, 2.5).unwrap();
        assert_eq!(rv.to_string(), "[0 : 2.5 : 10]");
    }
}
