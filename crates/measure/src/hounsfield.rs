//! Hounsfield units, the radiodensity scale of CT scanning.

use std::fmt;

use thiserror::Error;

use crate::ranged::RangedValue;

/// Error raised for readings outside the scanner encoding range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HounsfieldError {
    /// The requested reading does not fit the 12-bit scanner range.
    #[error("hounsfield value out of range: {value} not in [-1024, 3071]")]
    OutOfRange { value: i32 },
}

/// A CT radiodensity reading in Hounsfield units.
///
/// The Hounsfield scale fixes air at -1000 and distilled water at 0.
/// Medical scanners report integer readings in `[-1024, 3071]` so a
/// reading packs into 12 bits; range enforcement delegates to a
/// [`RangedValue`] over that interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hounsfield {
    reading: RangedValue,
}

impl Hounsfield {
    /// Smallest encodable reading.
    pub const MIN: i32 = -1024;
    /// Largest encodable reading.
    pub const MAX: i32 = 3071;
    /// Radiodensity of air.
    pub const AIR: i32 = -1000;
    /// Radiodensity of distilled water.
    pub const WATER: i32 = 0;

    /// Create a reading of `value` Hounsfield units.
    pub fn new(value: i32) -> Result<Hounsfield, HounsfieldError> {
        let reading = RangedValue::new(Self::MIN as f64, Self::MAX as f64, value as f64)
            .map_err(|_| HounsfieldError::OutOfRange { value })?;
        return Ok(Hounsfield { reading });
    }

    /// The current reading.
    pub fn value(&self) -> i32 {
        return self.reading.value() as i32;
    }

    /// Replace the reading, returning the reading it overwrites.
    pub fn set_value(&mut self, value: i32) -> Result<i32, HounsfieldError> {
        let prev = self
            .reading
            .set_value(value as f64)
            .map_err(|_| HounsfieldError::OutOfRange { value })?;
        return Ok(prev as i32);
    }
}

impl Default for Hounsfield {
    /// The water reading, 0 HU.
    fn default() -> Hounsfield {
        return Hounsfield::new(Self::WATER).unwrap();
    }
}

impl fmt::Display for Hounsfield {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{{{}}}", self.value());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_the_full_encoding_range() {
        assert_eq!(Hounsfield::new(Hounsfield::MIN).unwrap().value(), -1024);
        assert_eq!(Hounsfield::new(Hounsfield::MAX).unwrap().value(), 3071);
        assert_eq!(Hounsfield::new(Hounsfield::AIR).unwrap().value(), -1000);
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert_eq!(
            Hounsfield::new(-1025),
            Err(HounsfieldError::OutOfRange { value: -1025 })
        );
        assert_eq!(
            Hounsfield::new(3072),
            Err(HounsfieldError::OutOfRange { value: 3072 })
        );
    }

    #[test]
    fn set_value_returns_overwritten_reading() {
        let mut hu = Hounsfield::new(40).unwrap();
        assert_eq!(hu.set_value(Hounsfield::AIR), Ok(40));
        assert_eq!(hu.value(), -1000);

        assert_eq!(
            hu.set_value(5000),
            Err(HounsfieldError::OutOfRange { value: 5000 })
        );
        assert_eq!(hu.value(), -1000);
    }

    #[test]
    fn default_is_water() {
        assert_eq!(Hounsfield::default().value(), Hounsfield::WATER);
    }

    #[test]
    fn display_renders_braced_value() {
        assert_eq!(Hounsfield::new(-1000).unwrap().to_string(), "{-1000}");
        assert_eq!(Hounsfield::default().to_string(), "{0}");
    }
}
