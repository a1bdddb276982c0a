//! Bounded scalar values, intervals, and polynomials.
//!
//! Small, self-contained numeric types, each with a validating constructor
//! that establishes an invariant the rest of the API leans on:
//!
//! | Type | Invariant |
//! |------|-----------|
//! | `Interval` | non-NaN bounds with `min <= max` |
//! | `RangedValue` | value inside a fixed `Interval` |
//! | `Hounsfield` | integer reading in `[-1024, 3071]` |
//! | `Polynomial` | nonzero leading coefficient (except the zero polynomial) |
//!
//! Operations validate before they mutate, so an `Err` always leaves the
//! value unchanged.
//!
//! # Example
//!
//! ```
//! use measure::hounsfield::Hounsfield;
//! use measure::poly::Polynomial;
//!
//! let mut reading = Hounsfield::new(Hounsfield::AIR).unwrap();
//! assert_eq!(reading.to_string(), "{-1000}");
//! assert_eq!(reading.set_value(Hounsfield::WATER).unwrap(), -1000);
//!
//! let p = Polynomial::new(vec![1.0, 2.0, 5.0]).unwrap();
//! assert_eq!(p.eval(2.0), 25.0);
//! assert_eq!(p.derivative().to_string(), "2 + 10 x**1");
//! ```

pub mod hounsfield;
pub mod interval;
pub mod poly;
pub mod ranged;
