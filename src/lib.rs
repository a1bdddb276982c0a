//! Strand - ordered sequences with interchangeable backing representations.
//!
//! # Quick Start
//!
//! ```
//! use strand::seq::Seq;
//! use strand::seq::array::ArraySeq;
//! use strand::seq::linked::LinkedSeq;
//!
//! // Build the same sequence in both representations
//! let mut array: ArraySeq<i32> = (1..=5).collect();
//! let mut linked: LinkedSeq<i32> = (1..=5).collect();
//!
//! // Move the last two elements to the front
//! array.rotate(2).unwrap();
//! linked.rotate(2).unwrap();
//! assert_eq!(array, [4, 5, 1, 2, 3]);
//!
//! // Carve off the rotated prefix; the receiver keeps the rest
//! let front = array.split_back(2).unwrap();
//! assert_eq!(front, [4, 5]);
//! assert_eq!(array, [1, 2, 3]);
//!
//! // The two representations compare structurally
//! assert_eq!(linked, [4, 5, 1, 2, 3]);
//! ```

pub mod seq;
pub mod sort;
