//! Ordered sequence containers.
//!
//! The `Seq` trait defines one capability contract (length, indexed
//! access, append, in-place reverse, split, rotate) with two backing
//! representations chosen at construction time:
//!
//! | Implementation | Storage | Strength |
//! |----------------|---------|----------|
//! | `ArraySeq` | contiguous buffer, doubling growth | O(1) indexed access |
//! | `LinkedSeq` | node slab with index links | rotate by link surgery |
//!
//! Both representations satisfy the same laws, which the conformance and
//! property suites check against each other and against a `Vec` model:
//!
//! - `reverse` is an involution
//! - `split_back(k)` then concatenation reconstructs the original order
//! - `rotate(m)` followed by `rotate(len - m)` is the identity

use thiserror::Error;

pub mod array;
pub mod linked;

/// Error raised when an operation is given an index or magnitude outside
/// the valid range for the sequence it is applied to.
///
/// Every operation validates before it mutates, so an `Err` means the
/// sequence is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeqError {
    /// An index outside `[0, len)` for `get`/`set`, or `[0, len]` for
    /// `split_back`.
    #[error("index out of bounds: {index}, size: {len}")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The sequence length at the time of the call.
        len: usize,
    },
    /// A rotation magnitude greater than the sequence length.
    #[error("rotation out of range: {m}, size: {len}")]
    RotationOutOfRange {
        /// The requested magnitude.
        m: usize,
        /// The sequence length at the time of the call.
        len: usize,
    },
}

/// An ordered, mutable, zero-indexed sequence of elements.
///
/// Implementors must provide:
/// - Amortized O(1) append
/// - Bounds-checked indexed access
/// - In-place reversal in a single pass with no extra allocation
/// - `split_back`, carving off the prefix in one traversal
/// - `rotate`, moving the trailing elements to the front
///
/// Validation always precedes mutation: a failed operation leaves the
/// sequence exactly as it was.
pub trait Seq<T>: Default {
    /// Number of elements in the sequence.
    fn len(&self) -> usize;

    /// Check if the sequence is empty.
    fn is_empty(&self) -> bool {
        return self.len() == 0;
    }

    /// Append an element to the end of the sequence.
    ///
    /// Amortized O(1): the array form grows its buffer geometrically, the
    /// linked form appends one slab node.
    fn push(&mut self, elem: T);

    /// Borrow the element at `index`.
    fn get(&self, index: usize) -> Result<&T, SeqError>;

    /// Replace the element at `index`, returning the element previously
    /// stored there.
    fn set(&mut self, index: usize, elem: T) -> Result<T, SeqError>;

    /// Reverse the order of the elements in place.
    fn reverse(&mut self);

    /// Split off the prefix `[0, index)` as a new sequence of the same
    /// representation, retaining the suffix `[index, len)` in the receiver.
    ///
    /// `split_back(0)` returns an empty sequence and leaves the receiver's
    /// contents alone; `split_back(len())` moves everything into the
    /// returned sequence. Runs in O(n) with a single traversal.
    fn split_back(&mut self, index: usize) -> Result<Self, SeqError>
    where
        Self: Sized;

    /// Rotate the sequence so its last `m` elements become the first `m`,
    /// preserving relative order within both segments.
    ///
    /// `rotate(0)` and `rotate(len())` leave the sequence unchanged.
    fn rotate(&mut self, m: usize) -> Result<(), SeqError>;

    /// Iterate over the elements in index order.
    ///
    /// Each call starts a fresh iterator. The iterators are fused:
    /// advancing past the end keeps returning `None`.
    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a;

    /// Collect the elements into a `Vec` in index order.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        return self.iter().cloned().collect();
    }
}
