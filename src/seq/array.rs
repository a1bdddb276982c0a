//! Contiguous array-backed sequence.
//!
//! Elements sit in one buffer in index order, so indexed access is O(1) and
//! iteration is a slice walk. The buffer never shrinks and is grown by an
//! explicit policy rather than whatever `Vec` would do on its own:
//!
//! - push: amortized O(1); a full buffer doubles before the append
//! - get/set: O(1)
//! - reverse: O(n), in place, no allocation
//! - split_back: O(n), one pass; the receiver keeps its buffer
//! - rotate: one split plus a linear append, never a re-sort

use std::fmt;
use std::mem;

use super::linked::LinkedSeq;
use super::{Seq, SeqError};

/// Capacity given to a sequence created with `new`.
const DEFAULT_CAPACITY: usize = 16;
/// Factor applied to the capacity when an append finds the buffer full.
const GROWTH_FACTOR: usize = 2;

/// A contiguous, array-backed sequence.
#[derive(Clone)]
pub struct ArraySeq<T> {
    /// Elements in index order. `buf.len()` is the logical length; spare
    /// capacity is managed by `grow`, not left to `Vec`'s own policy.
    buf: Vec<T>,
}

impl<T> ArraySeq<T> {
    /// Create an empty sequence with the default capacity.
    pub fn new() -> ArraySeq<T> {
        return ArraySeq {
            buf: Vec::with_capacity(DEFAULT_CAPACITY),
        };
    }

    /// Create an empty sequence with room for at least `cap` elements.
    pub fn with_capacity(cap: usize) -> ArraySeq<T> {
        return ArraySeq {
            buf: Vec::with_capacity(cap),
        };
    }

    /// Current capacity of the backing buffer.
    pub fn capacity(&self) -> usize {
        return self.buf.capacity();
    }

    /// Double the capacity (or establish the default on a zero-capacity
    /// buffer) ahead of an append that would overflow.
    fn grow(&mut self) {
        let cap = self.buf.capacity();
        let target = if cap == 0 {
            DEFAULT_CAPACITY
        } else {
            cap * GROWTH_FACTOR
        };
        self.buf.reserve_exact(target - self.buf.len());
    }

    fn check_index(&self, index: usize) -> Result<(), SeqError> {
        if index >= self.buf.len() {
            return Err(SeqError::IndexOutOfBounds {
                index,
                len: self.buf.len(),
            });
        }
        return Ok(());
    }
}

impl<T> Seq<T> for ArraySeq<T> {
    fn len(&self) -> usize {
        return self.buf.len();
    }

    fn push(&mut self, elem: T) {
        if self.buf.len() == self.buf.capacity() {
            self.grow();
        }
        self.buf.push(elem);
    }

    fn get(&self, index: usize) -> Result<&T, SeqError> {
        self.check_index(index)?;
        return Ok(&self.buf[index]);
    }

    fn set(&mut self, index: usize, elem: T) -> Result<T, SeqError> {
        self.check_index(index)?;
        return Ok(mem::replace(&mut self.buf[index], elem));
    }

    fn reverse(&mut self) {
        self.buf.reverse();
    }

    fn split_back(&mut self, index: usize) -> Result<ArraySeq<T>, SeqError> {
        if index > self.buf.len() {
            return Err(SeqError::IndexOutOfBounds {
                index,
                len: self.buf.len(),
            });
        }
        // Draining shifts the retained suffix down within the existing
        // buffer, so the receiver keeps its capacity.
        let front: Vec<T> = self.buf.drain(..index).collect();
        return Ok(ArraySeq { buf: front });
    }

    fn rotate(&mut self, m: usize) -> Result<(), SeqError> {
        if m > self.buf.len() {
            return Err(SeqError::RotationOutOfRange {
                m,
                len: self.buf.len(),
            });
        }
        if m == 0 || m == self.buf.len() {
            return Ok(());
        }
        // One split at len - m leaves the trailing m elements in place at
        // the front; the drained prefix is appended back behind them. The
        // receiver's capacity already covers the total, so the extend never
        // reallocates.
        let front = self.split_back(self.buf.len() - m)?;
        self.buf.extend(front.buf);
        return Ok(());
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        return self.buf.iter();
    }
}

impl<T> Default for ArraySeq<T> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T: fmt::Debug> fmt::Debug for ArraySeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.buf.iter()).finish();
    }
}

impl<T: fmt::Display> fmt::Display for ArraySeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, elem) in self.buf.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{elem}")?;
        }
        return write!(f, "]");
    }
}

impl<T: PartialEq> PartialEq for ArraySeq<T> {
    fn eq(&self, other: &ArraySeq<T>) -> bool {
        return self.buf == other.buf;
    }
}

impl<T: Eq> Eq for ArraySeq<T> {}

impl<T: PartialEq> PartialEq<LinkedSeq<T>> for ArraySeq<T> {
    fn eq(&self, other: &LinkedSeq<T>) -> bool {
        return self.buf.len() == other.len() && self.buf.iter().eq(other);
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for ArraySeq<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        return self.buf[..] == other[..];
    }
}

impl<T> From<Vec<T>> for ArraySeq<T> {
    fn from(buf: Vec<T>) -> ArraySeq<T> {
        return ArraySeq { buf };
    }
}

impl<T, const N: usize> From<[T; N]> for ArraySeq<T> {
    fn from(elems: [T; N]) -> ArraySeq<T> {
        return ArraySeq {
            buf: Vec::from(elems),
        };
    }
}

impl<T> FromIterator<T> for ArraySeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> ArraySeq<T> {
        return ArraySeq {
            buf: Vec::from_iter(iter),
        };
    }
}

impl<T> Extend<T> for ArraySeq<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Route through push so the growth policy stays in charge.
        for elem in iter {
            self.push(elem);
        }
    }
}

impl<T> IntoIterator for ArraySeq<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        return self.buf.into_iter();
    }
}

impl<'a, T> IntoIterator for &'a ArraySeq<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        return self.buf.iter();
    }
}
