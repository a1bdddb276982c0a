//! Linked-node sequence over a dense slab.
//!
//! Nodes are stored in a `Vec` and linked by slot index, never by raw
//! pointer.
//! Slot order is allocation order; the logical order lives entirely in the
//! links, so reversal and rotation are link surgery and never move an
//! element. The slab stays dense (`nodes.len()` is the logical length)
//! because nodes are only ever appended, or drained wholesale by
//! `split_back`.
//!
//! - push: amortized O(1), one slab append plus a tail relink
//! - get/set: O(n) walk from the head
//! - reverse: O(n), one pass of link reversal, no allocation
//! - rotate: O(n) walk to the pivot, then constant-count link surgery
//! - split_back: O(n), one chain walk rebuilding both halves

use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use super::array::ArraySeq;
use super::{Seq, SeqError};

/// Slot index into the node slab.
type Link = u32;
/// Sentinel link meaning "no node".
const NONE: Link = u32::MAX;

/// One element and the link to its successor.
#[derive(Clone)]
struct Node<T> {
    elem: T,
    next: Link,
}

/// A singly linked sequence with its nodes in a dense slab.
///
/// Exactly one head link and one tail link exist; the head is `NONE` iff
/// the sequence is empty, the tail node's successor is always `NONE`, and
/// walking `len` links from the head reaches the tail. Each node holds the
/// single link to its successor, so the chain has no cycles and no shared
/// ownership.
#[derive(Clone)]
pub struct LinkedSeq<T> {
    /// Live nodes; slot order is allocation order, not list order.
    nodes: Vec<Node<T>>,
    /// Slot of the first node, or `NONE` when empty.
    head: Link,
    /// Slot of the last node, or `NONE` when empty.
    tail: Link,
}

impl<T> LinkedSeq<T> {
    /// Create an empty sequence.
    pub fn new() -> LinkedSeq<T> {
        return LinkedSeq {
            nodes: Vec::new(),
            head: NONE,
            tail: NONE,
        };
    }

    /// Create an empty sequence with slab room for `cap` nodes.
    pub fn with_capacity(cap: usize) -> LinkedSeq<T> {
        return LinkedSeq {
            nodes: Vec::with_capacity(cap),
            head: NONE,
            tail: NONE,
        };
    }

    /// Walk the chain to the slot holding the node at `index`.
    ///
    /// Assumes `index < len`; callers validate first.
    fn slot_at(&self, index: usize) -> Link {
        let mut slot = self.head;
        for _ in 0..index {
            slot = self.nodes[slot as usize].next;
        }
        return slot;
    }

    fn check_index(&self, index: usize) -> Result<(), SeqError> {
        if index >= self.nodes.len() {
            return Err(SeqError::IndexOutOfBounds {
                index,
                len: self.nodes.len(),
            });
        }
        return Ok(());
    }
}

impl<T> Seq<T> for LinkedSeq<T> {
    fn len(&self) -> usize {
        return self.nodes.len();
    }

    fn push(&mut self, elem: T) {
        assert!(
            self.nodes.len() < NONE as usize,
            "too many nodes (max {})",
            NONE - 1
        );
        let slot = self.nodes.len() as Link;
        self.nodes.push(Node { elem, next: NONE });
        if self.tail == NONE {
            self.head = slot;
        } else {
            self.nodes[self.tail as usize].next = slot;
        }
        self.tail = slot;
    }

    fn get(&self, index: usize) -> Result<&T, SeqError> {
        self.check_index(index)?;
        let slot = self.slot_at(index);
        return Ok(&self.nodes[slot as usize].elem);
    }

    fn set(&mut self, index: usize, elem: T) -> Result<T, SeqError> {
        self.check_index(index)?;
        let slot = self.slot_at(index);
        return Ok(mem::replace(&mut self.nodes[slot as usize].elem, elem));
    }

    fn reverse(&mut self) {
        // Link reversal: point each node at its predecessor in one pass,
        // then swap the ends. Handles the empty chain (both links NONE).
        let mut prev = NONE;
        let mut curr = self.head;
        while curr != NONE {
            let next = self.nodes[curr as usize].next;
            self.nodes[curr as usize].next = prev;
            prev = curr;
            curr = next;
        }
        self.tail = self.head;
        self.head = prev;
    }

    fn split_back(&mut self, index: usize) -> Result<LinkedSeq<T>, SeqError> {
        let len = self.nodes.len();
        if index > len {
            return Err(SeqError::IndexOutOfBounds { index, len });
        }
        if index == 0 {
            return Ok(LinkedSeq::new());
        }
        if index == len {
            // The whole chain moves out; the receiver is left empty.
            return Ok(mem::take(self));
        }
        // One walk over the old chain, moving each element into whichever
        // half owns it. Both halves get exact-sized slabs up front.
        let mut front = LinkedSeq::with_capacity(index);
        let mut back = LinkedSeq::with_capacity(len - index);
        for (i, elem) in mem::take(self).into_iter().enumerate() {
            if i < index {
                front.push(elem);
            } else {
                back.push(elem);
            }
        }
        *self = back;
        return Ok(front);
    }

    fn rotate(&mut self, m: usize) -> Result<(), SeqError> {
        let len = self.nodes.len();
        if m > len {
            return Err(SeqError::RotationOutOfRange { m, len });
        }
        if m == 0 || m == len {
            return Ok(());
        }
        // The node at len - m - 1 becomes the new tail; the old tail links
        // around to the old head. No element moves.
        let pivot = self.slot_at(len - m - 1);
        self.nodes[self.tail as usize].next = self.head;
        self.head = self.nodes[pivot as usize].next;
        self.nodes[pivot as usize].next = NONE;
        self.tail = pivot;
        return Ok(());
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        return self.into_iter();
    }
}

impl<T> Default for LinkedSeq<T> {
    fn default() -> Self {
        return Self::new();
    }
}

/// Borrowing iterator over the elements in chain order.
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    next: Link,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.next == NONE {
            return None;
        }
        let node = &self.nodes[self.next as usize];
        self.next = node.next;
        self.remaining -= 1;
        return Some(&node.elem);
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return (self.remaining, Some(self.remaining));
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator, draining the slab in chain order.
pub struct IntoIter<T> {
    /// Slab slots; the walk takes each exactly once.
    slots: Vec<Option<Node<T>>>,
    next: Link,
    remaining: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.next == NONE {
            return None;
        }
        let node = self.slots[self.next as usize].take().unwrap();
        self.next = node.next;
        self.remaining -= 1;
        return Some(node.elem);
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return (self.remaining, Some(self.remaining));
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedSeq<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let remaining = self.nodes.len();
        return IntoIter {
            slots: self.nodes.into_iter().map(Some).collect(),
            next: self.head,
            remaining,
        };
    }
}

impl<'a, T> IntoIterator for &'a LinkedSeq<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        return Iter {
            nodes: &self.nodes,
            next: self.head,
            remaining: self.nodes.len(),
        };
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedSeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self).finish();
    }
}

impl<T: fmt::Display> fmt::Display for LinkedSeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, elem) in self.into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{elem}")?;
        }
        return write!(f, "]");
    }
}

impl<T: PartialEq> PartialEq for LinkedSeq<T> {
    fn eq(&self, other: &LinkedSeq<T>) -> bool {
        return self.nodes.len() == other.nodes.len() && self.into_iter().eq(other);
    }
}

impl<T: Eq> Eq for LinkedSeq<T> {}

impl<T: PartialEq> PartialEq<ArraySeq<T>> for LinkedSeq<T> {
    fn eq(&self, other: &ArraySeq<T>) -> bool {
        return self.nodes.len() == other.len() && self.into_iter().eq(other);
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for LinkedSeq<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        return self.nodes.len() == N && self.into_iter().eq(other.iter());
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedSeq<T> {
    fn from(elems: [T; N]) -> LinkedSeq<T> {
        return elems.into_iter().collect();
    }
}

impl<T> FromIterator<T> for LinkedSeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> LinkedSeq<T> {
        let iter = iter.into_iter();
        let mut seq = LinkedSeq::with_capacity(iter.size_hint().0);
        for elem in iter {
            seq.push(elem);
        }
        return seq;
    }
}

impl<T> Extend<T> for LinkedSeq<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.push(elem);
        }
    }
}

#[cfg(test)]
impl<T> LinkedSeq<T> {
    /// Walk the chain and check the structural invariants: the slab is
    /// dense, the walk visits every node exactly once, and it ends at the
    /// tail, whose successor is `NONE`.
    fn assert_chain_valid(&self) {
        if self.nodes.is_empty() {
            assert_eq!(self.head, NONE);
            assert_eq!(self.tail, NONE);
            return;
        }
        let mut seen = 0;
        let mut slot = self.head;
        let mut last = NONE;
        while slot != NONE {
            seen += 1;
            assert!(seen <= self.nodes.len(), "chain longer than slab (cycle?)");
            last = slot;
            slot = self.nodes[slot as usize].next;
        }
        assert_eq!(seen, self.nodes.len(), "chain shorter than slab");
        assert_eq!(last, self.tail);
        assert_eq!(self.nodes[self.tail as usize].next, NONE);
    }
}
