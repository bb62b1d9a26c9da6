//! Node keys for the array-backed tree
//!
//! Key = slot index in the backing array, never exposed
//! Relatives computed on demand:
//!   parent(i) = ((i + 1) / 2) - 1
//!   left(i)   = 2i + 1
//!   right(i)  = 2i + 2

use std::fmt;
use std::ops::Range;

/// Opaque handle to one slot of a [`BinaryTree`](super::BinaryTree)
///
/// Carries no structure itself. Two keys are equal iff they denote the
/// same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeKey {
    index: usize,
}

impl NodeKey {
    pub(crate) const ROOT: NodeKey = NodeKey { index: 0 };

    #[inline]
    pub(crate) fn at(index: usize) -> Self {
        Self { index }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.index
    }

    /// Parent slot, `None` for the root
    #[inline]
    pub(crate) fn parent_index(self) -> Option<usize> {
        // (i + 1) / 2 - 1, written so slot 0 underflows into None
        ((self.index + 1) / 2).checked_sub(1)
    }

    /// Left child slot, `None` on arithmetic overflow
    #[inline]
    pub(crate) fn left_index(self) -> Option<usize> {
        self.index.checked_mul(2)?.checked_add(1)
    }

    /// Right child slot, `None` on arithmetic overflow
    #[inline]
    pub(crate) fn right_index(self) -> Option<usize> {
        self.index.checked_mul(2)?.checked_add(2)
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Index: {}", self.index)
    }
}

/// Iterator over every key of a tree in slot order.
///
/// Slot order is level order for a nearly-complete tree. Reversing it
/// visits every child before its parent, which is what bottom-up heap
/// construction relies on.
#[derive(Debug, Clone)]
pub struct Keys {
    range: Range<usize>,
}

impl Keys {
    pub(crate) fn new(size: usize) -> Self {
        Self { range: 0..size }
    }
}

impl Iterator for Keys {
    type Item = NodeKey;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(NodeKey::at)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl DoubleEndedIterator for Keys {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.range.next_back().map(NodeKey::at)
    }
}

impl ExactSizeIterator for Keys {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_arithmetic() {
        let root = NodeKey::ROOT;
        assert_eq!(root.parent_index(), None);
        assert_eq!(root.left_index(), Some(1));
        assert_eq!(root.right_index(), Some(2));

        // Both children of slot 3 lead back to it
        let node = NodeKey::at(3);
        assert_eq!(node.left_index(), Some(7));
        assert_eq!(node.right_index(), Some(8));
        assert_eq!(NodeKey::at(7).parent_index(), Some(3));
        assert_eq!(NodeKey::at(8).parent_index(), Some(3));
    }

    #[test]
    fn test_child_overflow_is_absent() {
        let node = NodeKey::at(usize::MAX / 2 + 1);
        assert_eq!(node.left_index(), None);
        assert_eq!(node.right_index(), None);
    }

    #[test]
    fn test_keys_both_directions() {
        let forward: Vec<usize> = Keys::new(4).map(NodeKey::index).collect();
        let backward: Vec<usize> = Keys::new(4).rev().map(NodeKey::index).collect();

        assert_eq!(forward, vec![0, 1, 2, 3]);
        assert_eq!(backward, vec![3, 2, 1, 0]);
        assert_eq!(Keys::new(0).len(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(NodeKey::at(5).to_string(), "Index: 5");
    }
}
