//! Array-backed, nearly-complete binary tree
//!
//! Nodes fill slots 0..size with no gaps (breadth-first assignment).
//! No explicit links are stored: parent and children are computed from
//! the slot index, and every derived relation ("am I a left child",
//! "nearest left ancestor", "leftmost leaf") is built on top of that.

#[cfg(test)]
pub(crate) mod fixtures;
mod node;
pub mod traversal;

pub use node::{Keys, NodeKey};
pub use traversal::{
    InOrder, LevelOrder, ParseTraversalOrderError, PostOrder, PreOrder, Traversal,
    TraversalOrder,
};

use crate::{Result, TreeError};

/// Navigation and mutation contract of a binary tree addressed by [`NodeKey`]
///
/// Every operation taking a key fails with [`TreeError::OutOfRange`] when the
/// key does not denote a current slot. Relatives that do not exist are `None`,
/// not errors.
///
/// The derived helpers at the bottom are provided in terms of the required
/// methods only, so traversal and heap code never needs to know how a tree is
/// stored.
pub trait BinaryTree {
    /// Type of the values held by the nodes
    type Value;

    /// Number of nodes
    fn size(&self) -> usize;

    /// Append a node; the returned key is valid until the tree shrinks below it
    fn add(&mut self, value: Self::Value) -> NodeKey;

    /// Value held by `key`
    fn get(&self, key: NodeKey) -> Result<&Self::Value>;

    /// Mutable value held by `key`
    fn get_mut(&mut self, key: NodeKey) -> Result<&mut Self::Value>;

    /// Exchange the values held by two nodes. Both keys are validated before
    /// anything moves.
    fn swap(&mut self, key1: NodeKey, key2: NodeKey) -> Result<()>;

    /// Drop the final node and hand back its value
    fn remove_last(&mut self) -> Option<Self::Value>;

    /// All keys in slot order
    fn keys(&self) -> Keys;

    /// Root node, present iff the tree is non-empty
    fn root(&self) -> Option<NodeKey>;

    /// Final node, present iff the tree is non-empty
    fn last(&self) -> Option<NodeKey>;

    /// Parent of `key`, `None` for the root
    fn parent(&self, key: NodeKey) -> Result<Option<NodeKey>>;

    /// Left child of `key`
    fn left(&self, key: NodeKey) -> Result<Option<NodeKey>>;

    /// Right child of `key`
    fn right(&self, key: NodeKey) -> Result<Option<NodeKey>>;

    /// True if there are no nodes
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Validate `key`, handing it back unchanged
    fn check(&self, key: NodeKey) -> Result<NodeKey> {
        self.get(key).map(|_| key)
    }

    /// True if `key` has a parent
    fn has_parent(&self, key: NodeKey) -> Result<bool> {
        Ok(self.parent(key)?.is_some())
    }

    /// True if `key` has a left child
    fn has_left(&self, key: NodeKey) -> Result<bool> {
        Ok(self.left(key)?.is_some())
    }

    /// True if `key` has a right child
    fn has_right(&self, key: NodeKey) -> Result<bool> {
        Ok(self.right(key)?.is_some())
    }

    /// True if `candidate` is the left child of `parent`
    ///
    /// Both keys must be valid. A right child, or an unrelated node, is
    /// simply `false`.
    fn is_left_child_of(&self, parent: NodeKey, candidate: NodeKey) -> Result<bool> {
        self.check(candidate)?;
        Ok(self.left(parent)? == Some(candidate))
    }

    /// Follow left children from `key` as far as they go
    fn leftmost_descendant(&self, key: NodeKey) -> Result<NodeKey> {
        let mut current = self.check(key)?;
        while let Some(left) = self.left(current)? {
            current = left;
        }
        Ok(current)
    }

    /// First node visited in post-order within the subtree rooted at `key`
    ///
    /// Drills to the leftmost descendant; if that still has a right subtree,
    /// repeats inside it. Ends on a node without children.
    fn leftmost_leaf(&self, key: NodeKey) -> Result<NodeKey> {
        let mut current = self.leftmost_descendant(key)?;
        while let Some(right) = self.right(current)? {
            current = self.leftmost_descendant(right)?;
        }
        Ok(current)
    }

    /// First ancestor of `key` reached by climbing up through a left edge
    ///
    /// `None` when `key` sits on the right spine below the root (or is the
    /// root).
    fn nearest_left_ancestor(&self, key: NodeKey) -> Result<Option<NodeKey>> {
        let mut child = self.check(key)?;
        while let Some(parent) = self.parent(child)? {
            if self.is_left_child_of(parent, child)? {
                return Ok(Some(parent));
            }
            child = parent;
        }
        Ok(None)
    }

    /// Right child of the first left-ancestor that has one
    ///
    /// Left-ancestors without a right child are climbed past.
    fn right_of_nearest_left_ancestor(&self, key: NodeKey) -> Result<Option<NodeKey>> {
        let mut from = key;
        while let Some(ancestor) = self.nearest_left_ancestor(from)? {
            if let Some(right) = self.right(ancestor)? {
                return Ok(Some(right));
            }
            from = ancestor;
        }
        Ok(None)
    }
}

/// Nearly-complete binary tree stored in a `Vec`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayTree<V> {
    values: Vec<V>,
}

impl<V> ArrayTree<V> {
    /// Create an empty tree
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Create an empty tree with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    /// Values in slot (level) order
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Give up the tree, keeping the values in slot order
    pub fn into_values(self) -> Vec<V> {
        self.values
    }

    /// Map a computed slot onto a key if it lies inside the tree
    #[inline]
    fn existing(&self, index: Option<usize>) -> Option<NodeKey> {
        index.filter(|&i| i < self.values.len()).map(NodeKey::at)
    }

    #[inline]
    fn slot(&self, key: NodeKey) -> Result<usize> {
        let index = key.index();
        if index < self.values.len() {
            Ok(index)
        } else {
            Err(TreeError::OutOfRange {
                index,
                size: self.values.len(),
            })
        }
    }
}

impl<V> Default for ArrayTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> From<Vec<V>> for ArrayTree<V> {
    fn from(values: Vec<V>) -> Self {
        Self { values }
    }
}

impl<V> FromIterator<V> for ArrayTree<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<V> BinaryTree for ArrayTree<V> {
    type Value = V;

    fn size(&self) -> usize {
        self.values.len()
    }

    fn add(&mut self, value: V) -> NodeKey {
        self.values.push(value);
        NodeKey::at(self.values.len() - 1)
    }

    fn get(&self, key: NodeKey) -> Result<&V> {
        let index = self.slot(key)?;
        Ok(&self.values[index])
    }

    fn get_mut(&mut self, key: NodeKey) -> Result<&mut V> {
        let index = self.slot(key)?;
        Ok(&mut self.values[index])
    }

    fn swap(&mut self, key1: NodeKey, key2: NodeKey) -> Result<()> {
        let first = self.slot(key1)?;
        let second = self.slot(key2)?;
        self.values.swap(first, second);
        Ok(())
    }

    fn remove_last(&mut self) -> Option<V> {
        self.values.pop()
    }

    fn keys(&self) -> Keys {
        Keys::new(self.values.len())
    }

    fn root(&self) -> Option<NodeKey> {
        (!self.values.is_empty()).then_some(NodeKey::ROOT)
    }

    fn last(&self) -> Option<NodeKey> {
        self.values.len().checked_sub(1).map(NodeKey::at)
    }

    fn parent(&self, key: NodeKey) -> Result<Option<NodeKey>> {
        self.slot(key)?;
        Ok(self.existing(key.parent_index()))
    }

    fn left(&self, key: NodeKey) -> Result<Option<NodeKey>> {
        self.slot(key)?;
        Ok(self.existing(key.left_index()))
    }

    fn right(&self, key: NodeKey) -> Result<Option<NodeKey>> {
        self.slot(key)?;
        Ok(self.existing(key.right_index()))
    }
}
