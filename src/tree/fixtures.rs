//! Trees that misbehave on purpose

use std::cell::Cell;

use super::{ArrayTree, BinaryTree, Keys, NodeKey};
use crate::{Result, TreeError};

/// [`ArrayTree`] whose navigation fails at one chosen key
///
/// `parent`, `left` and `right` called on the faulty key return
/// [`TreeError::OutOfRange`]; values and mutation are untouched.
#[derive(Debug)]
pub(crate) struct FaultyTree<V> {
    inner: ArrayTree<V>,
    faulty: Cell<Option<NodeKey>>,
}

impl<V> FaultyTree<V> {
    pub(crate) fn new(values: Vec<V>, faulty: Option<usize>) -> Self {
        Self {
            inner: ArrayTree::from(values),
            faulty: Cell::new(faulty.map(NodeKey::at)),
        }
    }

    pub(crate) fn fail_at(&self, faulty: Option<usize>) {
        self.faulty.set(faulty.map(NodeKey::at));
    }

    pub(crate) fn values(&self) -> &[V] {
        self.inner.values()
    }

    /// The error every faulty navigation returns
    pub(crate) fn fault(index: usize) -> TreeError {
        TreeError::OutOfRange { index, size: 99 }
    }

    fn navigate(&self, key: NodeKey) -> Result<()> {
        match self.faulty.get() {
            Some(faulty) if faulty == key => Err(Self::fault(key.index())),
            _ => Ok(()),
        }
    }
}

impl<V> BinaryTree for FaultyTree<V> {
    type Value = V;

    fn size(&self) -> usize {
        self.inner.size()
    }

    fn add(&mut self, value: V) -> NodeKey {
        self.inner.add(value)
    }

    fn get(&self, key: NodeKey) -> Result<&V> {
        self.inner.get(key)
    }

    fn get_mut(&mut self, key: NodeKey) -> Result<&mut V> {
        self.inner.get_mut(key)
    }

    fn swap(&mut self, key1: NodeKey, key2: NodeKey) -> Result<()> {
        self.inner.swap(key1, key2)
    }

    fn remove_last(&mut self) -> Option<V> {
        self.inner.remove_last()
    }

    fn keys(&self) -> Keys {
        self.inner.keys()
    }

    fn root(&self) -> Option<NodeKey> {
        self.inner.root()
    }

    fn last(&self) -> Option<NodeKey> {
        self.inner.last()
    }

    fn parent(&self, key: NodeKey) -> Result<Option<NodeKey>> {
        self.navigate(key)?;
        self.inner.parent(key)
    }

    fn left(&self, key: NodeKey) -> Result<Option<NodeKey>> {
        self.navigate(key)?;
        self.inner.left(key)
    }

    fn right(&self, key: NodeKey) -> Result<Option<NodeKey>> {
        self.navigate(key)?;
        self.inner.right(key)
    }
}
