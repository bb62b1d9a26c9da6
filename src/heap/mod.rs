//! Max-heap on the binary tree contract
//!
//! Invariant: value(node) <= value(parent) for every non-root node.
//! Repairs go through `BinaryTree::swap` and navigation only; the heap
//! never sees how the tree stores its values.
//!
//! Each repair is planned first, reading the tree without touching it, and
//! only then applied as a chain of swaps. A navigation error therefore
//! surfaces before anything moves and the heap is left as it was.

use tracing::{debug, trace};

use crate::tree::{ArrayTree, BinaryTree, NodeKey};
use crate::{Result, TreeError};

/// Priority queue contract: the largest value comes out first
pub trait Heap {
    /// Type of the stored values
    type Value;

    /// Insert a value
    ///
    /// On error the value is dropped and the heap is unchanged.
    fn push(&mut self, value: Self::Value) -> Result<()>;

    /// Remove and return the largest value, [`TreeError::EmptyHeap`] if none
    fn pop(&mut self) -> Result<Self::Value>;

    /// Largest value without removing it
    fn peek(&self) -> Option<&Self::Value>;

    /// Number of values
    fn len(&self) -> usize;

    /// True if there are no values
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Max-heap layered on any [`BinaryTree`]
///
/// Equal values are interchangeable: repairs only swap on a strictly larger
/// value, so no order among equal values is promised.
#[derive(Debug, Clone)]
pub struct MaxHeap<B> {
    tree: B,
}

impl<V: Ord> MaxHeap<ArrayTree<V>> {
    /// Create an empty heap
    pub fn new() -> Self {
        Self {
            tree: ArrayTree::new(),
        }
    }

    /// Build a heap from values in arbitrary order
    pub fn from_values(values: Vec<V>) -> Result<Self> {
        Self::from_tree(ArrayTree::from(values))
    }
}

impl<V: Ord> Default for MaxHeap<ArrayTree<V>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> MaxHeap<B>
where
    B: BinaryTree,
    B::Value: Ord,
{
    /// Turn an unordered tree into a heap in one bottom-up pass
    ///
    /// Every node with children is heapified, last one first, so both
    /// subtrees of a node are already heaps by the time it is visited.
    pub fn from_tree(tree: B) -> Result<Self> {
        let mut heap = Self { tree };
        debug!(size = heap.tree.size(), "building heap");
        for key in heap.tree.keys().rev() {
            if heap.tree.has_left(key)? {
                let value = heap.tree.get(key)?;
                let path = heap.sink_path(key, value, None)?;
                heap.apply(&path)?;
            }
        }
        Ok(heap)
    }

    /// Underlying tree, in heap layout
    pub fn as_tree(&self) -> &B {
        &self.tree
    }

    /// Give up the heap, keeping the tree in heap layout
    pub fn into_tree(self) -> B {
        self.tree
    }

    /// Drain the heap, largest value first
    pub fn into_sorted_desc(mut self) -> Result<Vec<B::Value>> {
        let mut sorted = Vec::with_capacity(self.len());
        while !self.is_empty() {
            sorted.push(self.pop()?);
        }
        Ok(sorted)
    }

    /// Keys the value at `start` climbs through: `start`, then every parent
    /// holding a smaller value
    fn rise_path(&self, start: NodeKey) -> Result<Vec<NodeKey>> {
        let value = self.tree.get(start)?;
        let mut path = vec![start];
        let mut at = start;
        while let Some(parent) = self.tree.parent(at)? {
            if value <= self.tree.get(parent)? {
                break;
            }
            path.push(parent);
            at = parent;
        }
        Ok(path)
    }

    /// Keys `value` sinks through when placed at `start`
    ///
    /// Assumes both subtrees of `start` are heaps. The value currently held
    /// by `start` is ignored, as is the child `skip`.
    fn sink_path(
        &self,
        start: NodeKey,
        value: &B::Value,
        skip: Option<NodeKey>,
    ) -> Result<Vec<NodeKey>> {
        let mut path = vec![start];
        let mut at = start;
        loop {
            let mut largest: Option<(NodeKey, &B::Value)> = None;
            for child in [self.tree.left(at)?, self.tree.right(at)?]
                .into_iter()
                .flatten()
                .filter(|&child| Some(child) != skip)
            {
                let candidate = self.tree.get(child)?;
                if largest.map_or(true, |(_, best)| candidate > best) {
                    largest = Some((child, candidate));
                }
            }

            match largest {
                Some((child, best)) if best > value => {
                    path.push(child);
                    at = child;
                }
                _ => return Ok(path),
            }
        }
    }

    /// Carry the value at the head of `path` along it, one swap per step
    fn apply(&mut self, path: &[NodeKey]) -> Result<()> {
        for step in path.windows(2) {
            trace!(from = %step[0], to = %step[1], "heap swap");
            self.tree.swap(step[0], step[1])?;
        }
        Ok(())
    }
}

impl<B> Heap for MaxHeap<B>
where
    B: BinaryTree,
    B::Value: Ord,
{
    type Value = B::Value;

    fn push(&mut self, value: B::Value) -> Result<()> {
        let key = self.tree.add(value);
        match self.rise_path(key) {
            Ok(path) => self.apply(&path),
            Err(error) => {
                self.tree.remove_last();
                Err(error)
            }
        }
    }

    fn pop(&mut self) -> Result<B::Value> {
        let (Some(root), Some(last)) = (self.tree.root(), self.tree.last()) else {
            return Err(TreeError::EmptyHeap);
        };

        // The last value takes over the root and the last slot goes away
        let path = if root == last {
            Vec::new()
        } else {
            let value = self.tree.get(last)?;
            self.sink_path(root, value, Some(last))?
        };

        self.tree.swap(root, last)?;
        let top = self.tree.remove_last().ok_or(TreeError::EmptyHeap)?;
        self.apply(&path)?;
        Ok(top)
    }

    fn peek(&self) -> Option<&B::Value> {
        self.tree.root().and_then(|root| self.tree.get(root).ok())
    }

    fn len(&self) -> usize {
        self.tree.size()
    }
}
