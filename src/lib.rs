//! # Array-backed binary trees, traversals and max-heaps
//!
//! A nearly-complete binary tree stored in a single array, navigated purely
//! by index arithmetic.
//!
//! ## Components
//!
//! 1. **[`NodeKey`]**: opaque handle to one slot of a tree
//! 2. **[`BinaryTree`]**: navigation/mutation contract, implemented by [`ArrayTree`]
//! 3. **Traversals**: pre-, in-, post- and level-order producers that keep
//!    O(1) state (level-order keeps a queue) instead of recursing
//! 4. **[`MaxHeap`]**: push/pop/bulk-build on top of the same contract
//! 5. **[`parser`]**: character cursor and state-driven tokenizer, independent
//!    of the tree
//!
//! ## Usage Example
//!
//! ```
//! use heaptree::{ArrayTree, Heap, MaxHeap, TraversalOrder};
//!
//! let tree: ArrayTree<char> = ('a'..='g').collect();
//! let in_order: String = TraversalOrder::InOrder.traverse(&tree).collect();
//! assert_eq!(in_order, "dbeafcg");
//!
//! let mut heap = MaxHeap::from_values(vec![3, 9, 4])?;
//! heap.push(7)?;
//! assert_eq!(heap.pop(), Ok(9));
//! # Ok::<(), heaptree::TreeError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod heap;   // Max-heap on the tree contract
pub mod parser; // Quoted-string tokenizer
pub mod tree;   // Array-backed tree and traversals

pub use heap::{Heap, MaxHeap};
pub use tree::{
    ArrayTree, BinaryTree, InOrder, Keys, LevelOrder, NodeKey, PostOrder, PreOrder, Traversal,
    TraversalOrder,
};

use thiserror::Error;

/// Result alias for tree and heap operations
pub type Result<T, E = TreeError> = std::result::Result<T, E>;

/// Errors raised by tree, traversal and heap operations
///
/// Every failing operation leaves the structure exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Key does not denote a slot of the tree
    #[error("index {index} out of range for tree of size {size}")]
    OutOfRange {
        /// Slot the key pointed at
        index: usize,
        /// Tree size at the time of the call
        size: usize,
    },

    /// Traversal asked for a value after its last one
    #[error("traversal has no next node")]
    EndOfSequence,

    /// Pop from a heap with no values
    #[error("heap is empty")]
    EmptyHeap,
}
