//! Stack-free traversals
//!
//! Pre-, in- and post-order keep a single pending key and derive the one
//! after it by climbing parent links, standing in for the call stack of the
//! recursive versions. Level-order keeps a FIFO of pending keys.
//!
//! Every producer looks one step ahead: the successor is computed when the
//! current value is handed out, so `has_next` is a plain check.

use std::collections::VecDeque;
use std::fmt;
use std::mem;
use std::str::FromStr;

use thiserror::Error;

use super::{BinaryTree, NodeKey};
use crate::{Result, TreeError};

/// Hand out the value at the pending key and compute the step after it
///
/// A navigation error raised while stepping is held back and returned by the
/// following call, ahead of [`TreeError::EndOfSequence`].
fn advance<'t, B, F>(
    tree: &'t B,
    pending: &mut Result<Option<NodeKey>>,
    successor: F,
) -> Result<&'t B::Value>
where
    B: BinaryTree,
    F: FnOnce(&'t B, NodeKey) -> Result<Option<NodeKey>>,
{
    let current = mem::replace(pending, Ok(None))?.ok_or(TreeError::EndOfSequence)?;
    let value = tree.get(current)?;
    *pending = successor(tree, current);
    Ok(value)
}

/// Node, then left subtree, then right subtree
#[derive(Debug)]
pub struct PreOrder<'t, B: BinaryTree> {
    tree: &'t B,
    next: Result<Option<NodeKey>>,
}

impl<'t, B: BinaryTree> PreOrder<'t, B> {
    /// Start at the root
    pub fn new(tree: &'t B) -> Self {
        Self {
            tree,
            next: Ok(tree.root()),
        }
    }

    /// True while a value or a navigation error is pending
    pub fn has_next(&self) -> bool {
        !matches!(self.next, Ok(None))
    }

    /// Next value, or [`TreeError::EndOfSequence`] once exhausted
    pub fn try_next(&mut self) -> Result<&'t B::Value> {
        advance(self.tree, &mut self.next, |tree, current| {
            if let Some(left) = tree.left(current)? {
                return Ok(Some(left));
            }
            // Only reachable outside the nearly-complete layout
            if let Some(right) = tree.right(current)? {
                return Ok(Some(right));
            }
            tree.right_of_nearest_left_ancestor(current)
        })
    }
}

/// Left subtree, then node, then right subtree
#[derive(Debug)]
pub struct InOrder<'t, B: BinaryTree> {
    tree: &'t B,
    next: Result<Option<NodeKey>>,
}

impl<'t, B: BinaryTree> InOrder<'t, B> {
    /// Start at the leftmost descendant of the root
    pub fn new(tree: &'t B) -> Self {
        let next = tree
            .root()
            .map(|root| tree.leftmost_descendant(root))
            .transpose();
        Self { tree, next }
    }

    /// True while a value or a navigation error is pending
    pub fn has_next(&self) -> bool {
        !matches!(self.next, Ok(None))
    }

    /// Next value, or [`TreeError::EndOfSequence`] once exhausted
    pub fn try_next(&mut self) -> Result<&'t B::Value> {
        advance(self.tree, &mut self.next, |tree, current| {
            match tree.right(current)? {
                Some(right) => tree.leftmost_descendant(right).map(Some),
                None => tree.nearest_left_ancestor(current),
            }
        })
    }
}

/// Left subtree, then right subtree, then node
#[derive(Debug)]
pub struct PostOrder<'t, B: BinaryTree> {
    tree: &'t B,
    next: Result<Option<NodeKey>>,
}

impl<'t, B: BinaryTree> PostOrder<'t, B> {
    /// Start at the leftmost leaf under the root
    pub fn new(tree: &'t B) -> Self {
        let next = tree
            .root()
            .map(|root| tree.leftmost_leaf(root))
            .transpose();
        Self { tree, next }
    }

    /// True while a value or a navigation error is pending
    pub fn has_next(&self) -> bool {
        !matches!(self.next, Ok(None))
    }

    /// Next value, or [`TreeError::EndOfSequence`] once exhausted
    pub fn try_next(&mut self) -> Result<&'t B::Value> {
        advance(self.tree, &mut self.next, |tree, current| {
            let Some(parent) = tree.parent(current)? else {
                return Ok(None);
            };
            if tree.is_left_child_of(parent, current)? {
                if let Some(right) = tree.right(parent)? {
                    return tree.leftmost_leaf(right).map(Some);
                }
            }
            Ok(Some(parent))
        })
    }
}

/// Breadth first, left to right within a level
#[derive(Debug)]
pub struct LevelOrder<'t, B: BinaryTree> {
    tree: &'t B,
    queue: VecDeque<NodeKey>,
}

impl<'t, B: BinaryTree> LevelOrder<'t, B> {
    /// Start with the root queued
    pub fn new(tree: &'t B) -> Self {
        Self {
            tree,
            queue: tree.root().into_iter().collect(),
        }
    }

    /// True while a value is pending
    pub fn has_next(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Next value, or [`TreeError::EndOfSequence`] once exhausted
    ///
    /// A navigation error ends the traversal after it is returned.
    pub fn try_next(&mut self) -> Result<&'t B::Value> {
        let current = self.queue.pop_front().ok_or(TreeError::EndOfSequence)?;
        let visited = self.visit(current);
        if visited.is_err() {
            self.queue.clear();
        }
        visited
    }

    fn visit(&mut self, current: NodeKey) -> Result<&'t B::Value> {
        let value = self.tree.get(current)?;
        let left = self.tree.left(current)?;
        let right = self.tree.right(current)?;
        self.queue.extend(left.into_iter().chain(right));
        Ok(value)
    }
}

// Iteration stops at the first error; `try_next` reports it.
macro_rules! impl_iterator {
    ($($producer:ident),+) => {
        $(
            impl<'t, B: BinaryTree> Iterator for $producer<'t, B> {
                type Item = &'t B::Value;

                fn next(&mut self) -> Option<Self::Item> {
                    self.try_next().ok()
                }
            }
        )+
    };
}

impl_iterator!(PreOrder, InOrder, PostOrder, LevelOrder);

/// Traversal order selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Node, left, right
    PreOrder,
    /// Left, node, right
    InOrder,
    /// Left, right, node
    PostOrder,
    /// Breadth first
    LevelOrder,
}

impl TraversalOrder {
    /// Every order, in declaration order
    pub const ALL: [TraversalOrder; 4] = [
        TraversalOrder::PreOrder,
        TraversalOrder::InOrder,
        TraversalOrder::PostOrder,
        TraversalOrder::LevelOrder,
    ];

    /// Start a fresh traversal of `tree` in this order
    pub fn traverse<B: BinaryTree>(self, tree: &B) -> Traversal<'_, B> {
        match self {
            TraversalOrder::PreOrder => Traversal::PreOrder(PreOrder::new(tree)),
            TraversalOrder::InOrder => Traversal::InOrder(InOrder::new(tree)),
            TraversalOrder::PostOrder => Traversal::PostOrder(PostOrder::new(tree)),
            TraversalOrder::LevelOrder => Traversal::LevelOrder(LevelOrder::new(tree)),
        }
    }

    /// Short name, as accepted by [`FromStr`]
    pub fn name(self) -> &'static str {
        match self {
            TraversalOrder::PreOrder => "pre",
            TraversalOrder::InOrder => "in",
            TraversalOrder::PostOrder => "post",
            TraversalOrder::LevelOrder => "level",
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown traversal order name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown traversal order '{0}' (expected pre, in, post or level)")]
pub struct ParseTraversalOrderError(String);

impl FromStr for TraversalOrder {
    type Err = ParseTraversalOrderError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pre" | "preorder" | "pre-order" => Ok(TraversalOrder::PreOrder),
            "in" | "inorder" | "in-order" => Ok(TraversalOrder::InOrder),
            "post" | "postorder" | "post-order" => Ok(TraversalOrder::PostOrder),
            "level" | "levelorder" | "level-order" => Ok(TraversalOrder::LevelOrder),
            _ => Err(ParseTraversalOrderError(s.to_string())),
        }
    }
}

/// Traversal in an order picked at runtime
#[derive(Debug)]
pub enum Traversal<'t, B: BinaryTree> {
    /// See [`PreOrder`]
    PreOrder(PreOrder<'t, B>),
    /// See [`InOrder`]
    InOrder(InOrder<'t, B>),
    /// See [`PostOrder`]
    PostOrder(PostOrder<'t, B>),
    /// See [`LevelOrder`]
    LevelOrder(LevelOrder<'t, B>),
}

impl<'t, B: BinaryTree> Traversal<'t, B> {
    /// True while a value is pending
    pub fn has_next(&self) -> bool {
        match self {
            Traversal::PreOrder(inner) => inner.has_next(),
            Traversal::InOrder(inner) => inner.has_next(),
            Traversal::PostOrder(inner) => inner.has_next(),
            Traversal::LevelOrder(inner) => inner.has_next(),
        }
    }

    /// Next value, or [`TreeError::EndOfSequence`] once exhausted
    pub fn try_next(&mut self) -> Result<&'t B::Value> {
        match self {
            Traversal::PreOrder(inner) => inner.try_next(),
            Traversal::InOrder(inner) => inner.try_next(),
            Traversal::PostOrder(inner) => inner.try_next(),
            Traversal::LevelOrder(inner) => inner.try_next(),
        }
    }
}

impl_iterator!(Traversal);
