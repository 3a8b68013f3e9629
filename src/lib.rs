//! A mutable Binary Search Tree (BST) of plain values, mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value (this tree breaks ties to
//!    the right, so duplicate values live in right subtrees).
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree — see [`Tree::dfs_in_order`].
//!
//! This tree does no rebalancing: its shape is purely a function of the
//! insertion order, so inserting already-sorted data degenerates into a
//! linked list. Insertion and lookup each come in an iterative and a
//! recursive flavor that produce identical results.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod tree;

pub use error::EmptyTreeError;
pub use tree::{Node, Tree};
