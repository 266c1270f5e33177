//! This crate exposes a plain, unbalanced Binary Search Tree (BST) with
//! order-statistic selection.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is the
//! number of `Node`s on the longest path from the root `Node` to a leaf `Node`).
//! This tree makes no attempt to limit its height: inserting sorted values
//! produces a tree as tall as it is large. BSTs also naturally support sorted
//! iteration by visiting the left subtree, then the subtree root, then the
//! right subtree, and finding the `k`-th smallest value by comparing `k` with
//! the size of each left subtree on the way down.
//!
//! Values that compare equal to a stored value are kept by default and routed
//! into the right subtree, so the second invariant is relaxed to "not less
//! than". See [`Duplicates`] to reject them instead.
//!
//! # Examples
//!
//! ```
//! use simple_bst::Tree;
//!
//! let mut tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
//!
//! assert_eq!(tree.count(), 7);
//! assert_eq!(tree.select(3), Some(&5));
//!
//! // A deep copy. Changing one tree leaves the other alone.
//! let copy = tree.clone();
//! tree.remove(&5);
//! assert!(copy.search(&5));
//! assert!(!tree.search(&5));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
mod node;
pub mod policy;
pub mod tree;

pub use error::{Error, Result};
pub use policy::Duplicates;
pub use tree::Tree;
