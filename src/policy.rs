//! How a [`Tree`][crate::tree::Tree] treats a value equal to one it already stores.
//!
//! # Examples
//!
//! ```
//! use simple_bst::{Duplicates, Tree};
//!
//! let mut tree = Tree::new();
//! assert!(tree.insert(1));
//! assert!(tree.insert(1));
//! assert_eq!(tree.count(), 2);
//!
//! let mut tree = Tree::with_duplicates(Duplicates::Reject);
//! assert!(tree.insert(1));
//! assert!(!tree.insert(1));
//! assert_eq!(tree.count(), 1);
//! ```

/// What [`Tree::insert`][crate::tree::Tree::insert] does with a value that compares equal to
/// a value already in the tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Duplicates {
    /// Store it as an extra node. Equal values are routed into the right subtree on the way
    /// down, so the new value lands after every equal value already stored and `remove`
    /// only takes out one of them at a time.
    #[default]
    Accept,
    /// Leave the tree untouched and report that nothing was inserted.
    Reject,
}
