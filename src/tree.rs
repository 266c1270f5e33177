//! An unbalanced BST that owns its nodes through `Box`ed child links.
//!
//! Nothing rebalances the tree, so its shape is entirely decided by insertion order. Random
//! input gives `O(lg N)` height on average while sorted input degenerates into a list.
//! None of the operations recurse, so even a degenerate tree can be as deep as memory allows.
//!
//! # Examples
//!
//! ```
//! use simple_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&1));
//!
//! for value in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(value);
//! }
//! assert_eq!(tree.count(), 7);
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.to_string(), "1 3 4 5 7 8 9");
//!
//! // Rank 0 is the smallest value.
//! assert_eq!(tree.select(0), Some(&1));
//! assert_eq!(tree.select(7), None);
//!
//! assert!(tree.remove(&5));
//! assert!(!tree.remove(&100));
//! assert_eq!(tree.to_string(), "1 3 4 7 8 9");
//! ```

use std::fmt;
use std::io::{self, Write};

use tracing::{debug, trace};

use crate::error::Result;
use crate::node::{self, Link};
use crate::policy::Duplicates;

/// An unbalanced Binary Search Tree of ordered values. This can be used for inserting,
/// searching for, and removing values as well as selecting values by rank.
pub struct Tree<T> {
    root: Link<T>,
    duplicates: Duplicates,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        node::release(&mut self.root);
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    /// Makes a deep copy with the same shape, the same values and its own nodes.
    fn clone(&self) -> Self {
        let (root, nodes) = node::clone_link(&self.root);
        debug!(nodes, "cloned tree");
        Self {
            root,
            duplicates: self.duplicates,
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("duplicates", &self.duplicates)
            .field("values", &self.in_order())
            .finish()
    }
}

/// Writes the values in ascending order separated by single spaces.
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut separator = "";
        node::try_walk_in_order(&self.root, |value| {
            let written = write!(f, "{separator}{value}");
            separator = " ";
            written
        })
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree` that accepts duplicate values.
    pub fn new() -> Self {
        Self::with_duplicates(Duplicates::default())
    }

    /// Generates a new, empty `Tree` that handles duplicate values according to `duplicates`.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_bst::{Duplicates, Tree};
    ///
    /// let mut tree = Tree::with_duplicates(Duplicates::Reject);
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.duplicates(), Duplicates::Reject);
    /// ```
    pub fn with_duplicates(duplicates: Duplicates) -> Self {
        Self {
            root: None,
            duplicates,
        }
    }

    /// How this tree handles values equal to ones it already stores.
    pub fn duplicates(&self) -> Duplicates {
        self.duplicates
    }

    /// Inserts `value` as a new leaf and returns whether a node was created. The only time
    /// nothing is created is when the tree uses [`Duplicates::Reject`] and already holds an
    /// equal value.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(2));
    /// assert!(tree.insert(1));
    /// assert!(tree.search(&1));
    ///
    /// // Duplicates are accepted by default.
    /// assert!(tree.insert(2));
    /// assert_eq!(tree.to_string(), "1 2 2");
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        match node::vacant_slot(&mut self.root, &value, self.duplicates) {
            Some((slot, depth)) => {
                *slot = Some(node::Node::new_boxed(value));
                trace!(depth, "inserted leaf");
                true
            }
            None => {
                trace!("rejected duplicate value");
                false
            }
        }
    }

    /// Removes one value equal to `value` from the tree. Returns `false`, leaving the tree
    /// unchanged, if there is no such value.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_bst::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.remove(&2));
    /// assert!(!tree.remove(&2));
    /// assert_eq!(tree.to_string(), "1 3");
    /// ```
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        self.take(value).is_some()
    }

    /// Removes one value equal to `value` from the tree and returns it. If the tree does not
    /// contain such a value, nothing happens and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(String::from("b"));
    ///
    /// assert_eq!(tree.take(&String::from("b")), Some(String::from("b")));
    /// assert_eq!(tree.take(&String::from("b")), None);
    /// ```
    pub fn take(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        node::unlink(node::matching_slot(&mut self.root, value))
    }

    /// Returns whether the tree contains a value equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_bst::Tree;
    ///
    /// let tree: Tree<_> = [4, 2, 6].into_iter().collect();
    ///
    /// assert!(tree.search(&4));
    /// assert!(!tree.search(&5));
    /// ```
    pub fn search(&self, value: &T) -> bool
    where
        T: Ord,
    {
        node::find(&self.root, value).is_some()
    }

    /// Same as [`Tree::search`].
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.search(value)
    }

    /// Returns the `rank`-th smallest value, counting from 0, or `None` if the tree holds
    /// `rank` or fewer values.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_bst::Tree;
    ///
    /// let tree: Tree<_> = [20, 10, 30].into_iter().collect();
    ///
    /// assert_eq!(tree.select(0), Some(&10));
    /// assert_eq!(tree.select(2), Some(&30));
    /// assert_eq!(tree.select(3), None);
    /// ```
    pub fn select(&self, rank: usize) -> Option<&T> {
        node::select(&self.root, rank)
    }

    /// The number of values in the tree.
    pub fn count(&self) -> usize {
        node::count(&self.root)
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has
    /// height 0 and a tree with a single value has height 1.
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// Every value in ascending order.
    pub fn in_order(&self) -> Vec<&T> {
        let mut values = Vec::new();
        node::walk_in_order(&self.root, |value| values.push(value));
        values
    }

    /// Writes the values in ascending order to standard output, separated by single spaces
    /// and followed by a newline.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use simple_bst::Tree;
    ///
    /// let tree: Tree<_> = [2, 3, 1].into_iter().collect();
    ///
    /// // Prints "1 2 3".
    /// tree.print()?;
    /// # Ok::<(), simple_bst::Error>(())
    /// ```
    pub fn print(&self) -> Result<()>
    where
        T: fmt::Display,
    {
        self.print_to(io::stdout().lock())
    }

    /// Writes the values in ascending order to `out`, separated by single spaces and followed
    /// by a newline. An empty tree writes just the newline.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_bst::Tree;
    ///
    /// let tree: Tree<_> = [2, 3, 1].into_iter().collect();
    /// let mut out = Vec::new();
    /// tree.print_to(&mut out).unwrap();
    ///
    /// assert_eq!(out, b"1 2 3\n");
    /// ```
    pub fn print_to<W>(&self, mut out: W) -> Result<()>
    where
        T: fmt::Display,
        W: Write,
    {
        writeln!(out, "{self}")?;
        out.flush()?;
        Ok(())
    }

    /// Releases every node, leaving an empty tree with the same duplicate policy. Clearing an
    /// empty tree does nothing.
    pub fn clear(&mut self) {
        let released = node::release(&mut self.root);
        debug!(released, "cleared tree");
    }
}
