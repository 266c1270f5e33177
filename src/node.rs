//! The owning pieces a [`Tree`][crate::tree::Tree] is made of and the walks over them.
//!
//! Every node is owned by exactly one [`Link`]: either the tree's root link or one of its
//! parent's child links. None of the walks below recurse on the call stack. A tree built from
//! ascending input is a linked list of depth `N`, so each walk either loops down a single path
//! or keeps its pending nodes in a heap-allocated stack.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::mem;

use tracing::trace;

use crate::policy::Duplicates;

/// An owning reference to a subtree, `None` for an empty one.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Builds a fully formed leaf. Nothing links to it until the caller stores it in a slot.
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

/// Descends from `link` to the empty slot `value` should be attached to and returns it with
/// the depth the new node will have. Values equal to a stored value are routed right, unless
/// the policy is [`Duplicates::Reject`] in which case `None` is returned.
pub(crate) fn vacant_slot<'a, T>(
    mut link: &'a mut Link<T>,
    value: &T,
    duplicates: Duplicates,
) -> Option<(&'a mut Link<T>, usize)>
where
    T: Ord,
{
    let mut depth = 1;
    loop {
        let ordering = match link.as_deref() {
            Some(node) => node.value.cmp(value),
            None => return Some((link, depth)),
        };
        if ordering == Ordering::Equal && duplicates == Duplicates::Reject {
            return None;
        }
        link = match (ordering, link) {
            (Ordering::Greater, Some(node)) => &mut node.left,
            (_, Some(node)) => &mut node.right,
            (_, link) => return Some((link, depth)),
        };
        depth += 1;
    }
}

/// Descends from `link` to the slot holding a value equal to `value`. If there is no such
/// value the returned slot is the empty one where the search ended.
pub(crate) fn matching_slot<'a, T>(mut link: &'a mut Link<T>, value: &T) -> &'a mut Link<T>
where
    T: Ord,
{
    loop {
        let ordering = match link.as_deref() {
            Some(node) => node.value.cmp(value),
            None => return link,
        };
        link = match (ordering, link) {
            (Ordering::Greater, Some(node)) => &mut node.left,
            (Ordering::Less, Some(node)) => &mut node.right,
            (_, link) => return link,
        };
    }
}

pub(crate) fn find<'a, T>(link: &'a Link<T>, value: &T) -> Option<&'a T>
where
    T: Ord,
{
    let mut current = link.as_deref();
    while let Some(node) = current {
        current = match node.value.cmp(value) {
            Ordering::Equal => return Some(&node.value),
            Ordering::Greater => node.left(),
            Ordering::Less => node.right(),
        };
    }
    None
}

/// Removes the node in `slot` and returns its value, or `None` if the slot is empty.
///
/// A node with two children keeps its place in the tree: its in-order successor (the
/// leftmost node of its right subtree) is detached and its value moves into this node.
pub(crate) fn unlink<T>(slot: &mut Link<T>) -> Option<T> {
    let mut node = slot.take()?;
    match (node.left.take(), node.right.take()) {
        (None, None) => {
            trace!("removed a leaf");
            let Node { value, .. } = *node;
            Some(value)
        }
        (Some(child), None) | (None, Some(child)) => {
            trace!("removed a node with one child, promoting the child");
            *slot = Some(child);
            let Node { value, .. } = *node;
            Some(value)
        }
        (left, right) => {
            node.left = left;
            node.right = right;
            match take_leftmost(&mut node.right) {
                Some(successor) => {
                    trace!("removed a node with two children, promoting its successor");
                    let removed = mem::replace(&mut node.value, successor);
                    *slot = Some(node);
                    Some(removed)
                }
                None => unreachable!("a node with two children has a right subtree"),
            }
        }
    }
}

/// Detaches the leftmost node below `link` and returns its value. Its right child, if any,
/// takes over the slot it vacated.
fn take_leftmost<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref().is_some_and(|node| node.left.is_some()) {
        link = match link {
            Some(node) => &mut node.left,
            None => return None,
        };
    }
    let leftmost = link.take()?;
    let Node { value, right, .. } = *leftmost;
    *link = right;
    Some(value)
}

pub(crate) fn count<T>(link: &Link<T>) -> usize {
    let mut stack: Vec<&Node<T>> = link.as_deref().into_iter().collect();
    let mut count = 0;
    while let Some(node) = stack.pop() {
        count += 1;
        stack.extend(node.left());
        stack.extend(node.right());
    }
    count
}

/// Counted in nodes: a lone root has height 1, an empty tree 0.
pub(crate) fn height<T>(link: &Link<T>) -> usize {
    let mut stack: Vec<(&Node<T>, usize)> = link.as_deref().map(|n| (n, 1)).into_iter().collect();
    let mut height = 0;
    while let Some((node, depth)) = stack.pop() {
        height = height.max(depth);
        stack.extend(node.left().map(|n| (n, depth + 1)));
        stack.extend(node.right().map(|n| (n, depth + 1)));
    }
    height
}

/// Finds the `rank`-th smallest value (0-indexed) by comparing the rank against the size of
/// each visited node's left subtree.
pub(crate) fn select<T>(link: &Link<T>, mut rank: usize) -> Option<&T> {
    let mut current = link.as_deref();
    while let Some(node) = current {
        let left_count = count(&node.left);
        current = match rank.cmp(&left_count) {
            Ordering::Equal => return Some(&node.value),
            Ordering::Less => node.left(),
            Ordering::Greater => {
                rank -= left_count + 1;
                node.right()
            }
        };
    }
    None
}

/// Calls `visit` on every value in ascending order, stopping at the first error.
pub(crate) fn try_walk_in_order<'a, T, E>(
    link: &'a Link<T>,
    mut visit: impl FnMut(&'a T) -> Result<(), E>,
) -> Result<(), E> {
    let mut stack: Vec<&'a Node<T>> = Vec::new();
    let mut current = link.as_deref();
    loop {
        while let Some(node) = current {
            stack.push(node);
            current = node.left();
        }
        let Some(node) = stack.pop() else {
            return Ok(());
        };
        visit(&node.value)?;
        current = node.right();
    }
}

/// Calls `visit` on every value in ascending order.
pub(crate) fn walk_in_order<'a, T>(link: &'a Link<T>, mut visit: impl FnMut(&'a T)) {
    let walked: Result<(), Infallible> = try_walk_in_order(link, |value| {
        visit(value);
        Ok(())
    });
    match walked {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

/// A unit of work for [`clone_link`].
enum CloneStep<'a, T> {
    /// Clone this subtree: queue its children, then the node itself.
    Visit(Option<&'a Node<T>>),
    /// Both children are already on the output stack. Pop them and build the node.
    Build(&'a Node<T>),
}

/// Returns a structurally identical copy of the subtree in `link` and the number of nodes
/// it holds. Children are built before their parent (post-order), so a node is only
/// allocated once both of its subtrees exist.
pub(crate) fn clone_link<T>(link: &Link<T>) -> (Link<T>, usize)
where
    T: Clone,
{
    let mut steps = vec![CloneStep::Visit(link.as_deref())];
    let mut built: Vec<Link<T>> = Vec::new();
    let mut nodes = 0;

    while let Some(step) = steps.pop() {
        match step {
            CloneStep::Visit(None) => built.push(None),
            CloneStep::Visit(Some(node)) => {
                steps.push(CloneStep::Build(node));
                steps.push(CloneStep::Visit(node.right()));
                steps.push(CloneStep::Visit(node.left()));
            }
            CloneStep::Build(node) => {
                let right = built.pop().flatten();
                let left = built.pop().flatten();
                built.push(Some(Box::new(Node {
                    value: node.value.clone(),
                    left,
                    right,
                })));
                nodes += 1;
            }
        }
    }

    (built.pop().flatten(), nodes)
}

/// Releases every node below `link`, leaving it empty, and returns how many were released.
/// Each node's children are detached before the node itself is dropped, so dropping never
/// recurses.
pub(crate) fn release<T>(link: &mut Link<T>) -> usize {
    let mut stack: Vec<Box<Node<T>>> = link.take().into_iter().collect();
    let mut released = 0;
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
        released += 1;
    }
    released
}
