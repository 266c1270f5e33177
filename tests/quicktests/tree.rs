use simple_bst::{Duplicates, Tree};

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and counts the successful ones.
/// Returns `(inserted, removed)`.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>) -> (usize, usize)
where
    T: Ord + Clone,
{
    let mut inserted = 0;
    let mut removed = 0;
    for op in ops {
        match op {
            Op::Insert(x) => {
                if bst.insert(x.clone()) {
                    inserted += 1;
                }
            }
            Op::Remove(x) => {
                if bst.remove(x) {
                    removed += 1;
                }
            }
        }
    }

    (inserted, removed)
}

fn values<T: Clone>(tree: &Tree<T>) -> Vec<T> {
    tree.in_order().into_iter().cloned().collect()
}

#[quickcheck]
fn in_order_is_sorted(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    do_ops(&ops, &mut tree);

    values(&tree).windows(2).all(|w| w[0] <= w[1])
}

#[quickcheck]
fn count_matches_successful_operations(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let (inserted, removed) = do_ops(&ops, &mut tree);

    tree.count() == inserted - removed && tree.count() == tree.in_order().len()
}

#[quickcheck]
fn search_matches_traversal(ops: Vec<Op<i8>>, probes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    do_ops(&ops, &mut tree);
    let present: HashSet<_> = values(&tree).into_iter().collect();

    probes
        .iter()
        .chain(present.iter())
        .all(|x| tree.search(x) == present.contains(x))
}

#[quickcheck]
fn select_matches_traversal(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    do_ops(&ops, &mut tree);
    let sorted = values(&tree);

    sorted
        .iter()
        .enumerate()
        .all(|(k, x)| tree.select(k) == Some(x))
        && tree.select(sorted.len()).is_none()
        && tree.select(usize::MAX).is_none()
}

#[quickcheck]
fn remove_takes_exactly_one(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    let mut expected = values(&tree);
    let removed = tree.remove(&x);

    match expected.iter().position(|y| *y == x) {
        Some(at) => {
            expected.remove(at);
            removed && values(&tree) == expected
        }
        None => !removed && values(&tree) == expected,
    }
}

#[quickcheck]
fn clones_are_independent(xs: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
    let original: Tree<_> = xs.into_iter().collect();
    let before = values(&original);
    let mut copy = original.clone();
    let same_start = values(&copy) == before && copy.height() == original.height();

    do_ops(&ops, &mut copy);

    same_start && values(&original) == before
}

#[quickcheck]
fn rejecting_tree_holds_distinct_values(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::with_duplicates(Duplicates::Reject);
    let mut set = HashSet::new();
    for op in &ops {
        match op {
            Op::Insert(x) => {
                if tree.insert(*x) != set.insert(*x) {
                    return false;
                }
            }
            Op::Remove(x) => {
                if tree.remove(x) != set.remove(x) {
                    return false;
                }
            }
        }
    }

    let sorted = values(&tree);
    sorted.windows(2).all(|w| w[0] < w[1]) && sorted.len() == set.len()
}

#[quickcheck]
fn height_bounds(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let n = xs.len();

    // A tree of n nodes is at most n tall and at least as tall as a complete tree.
    let min_height = usize::BITS as usize - n.leading_zeros() as usize;
    tree.height() <= n && tree.height() >= min_height
}
