use bst_set::Tree;
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>)
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Delete(k) => {
                bst.delete(k);
                set.remove(k);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.inorder().eq(set.iter()) && tree.len() == set.len() && tree.is_valid_bst()
}

#[quickcheck]
fn inorder_is_strictly_ascending(xs: Vec<i32>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let keys: Vec<_> = tree.inorder().collect();

    keys.windows(2).all(|pair| pair[0] < pair[1]) && keys.len() == tree.len()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
        && tree.is_valid_bst()
}

#[quickcheck]
fn duplicates_leave_len_alone(xs: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let len = tree.len();

    xs.iter().all(|x| !tree.insert(*x)) && tree.len() == len
}

#[quickcheck]
fn preorder_rebuilds_same_shape(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let rebuilt: Tree<_> = tree.preorder().copied().collect();

    rebuilt.preorder().eq(tree.preorder()) && rebuilt.height() == tree.height()
}

#[quickcheck]
fn min_and_max_match_inorder(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();

    tree.min().ok() == tree.inorder().next() && tree.max().ok() == tree.inorder().last()
}

#[quickcheck]
fn owned_iteration_matches_borrowed(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let borrowed: Vec<i8> = tree.iter().copied().collect();

    tree.into_iter().eq(borrowed)
}
