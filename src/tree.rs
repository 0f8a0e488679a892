//! A mutable BST holding a set of unique keys. Every `Node` owns its children through a `Box`,
//! so there are no parent pointers and the only bookkeeping besides the links themselves is the
//! cached length. The tree does not rebalance itself: inserting sorted keys builds a chain.
//!
//! # Examples
//!
//! ```
//! use bst_set::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Inserting a key that is already present does nothing.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Deleting reports whether the key was there.
//! assert!(tree.delete(&1));
//! assert!(!tree.delete(&1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::error::{Result, TreeError};
use crate::iter::{Inorder, IntoIter, LevelOrder, Postorder, Preorder};

pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// An unbalanced Binary Search Tree storing a set of keys. This can be used for inserting,
/// finding, and deleting keys as well as walking them in several orders.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        drop_subtree(self.root.take());
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        let root = fold_postorder(self.root(), |node, left, right| {
            Box::new(Node {
                key: node.key.clone(),
                left,
                right,
            })
        });
        Self {
            root,
            len: self.len,
        }
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no keys at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts the given key if it isn't already present and returns whether it was inserted.
    /// Inserting an existing key leaves the tree untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(10));
    /// assert!(tree.insert(5));
    /// assert!(!tree.insert(10));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => {
                    trace!(len = self.len, "ignored duplicate key");
                    return false;
                }
                Ordering::Greater => &mut node.right,
            };
        }

        *link = Some(Node::new_boxed(key));
        self.len += 1;
        trace!(len = self.len, "inserted key");
        true
    }

    /// Like [`insert`][Self::insert] for callers holding a key that may be missing. A missing
    /// key is rejected with [`TreeError::InvalidKey`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.insert_opt(Some(3)), Ok(true));
    /// assert_eq!(tree.insert_opt(None), Err(TreeError::InvalidKey));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert_opt(&mut self, key: Option<K>) -> Result<bool>
    where
        K: Ord,
    {
        let key = key.ok_or(TreeError::InvalidKey)?;
        Ok(self.insert(key))
    }

    /// Potentially finds the stored key equal to the given one. If no node has the key, `None`
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, key: &K) -> Option<&K>
    where
        K: Ord,
    {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => &node.left,
                Ordering::Equal => return Some(&node.key),
                Ordering::Greater => &node.right,
            };
        }
        None
    }

    /// Whether the tree holds the given key.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.find(key).is_some()
    }

    /// Like [`contains`][Self::contains] but a missing key is simply never contained.
    pub fn contains_opt(&self, key: Option<&K>) -> bool
    where
        K: Ord,
    {
        key.is_some_and(|key| self.contains(key))
    }

    /// Deletes the given key from the tree and returns whether it was present. A node with two
    /// children takes the key of its in-order successor, which is then unlinked from the right
    /// subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.delete(&2));
    /// assert!(!tree.delete(&2));
    /// assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [1, 3]);
    /// ```
    pub fn delete(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut link = &mut self.root;
        loop {
            match link.as_deref().map(|node| key.cmp(&node.key)) {
                None => {
                    trace!(len = self.len, "key to delete was missing");
                    return false;
                }
                Some(Ordering::Equal) => break,
                Some(_) => {}
            }
            // Only borrow mutably once we know we're moving on, so `link` is free after `break`.
            if let Some(node) = link {
                link = if key < &node.key {
                    &mut node.left
                } else {
                    &mut node.right
                };
            }
        }

        unlink(link);
        self.len -= 1;
        trace!(len = self.len, "deleted key");
        true
    }

    /// Like [`delete`][Self::delete] but a missing key is simply never deleted.
    pub fn delete_opt(&mut self, key: Option<&K>) -> bool
    where
        K: Ord,
    {
        key.is_some_and(|key| self.delete(key))
    }

    /// The smallest key in the tree.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] if there are no keys.
    pub fn min(&self) -> Result<&K> {
        let mut node = self.root.as_deref().ok_or(TreeError::EmptyTree)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.key)
    }

    /// The largest key in the tree.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] if there are no keys.
    pub fn max(&self) -> Result<&K> {
        let mut node = self.root.as_deref().ok_or(TreeError::EmptyTree)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(&node.key)
    }

    /// Walks the keys visiting each node before its left subtree and then its right subtree.
    pub fn preorder(&self) -> Preorder<'_, K> {
        Preorder::new(self.root(), self.len)
    }

    /// Walks the keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let tree: Tree<_> = [10, 5, 15, 3, 7].into_iter().collect();
    /// assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [3, 5, 7, 10, 15]);
    /// ```
    pub fn inorder(&self) -> Inorder<'_, K> {
        Inorder::new(self.root(), self.len)
    }

    /// Walks the keys visiting both subtrees of a node, left first, before the node itself.
    pub fn postorder(&self) -> Postorder<'_, K> {
        Postorder::new(self.root(), self.len)
    }

    /// Walks the keys one depth at a time starting from the root, left to right within a
    /// depth.
    pub fn level_order(&self) -> LevelOrder<'_, K> {
        LevelOrder::new(self.root(), self.len)
    }

    /// Same as [`inorder`][Self::inorder].
    pub fn iter(&self) -> Inorder<'_, K> {
        self.inorder()
    }

    /// The number of edges on the longest path from the root down to a leaf. An empty tree has
    /// a height of `-1` and a tree with only a root has a height of `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.extend([1, 2, 3]);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> isize {
        height(self.root())
    }

    /// Re-checks every key against the bounds set by its ancestors rather than trusting the
    /// shape of the tree.
    pub fn is_valid_bst(&self) -> bool
    where
        K: Ord,
    {
        within_bounds(self.root())
    }

    /// Whether the heights of the two subtrees of every node differ by at most one. A valid BST
    /// does not have to be balanced.
    pub fn is_balanced(&self) -> bool {
        fold_postorder(self.root(), |_, left: Option<Option<isize>>, right| {
            let left = left.unwrap_or(Some(-1))?;
            let right = right.unwrap_or(Some(-1))?;
            (left.abs_diff(right) <= 1).then_some(1 + left.max(right))
        })
        .is_none_or(|height| height.is_some())
    }

    /// Removes every key from the tree.
    pub fn clear(&mut self) {
        let released = self.len;
        drop_subtree(self.root.take());
        self.len = 0;
        debug!(released, "cleared tree");
    }

    pub(crate) fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Inorder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}

impl<K> IntoIterator for Tree<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = std::mem::take(&mut self.len);
        IntoIter::new(self.root.take(), len)
    }
}

/// Drops a subtree one node at a time so that tall trees don't overflow the stack.
fn drop_subtree<K>(root: Link<K>) {
    let mut stack: Vec<Box<Node<K>>> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// Removes the node `link` points at, replacing it with whatever keeps the BST invariant.
fn unlink<K>(link: &mut Link<K>)
where
    K: Ord,
{
    let Some(mut node) = link.take() else {
        return;
    };
    *link = match (node.left.take(), node.right.take()) {
        (None, None) => None,
        (Some(child), None) | (None, Some(child)) => Some(child),
        (Some(left), Some(right)) => {
            let mut right = Some(right);
            if let Some(successor) = take_min(&mut right) {
                node.key = successor;
            }
            node.left = Some(left);
            node.right = right;

            if cfg!(debug_assertions) {
                if let Some(left) = node.left.as_deref() {
                    assert!(left.key < node.key);
                }
                if let Some(right) = node.right.as_deref() {
                    assert!(node.key < right.key);
                }
            }
            Some(node)
        }
    };
}

/// Unlinks the leftmost node of the subtree and returns its key. The node's right child (it
/// can't have a left one) takes its place.
fn take_min<K>(mut link: &mut Link<K>) -> Option<K> {
    while link.as_ref()?.left.is_some() {
        if let Some(node) = link {
            link = &mut node.left;
        }
    }
    let node = link.take()?;
    let Node { key, right, .. } = *node;
    *link = right;
    Some(key)
}

/// Folds a subtree bottom-up with an explicit stack. `combine` gets each node along with the
/// results for its left and right subtrees (`None` where there is no child).
fn fold_postorder<'a, K, T>(
    root: Option<&'a Node<K>>,
    mut combine: impl FnMut(&'a Node<K>, Option<T>, Option<T>) -> T,
) -> Option<T> {
    let mut stack: Vec<(&Node<K>, bool)> = root.map(|n| (n, false)).into_iter().collect();
    // Left subtrees finish before right ones, so a node's right result is on top.
    let mut done: Vec<T> = Vec::new();

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            let right = node.right.as_ref().and_then(|_| done.pop());
            let left = node.left.as_ref().and_then(|_| done.pop());
            done.push(combine(node, left, right));
        } else {
            stack.push((node, true));
            stack.extend(node.right.as_deref().map(|n| (n, false)));
            stack.extend(node.left.as_deref().map(|n| (n, false)));
        }
    }
    done.pop()
}

fn height<K>(root: Option<&Node<K>>) -> isize {
    fold_postorder(root, |_, left, right| {
        1 + left.unwrap_or(-1).max(right.unwrap_or(-1))
    })
    .unwrap_or(-1)
}

/// Checks that every key lies strictly between the bounds its ancestors impose on it.
fn within_bounds<'a, K>(root: Option<&'a Node<K>>) -> bool
where
    K: Ord,
{
    let mut stack: Vec<(&'a Node<K>, Option<&'a K>, Option<&'a K>)> =
        root.map(|n| (n, None, None)).into_iter().collect();

    while let Some((node, lower, upper)) = stack.pop() {
        if lower.is_some_and(|lower| lower >= &node.key)
            || upper.is_some_and(|upper| upper <= &node.key)
        {
            return false;
        }
        stack.extend(node.left.as_deref().map(|left| (left, lower, Some(&node.key))));
        stack.extend(node.right.as_deref().map(|right| (right, Some(&node.key), upper)));
    }
    true
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;

    fn node_count<K>(bst: &Tree<K>) -> usize {
        fold_postorder(bst.root(), |_, left, right| {
            1 + left.unwrap_or(0) + right.unwrap_or(0)
        })
        .unwrap_or(0)
    }

    /// Applies a set of operations to a tree and a `BTreeSet`, checking every return value and
    /// the cached length against the actual nodes along the way.
    fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>)
    where
        K: Ord + Clone,
    {
        for op in ops {
            match op {
                Op::Insert(k) => assert_eq!(bst.insert(k.clone()), set.insert(k.clone())),
                Op::Delete(k) => assert_eq!(bst.delete(k), set.remove(k)),
                Op::Clear => {
                    bst.clear();
                    set.clear();
                }
                Op::Traverse => assert!(bst.inorder().eq(set.iter())),
            }
            assert_eq!(bst.len(), node_count(bst));
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set);
            tree.is_valid_bst() && tree.len() == set.len() && set.iter().all(|key| tree.contains(key))
        }
    }

    quickcheck::quickcheck! {
        fn height_is_bounded(xs: Vec<i8>) -> bool {
            let tree: Tree<_> = xs.into_iter().collect();
            let len = tree.len();
            let height = tree.height();

            // A binary tree of height h holds at most 2^(h+1) - 1 keys.
            height < len as isize && (len == 0 || len.ilog2() as isize <= height)
        }
    }
}
