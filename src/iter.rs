//! Iterators walking a [`Tree`][crate::Tree] in the classic depth-first orders and
//! breadth-first. They keep their own stack (or queue) instead of recursing so a tree built
//! from sorted keys can be walked no matter how tall it is.

use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;

use crate::tree::{Link, Node};

/// Every iterator here knows exactly how many keys it has left because the tree caches its
/// length.
macro_rules! exact_size {
    ([$($generics:tt)*] $iter:ty => $item:ty) => {
        impl<$($generics)*> Iterator for $iter {
            type Item = $item;

            fn next(&mut self) -> Option<Self::Item> {
                let next = self.advance()?;
                self.remaining = self.remaining.saturating_sub(1);
                Some(next)
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                (self.remaining, Some(self.remaining))
            }
        }

        impl<$($generics)*> ExactSizeIterator for $iter {}

        impl<$($generics)*> FusedIterator for $iter {}
    };
}

/// The borrowing iterators clone cheaply (they only hold references) and debug-print the keys
/// they have left.
macro_rules! clone_and_debug {
    ($($iter:ident { $pending:ident }),* $(,)?) => {$(
        impl<K> Clone for $iter<'_, K> {
            fn clone(&self) -> Self {
                Self {
                    $pending: self.$pending.clone(),
                    remaining: self.remaining,
                }
            }
        }

        impl<K> fmt::Debug for $iter<'_, K>
        where
            K: fmt::Debug,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.clone()).finish()
            }
        }
    )*};
}

/// Pre-order iterator: a node, then its left subtree, then its right subtree. Created by
/// [`Tree::preorder`][crate::Tree::preorder].
pub struct Preorder<'a, K> {
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Preorder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        Self {
            stack: root.into_iter().collect(),
            remaining: len,
        }
    }

    fn advance(&mut self) -> Option<&'a K> {
        let node = self.stack.pop()?;
        // Right goes on first so that the left subtree is popped first.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.key)
    }
}

exact_size!(['a, K] Preorder<'a, K> => &'a K);

/// In-order iterator yielding keys in ascending order. Created by
/// [`Tree::inorder`][crate::Tree::inorder].
pub struct Inorder<'a, K> {
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Inorder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left(root);
        iter
    }

    /// Pushes `node` and its whole chain of left children.
    fn push_left(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }

    fn advance(&mut self) -> Option<&'a K> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(&node.key)
    }
}

exact_size!(['a, K] Inorder<'a, K> => &'a K);

/// Post-order iterator: a node's left subtree, then its right subtree, then the node. Created
/// by [`Tree::postorder`][crate::Tree::postorder].
pub struct Postorder<'a, K> {
    /// Nodes paired with whether their children have already been pushed.
    stack: Vec<(&'a Node<K>, bool)>,
    remaining: usize,
}

impl<'a, K> Postorder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        Self {
            stack: root.map(|n| (n, false)).into_iter().collect(),
            remaining: len,
        }
    }

    fn advance(&mut self) -> Option<&'a K> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(&node.key);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right.as_deref().map(|n| (n, false)));
            self.stack.extend(node.left.as_deref().map(|n| (n, false)));
        }
    }
}

exact_size!(['a, K] Postorder<'a, K> => &'a K);

/// Breadth-first iterator: the root, then every node one edge down (left to right), and so
/// on. Created by [`Tree::level_order`][crate::Tree::level_order].
pub struct LevelOrder<'a, K> {
    queue: VecDeque<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> LevelOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        Self {
            queue: root.into_iter().collect(),
            remaining: len,
        }
    }

    fn advance(&mut self) -> Option<&'a K> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left.as_deref());
        self.queue.extend(node.right.as_deref());
        Some(&node.key)
    }
}

exact_size!(['a, K] LevelOrder<'a, K> => &'a K);

clone_and_debug!(
    Preorder { stack },
    Inorder { stack },
    Postorder { stack },
    LevelOrder { queue },
);

/// Owning in-order iterator. Created by calling `into_iter` on a [`Tree`][crate::Tree].
pub struct IntoIter<K> {
    /// Nodes whose left subtree has already been taken (and is on the stack above them).
    stack: Vec<Box<Node<K>>>,
    remaining: usize,
}

impl<K> IntoIter<K> {
    pub(crate) fn new(root: Link<K>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left(root);
        iter
    }

    fn push_left(&mut self, mut link: Link<K>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }

    fn advance(&mut self) -> Option<K> {
        let node = self.stack.pop()?;
        let Node { key, right, .. } = *node;
        self.push_left(right);
        Some(key)
    }
}

exact_size!([K] IntoIter<K> => K);

impl<K> Drop for IntoIter<K> {
    fn drop(&mut self) {
        // Walking the rest frees one node at a time instead of recursing into right subtrees.
        for _ in self.by_ref() {}
    }
}
