//! This crate exposes an ordered set of keys backed by a plain, unbalanced Binary Search Tree
//! (BST), mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key
//! and will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). This tree does no rebalancing, so keys inserted
//! in sorted order produce a tree whose height is one less than its size. BSTs also naturally
//! support sorted iteration by visiting the left subtree, then the subtree root, then the right
//! subtree.
//!
//! # Examples
//!
//! ```
//! use bst_set::Tree;
//!
//! let tree: Tree<_> = [10, 5, 15, 3, 7, 12, 18].into_iter().collect();
//!
//! assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [3, 5, 7, 10, 12, 15, 18]);
//! assert_eq!(tree.preorder().copied().collect::<Vec<_>>(), [10, 5, 3, 7, 15, 12, 18]);
//! assert_eq!(tree.height(), 2);
//! assert!(tree.is_balanced());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod display;
pub mod error;
pub mod iter;
pub mod tree;


pub use error::{Result, TreeError};
pub use tree::Tree;
