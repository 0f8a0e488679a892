//! Draws a tree on its side: larger keys above their parent, smaller keys below it. Reading
//! the lines top to bottom gives the keys in descending order.
//!
//! ```
//! use bst_set::Tree;
//!
//! let tree: Tree<_> = [2, 1, 3].into_iter().collect();
//!
//! assert_eq!(
//!     tree.to_string(),
//!     "│   ┌── 3\n\
//!      └── 2\n    \
//!          └── 1\n"
//! );
//! ```

use std::fmt;

use crate::tree::{Node, Tree};

impl<K> fmt::Display for Tree<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut prefix = String::new();
        let mut stack: Vec<Frame<'_, K>> = self
            .root()
            .map(|root| Frame::Visit {
                node: root,
                parent_len: 0,
                segment: "",
                is_left: true,
            })
            .into_iter()
            .collect();

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Visit {
                    node,
                    parent_len,
                    segment,
                    is_left,
                } => {
                    prefix.truncate(parent_len);
                    prefix.push_str(segment);
                    let prefix_len = prefix.len();

                    // Pushed in reverse: right subtree, then this line, then the left subtree.
                    if let Some(left) = node.left.as_deref() {
                        stack.push(Frame::Visit {
                            node: left,
                            parent_len: prefix_len,
                            segment: if is_left { "    " } else { "│   " },
                            is_left: true,
                        });
                    }
                    stack.push(Frame::Line {
                        node,
                        prefix_len,
                        is_left,
                    });
                    if let Some(right) = node.right.as_deref() {
                        stack.push(Frame::Visit {
                            node: right,
                            parent_len: prefix_len,
                            segment: if is_left { "│   " } else { "    " },
                            is_left: false,
                        });
                    }
                }
                Frame::Line {
                    node,
                    prefix_len,
                    is_left,
                } => {
                    prefix.truncate(prefix_len);
                    let connector = if is_left { "└── " } else { "┌── " };
                    writeln!(f, "{prefix}{connector}{}", node.key)?;
                }
            }
        }
        Ok(())
    }
}

/// Pending work while drawing. `is_left` is true for left children and for the root.
enum Frame<'a, K> {
    /// Draw the subtree under `node`. Its lines start with the first `parent_len` bytes of the
    /// prefix followed by `segment`.
    Visit {
        node: &'a Node<K>,
        parent_len: usize,
        segment: &'static str,
        is_left: bool,
    },
    /// Write the line for `node` itself.
    Line {
        node: &'a Node<K>,
        prefix_len: usize,
        is_left: bool,
    },
}
