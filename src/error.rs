//! Errors returned by [`Tree`][crate::Tree] operations that are not total.

/// A convenience alias for results of fallible tree operations.
pub type Result<T> = std::result::Result<T, TreeError>;

/// The ways a tree operation can fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// A key was required but none was given.
    #[error("key must be present")]
    InvalidKey,
    /// The operation needs at least one node in the tree.
    #[error("tree is empty")]
    EmptyTree,
}
