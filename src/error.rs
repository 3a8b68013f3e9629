use thiserror::Error;

/// Error returned by operations that are undefined on an empty tree, such as
/// [`Tree::is_balanced`](crate::Tree::is_balanced). Lookups don't use this —
/// an absent value is an ordinary `None`, not a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("operation is undefined on an empty tree")]
pub struct EmptyTreeError;
