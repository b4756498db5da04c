//! Writer errors.

use std::io;

use thiserror::Error;

/// Errors produced by [`HtmlTextWriter`](crate::HtmlTextWriter).
#[derive(Debug, Error)]
pub enum WriterError {
    /// `render_end_tag` was called with no open tag. This is a caller bug:
    /// begin and end calls are not balanced.
    #[error("unbalanced nesting: render_end_tag called with no open tag")]
    UnbalancedNesting,

    /// The underlying sink failed.
    #[error("sink write failed: {0}")]
    Io(#[from] io::Error),
}

/// Result alias used by every writing operation.
pub type WriteResult<T = ()> = Result<T, WriterError>;
