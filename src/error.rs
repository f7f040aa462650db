//! Error types for a collection run

use std::io;

use thiserror::Error;

/// Failures that abort a walk.
///
/// Per-entry problems (an unreadable directory, a file that vanished before it
/// could be read) are reported inline and never become a `CollectError`.
#[derive(Debug, Error)]
pub enum CollectError {
    /// Writing the aggregate to its destination failed.
    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, CollectError>;
