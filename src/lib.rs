//! Collector - concatenate a source tree into one fenced text snapshot

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::CollectError;
pub use output::{FencedFormatter, print_file};
pub use tree::{AggregateOutput, AggregateWalker, FileFilter, IgnoreRules, WalkSummary};
