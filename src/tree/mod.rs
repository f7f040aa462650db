//! Directory tree walking logic
//!
//! `AggregateWalker` performs a single pre-order depth-first walk, pruning
//! ignored directories and handing every kept regular file to an
//! `AggregateOutput`.

mod config;
mod filter;
mod utils;
mod walker;

pub use config::IgnoreRules;
pub use filter::FileFilter;
pub use utils::{EntryKind, clean_root, display_path};
pub use walker::{AggregateOutput, AggregateWalker, WalkSummary};

#[cfg(any(test, feature = "test-utils"))]
pub use walker::collect_paths;
