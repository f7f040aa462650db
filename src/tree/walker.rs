//! AggregateWalker - depth-first walk that feeds every kept file to an output

use std::fmt;
use std::io;
use std::path::Path;

use ignore::WalkBuilder;
use tracing::{debug, info, trace, warn};

use crate::error::Result;
use crate::output::print_file;

use super::config::IgnoreRules;
use super::filter::FileFilter;
use super::utils::{EntryKind, display_path};

/// Receives the walk's results in traversal order.
pub trait AggregateOutput {
    /// Emit one file, or the reason it could not be read.
    fn file_block(&mut self, path: &Path, contents: io::Result<Vec<u8>>) -> io::Result<()>;

    /// Report a path the traversal could not access.
    fn access_error(&mut self, path: &Path, error: &dyn fmt::Display) -> io::Result<()>;

    fn finish(&mut self) -> io::Result<()>;
}

/// Counters for a finished walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Blocks written, including ones carrying a read error.
    pub files: usize,
    pub read_errors: usize,
    pub access_errors: usize,
}

/// Pre-order depth-first walker that prunes ignored directories.
pub struct AggregateWalker {
    filter: FileFilter,
}

impl Default for AggregateWalker {
    fn default() -> Self {
        Self::new(IgnoreRules::default())
    }
}

impl AggregateWalker {
    pub fn new(rules: IgnoreRules) -> Self {
        Self {
            filter: FileFilter::new(rules),
        }
    }

    /// Walk `root`, writing each kept regular file to `output`.
    ///
    /// Entries that cannot be accessed or read are reported through `output`
    /// and skipped. Only a failure to write the output ends the walk early.
    pub fn walk<O: AggregateOutput>(&self, root: &Path, output: &mut O) -> Result<WalkSummary> {
        let mut summary = WalkSummary::default();

        let prune = self.filter.clone();
        let prune_root = root.to_path_buf();
        let walk = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                let shown = display_path(&prune_root, entry.path());
                let kind = EntryKind::from_file_type(entry.file_type());
                let ignored = prune.is_ignored(&shown, kind);
                if ignored {
                    if kind.is_dir() {
                        debug!(path = %shown.display(), "pruning ignored directory");
                    } else {
                        debug!(path = %shown.display(), "skipping ignored file");
                    }
                }
                !ignored
            })
            .build();

        for result in walk {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    let (path, cause) = split_error(&err);
                    let shown = path
                        .map(|p| display_path(root, p))
                        .unwrap_or_else(|| root.to_path_buf());
                    warn!(path = %shown.display(), error = %cause, "cannot access path");
                    output.access_error(&shown, cause)?;
                    summary.access_errors += 1;
                    continue;
                }
            };

            let shown = display_path(root, entry.path());
            let kind = EntryKind::from_file_type(entry.file_type());

            if entry.depth() == 0 {
                // The root is followed even with follow_links(false).
                if entry.path_is_symlink() {
                    trace!(path = %shown.display(), "root is a symlink");
                    break;
                }
                // The walk never hands its root to filter_entry.
                if self.filter.is_ignored(&shown, kind) {
                    debug!(path = %shown.display(), "root is ignored");
                    if kind.is_dir() {
                        break;
                    }
                    continue;
                }
            }

            match kind {
                EntryKind::File => {
                    if !print_file(output, &shown, entry.path())? {
                        summary.read_errors += 1;
                    }
                    summary.files += 1;
                }
                EntryKind::Dir => {}
                EntryKind::Other => {
                    trace!(path = %shown.display(), "skipping non-regular entry");
                }
            }
        }

        output.finish()?;
        info!(
            files = summary.files,
            read_errors = summary.read_errors,
            access_errors = summary.access_errors,
            "walk complete"
        );
        Ok(summary)
    }
}

/// Separate the path an error is about from the underlying cause.
fn split_error(err: &ignore::Error) -> (Option<&Path>, &ignore::Error) {
    match err {
        ignore::Error::WithDepth { err, .. } => split_error(err),
        ignore::Error::WithPath { path, err } => (Some(path.as_path()), err.as_ref()),
        other => (None, other),
    }
}

/// Collect the display paths of every file a walk would print, in order.
#[cfg(any(test, feature = "test-utils"))]
pub fn collect_paths(root: &Path, rules: IgnoreRules) -> Result<Vec<std::path::PathBuf>> {
    use std::path::PathBuf;

    struct PathsOnly(Vec<PathBuf>);

    impl AggregateOutput for PathsOnly {
        fn file_block(&mut self, path: &Path, _contents: io::Result<Vec<u8>>) -> io::Result<()> {
            self.0.push(path.to_path_buf());
            Ok(())
        }

        fn access_error(&mut self, _path: &Path, _error: &dyn fmt::Display) -> io::Result<()> {
            Ok(())
        }

        fn finish(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let mut paths = PathsOnly(Vec::new());
    AggregateWalker::new(rules).walk(root, &mut paths)?;
    Ok(paths.0)
}
