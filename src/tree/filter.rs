//! File filtering for tree walking

use std::path::Path;

use super::config::IgnoreRules;
use super::utils::{EntryKind, base_name};

/// Decides which entries are left out of the aggregate.
#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    rules: IgnoreRules,
}

impl FileFilter {
    pub fn new(rules: IgnoreRules) -> Self {
        Self { rules }
    }

    /// Check if an entry should be ignored.
    ///
    /// `path` is the display path. An ignored directory takes its whole
    /// subtree with it.
    pub fn is_ignored(&self, path: &Path, kind: EntryKind) -> bool {
        // Applies to any kind, although it only ever names a file.
        let text = path.to_string_lossy();
        if self.rules.self_references.iter().any(|r| *r == text) {
            return true;
        }

        let name = base_name(path);
        if kind.is_dir() {
            self.rules.dir_names.iter().any(|d| *d == name)
        } else {
            self.rules.file_names.iter().any(|f| *f == name)
                || self.rules.suffixes.iter().any(|s| name.ends_with(s.as_str()))
        }
    }
}
