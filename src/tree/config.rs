//! Ignore rules applied during the walk

/// Fixed set of names that are left out of the aggregate.
#[derive(Debug, Clone)]
pub struct IgnoreRules {
    /// Exact display paths that are always skipped, whatever their kind.
    pub self_references: Vec<String>,
    /// Directory base names whose whole subtree is pruned.
    pub dir_names: Vec<String>,
    /// Exact base names of files to skip.
    pub file_names: Vec<String>,
    /// File base name endings to skip (checksums, locks, objects, executables).
    pub suffixes: Vec<String>,
}

const SELF_REFERENCES: &[&str] = &["file_aggregator.go", "./file_aggregator.go"];
const DIR_NAMES: &[&str] = &[".git", "node_modules", "vendor", ".idea"];
const FILE_NAMES: &[&str] = &["pnpm-lock.yaml"];
const SUFFIXES: &[&str] = &[".sum", ".lock", ".o", ".exe"];

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Default for IgnoreRules {
    fn default() -> Self {
        Self {
            self_references: owned(SELF_REFERENCES),
            dir_names: owned(DIR_NAMES),
            file_names: owned(FILE_NAMES),
            suffixes: owned(SUFFIXES),
        }
    }
}

impl IgnoreRules {
    /// Rules that ignore nothing.
    pub fn empty() -> Self {
        Self {
            self_references: Vec::new(),
            dir_names: Vec::new(),
            file_names: Vec::new(),
            suffixes: Vec::new(),
        }
    }
}
