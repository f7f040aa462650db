//! Shared utility functions for tree walking

use std::fs::FileType;
use std::path::{Component, Path, PathBuf};

/// What the walk found at a path, as far as filtering and printing care.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    /// A regular file.
    File,
    /// Symlinks, devices, sockets and fifos.
    Other,
}

impl EntryKind {
    pub fn from_file_type(file_type: Option<FileType>) -> Self {
        match file_type {
            Some(ft) if ft.is_dir() => EntryKind::Dir,
            Some(ft) if ft.is_file() => EntryKind::File,
            _ => EntryKind::Other,
        }
    }

    pub fn is_dir(self) -> bool {
        self == EntryKind::Dir
    }
}

/// Lexically clean a root: `.` components go, and `..` cancels the name
/// before it. `.` becomes empty, `./src/` becomes `src`, `a/../b` becomes `b`.
pub fn clean_root(root: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();
    for component in root.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last().copied() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                // `/..` is `/`.
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }
    parts.into_iter().collect()
}

/// Path as shown in block headers and matched by the self-reference rule.
///
/// The root itself is shown exactly as given. Anything below it is the
/// cleaned root joined with the relative part, so a walk of `.` prints
/// `src/main.rs` rather than `./src/main.rs`.
pub fn display_path(root: &Path, path: &Path) -> PathBuf {
    match path.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => root.to_path_buf(),
        Ok(rel) => clean_root(root).join(rel),
        Err(_) => path.to_path_buf(),
    }
}

/// Base name of a path, lossily converted.
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_path_strips_current_dir() {
        let root = Path::new(".");
        assert_eq!(display_path(root, Path::new("./a.go")), PathBuf::from("a.go"));
        assert_eq!(
            display_path(root, Path::new("./src/lib.rs")),
            PathBuf::from("src/lib.rs")
        );
    }

    #[test]
    fn test_display_path_keeps_root_verbatim() {
        assert_eq!(display_path(Path::new("."), Path::new(".")), PathBuf::from("."));
        assert_eq!(
            display_path(Path::new("./proj"), Path::new("./proj")),
            PathBuf::from("./proj")
        );
    }

    #[test]
    fn test_display_path_nested_root() {
        let root = Path::new("./proj/");
        assert_eq!(
            display_path(root, Path::new("./proj/main.go")),
            PathBuf::from("proj/main.go")
        );
        assert_eq!(
            display_path(Path::new("/tmp/x"), Path::new("/tmp/x/y/z.rs")),
            PathBuf::from("/tmp/x/y/z.rs")
        );
    }

    #[test]
    fn test_display_path_resolves_parent_components() {
        assert_eq!(
            display_path(Path::new("a/../b"), Path::new("a/../b/main.go")),
            PathBuf::from("b/main.go")
        );
        assert_eq!(
            display_path(Path::new("a/../b"), Path::new("a/../b")),
            PathBuf::from("a/../b")
        );
    }

    #[test]
    fn test_clean_root() {
        assert_eq!(clean_root(Path::new(".")), PathBuf::new());
        assert_eq!(clean_root(Path::new("./a/./b/")), PathBuf::from("a/b"));
        assert_eq!(clean_root(Path::new("../a")), PathBuf::from("../a"));
        assert_eq!(clean_root(Path::new("a/../b")), PathBuf::from("b"));
        assert_eq!(clean_root(Path::new("a/..")), PathBuf::new());
        assert_eq!(clean_root(Path::new("../../x/../y")), PathBuf::from("../../y"));
        assert_eq!(clean_root(Path::new("/../etc")), PathBuf::from("/etc"));
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name(Path::new("a/b/go.sum")), "go.sum");
        assert_eq!(base_name(Path::new("/")), "");
    }
}
