//! Fenced block output formatting
//!
//! `FencedFormatter` writes each file as its path followed by the raw contents
//! between two ``` fence lines.

use std::fmt;
use std::io::{self, Write};
use std::path::Path;

use crate::tree::AggregateOutput;

const FENCE: &str = "```";
const READ_ERROR_BANNER: &str = "!!! FILE READ ERROR !!!";

/// Writes fenced file blocks to any `Write` destination.
pub struct FencedFormatter<W: Write> {
    out: W,
}

impl<W: Write> FencedFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the banner naming the directory being scanned.
    pub fn banner(&mut self, root: &Path) -> io::Result<()> {
        writeln!(
            self.out,
            "Scanning and aggregating files in directory: {}\n",
            root.display()
        )
    }

    /// Take back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> AggregateOutput for FencedFormatter<W> {
    fn file_block(&mut self, path: &Path, contents: io::Result<Vec<u8>>) -> io::Result<()> {
        writeln!(self.out, "{}:", path.display())?;
        writeln!(self.out, "{}", FENCE)?;

        match contents {
            Ok(bytes) => {
                self.out.write_all(&bytes)?;
                // Keep the closing fence on its own line.
                if bytes.last().is_some_and(|&b| b != b'\n') {
                    self.out.write_all(b"\n")?;
                }
            }
            Err(e) => {
                writeln!(self.out, "{}", READ_ERROR_BANNER)?;
                writeln!(self.out, "{}", e)?;
            }
        }

        writeln!(self.out, "{}", FENCE)
    }

    fn access_error(&mut self, path: &Path, error: &dyn fmt::Display) -> io::Result<()> {
        writeln!(self.out, "Error accessing path {}: {}", path.display(), error)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(path: &str, contents: io::Result<Vec<u8>>) -> Vec<u8> {
        let mut formatter = FencedFormatter::new(Vec::new());
        formatter
            .file_block(Path::new(path), contents)
            .expect("writing to a Vec cannot fail");
        formatter.into_inner()
    }

    #[test]
    fn test_block_layout() {
        let out = render("src/main.rs", Ok(b"fn main() {}\n".to_vec()));
        assert_eq!(out, b"src/main.rs:\n```\nfn main() {}\n```\n");
    }

    #[test]
    fn test_content_without_trailing_newline() {
        let out = render("a.go", Ok(b"package a".to_vec()));
        assert_eq!(out, b"a.go:\n```\npackage a\n```\n");
    }

    #[test]
    fn test_empty_file() {
        let out = render("empty.txt", Ok(Vec::new()));
        assert_eq!(out, b"empty.txt:\n```\n```\n");
    }

    #[test]
    fn test_binary_content_is_verbatim() {
        let bytes = vec![0x00, 0xff, 0xfe, b'\n', 0x80, b'`', b'\n'];
        let out = render("blob.bin", Ok(bytes.clone()));

        let mut expected = b"blob.bin:\n```\n".to_vec();
        expected.extend_from_slice(&bytes);
        expected.extend_from_slice(b"```\n");
        assert_eq!(out, expected);
    }

    #[test]
    fn test_read_error_replaces_content() {
        let err = io::Error::new(io::ErrorKind::NotFound, "gone missing");
        let out = String::from_utf8(render("lost.txt", Err(err))).unwrap();
        assert_eq!(out, "lost.txt:\n```\n!!! FILE READ ERROR !!!\ngone missing\n```\n");
    }

    #[test]
    fn test_banner_and_access_error() {
        let mut formatter = FencedFormatter::new(Vec::new());
        formatter.banner(Path::new(".")).unwrap();
        formatter
            .access_error(Path::new("secret"), &"permission denied")
            .unwrap();
        let out = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(
            out,
            "Scanning and aggregating files in directory: .\n\n\
             Error accessing path secret: permission denied\n"
        );
    }
}
