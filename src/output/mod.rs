//! Aggregate output
//!
//! - `fenced` - `FencedFormatter`, the path + fenced contents format
//! - [`print_file`] - reads one file and hands it to an output

mod fenced;

use std::io;
use std::path::Path;

use tracing::warn;

use crate::tree::AggregateOutput;

pub use fenced::FencedFormatter;

/// Read `source` in full and emit it under the header `shown`.
///
/// A failed read is written in place of the contents and reported as
/// `Ok(false)`; the `Err` case is reserved for the output itself failing.
pub fn print_file<O: AggregateOutput + ?Sized>(
    output: &mut O,
    shown: &Path,
    source: &Path,
) -> io::Result<bool> {
    let contents = std::fs::read(source);
    let readable = contents.is_ok();
    if let Err(ref e) = contents {
        warn!(path = %shown.display(), error = %e, "cannot read file");
    }
    output.file_block(shown, contents)?;
    Ok(readable)
}
