use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::error::SourceError;
use super::reader::ByteCursor;

/// Open a file as a buffered, forward-only byte cursor.
///
/// Only the header is ever pulled from the file, so the buffer stays small
/// regardless of how much pixel data follows.
///
/// # Errors
/// Returns `SourceError::Io` when the file cannot be opened.
pub fn open_file(path: &Path) -> Result<ByteCursor<BufReader<File>>, SourceError> {
    let file = File::open(path)?;
    Ok(ByteCursor::new(BufReader::new(file)))
}
