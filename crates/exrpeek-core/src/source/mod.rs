//! Byte sources for header decoding.
//!
//! All I/O lives here: the cursor wraps any `BufRead` (in-memory slices,
//! buffered files, stdin) and only ever moves forward.

pub mod error;
pub mod file;
pub mod reader;

pub use error::SourceError;
pub use file::open_file;
pub use reader::ByteCursor;
