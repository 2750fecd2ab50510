//! Header decoding: version word, attribute scanning and assembly.
//!
//! `scanner` drives the byte cursor through the attribute records,
//! `version` splits the version word, and `parser` ties both together with
//! the typed attribute decoder into an immutable `Header`.

pub mod error;
pub mod layout;
pub mod parser;
pub mod scanner;
pub mod version;

pub use error::HeaderError;
pub use parser::{parse_header, parse_header_bytes, parse_header_file, read_header};
pub use scanner::{ByteSpan, RawAttribute, scan_attributes};
pub use version::VersionDescriptor;
