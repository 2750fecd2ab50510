use thiserror::Error;

use crate::attribute::AttributeError;
use crate::source::SourceError;

/// Errors returned by header parsing.
///
/// Every variant is terminal for the parse that produced it and carries the
/// offset and/or attribute index needed to locate the problem.
///
/// # Examples
/// ```
/// use exrpeek_core::{HeaderError, parse_header_bytes};
///
/// let err = parse_header_bytes(&[0x76, 0x2f]).unwrap_err();
/// assert!(matches!(err, HeaderError::UnexpectedEof { field: "magic", .. }));
/// ```
#[derive(Debug, Error)]
pub enum HeaderError {
    #[error("unexpected end of input reading {field}: {source}")]
    UnexpectedEof {
        field: &'static str,
        #[source]
        source: SourceError,
    },
    #[error("header truncated after {attributes_read} complete attributes: {source}")]
    TruncatedHeader {
        attributes_read: usize,
        #[source]
        source: SourceError,
    },
    #[error(
        "malformed header at offset {offset}: attribute #{attribute_index} declares negative size {size}"
    )]
    MalformedHeader {
        offset: u64,
        attribute_index: usize,
        size: i32,
    },
    #[error("malformed attribute #{attribute_index} '{name}' ({type_tag}) at offset {offset}: {source}")]
    MalformedAttribute {
        offset: u64,
        attribute_index: usize,
        name: String,
        type_tag: String,
        #[source]
        source: AttributeError,
    },
    #[error("attribute #{attribute_index} {field} at offset {offset} is not valid UTF-8")]
    TextDecode {
        offset: u64,
        attribute_index: usize,
        field: &'static str,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HeaderError {
    pub(crate) fn unexpected_eof(field: &'static str, err: SourceError) -> Self {
        match err {
            SourceError::Io(err) => HeaderError::Io(err),
            eof => HeaderError::UnexpectedEof { field, source: eof },
        }
    }

    pub(crate) fn truncated(attributes_read: usize, err: SourceError) -> Self {
        match err {
            SourceError::Io(err) => HeaderError::Io(err),
            eof => HeaderError::TruncatedHeader {
                attributes_read,
                source: eof,
            },
        }
    }
}

impl From<SourceError> for HeaderError {
    fn from(value: SourceError) -> Self {
        HeaderError::unexpected_eof("input", value)
    }
}
