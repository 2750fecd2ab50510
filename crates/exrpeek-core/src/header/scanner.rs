use std::io::BufRead;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::common::text::decode_strict;
use crate::source::ByteCursor;

use super::error::HeaderError;

/// Location of an attribute's data inside the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByteSpan {
    pub offset: u64,
    pub len: u32,
}

/// One attribute record exactly as stored, before typed decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAttribute {
    pub name: String,
    pub type_tag: String,
    pub size: u32,
    pub span: ByteSpan,
    #[serde(skip)]
    pub data: Vec<u8>,
}

/// Read attribute records until the empty-name sentinel.
///
/// Records are returned in file order; duplicate names are kept.
///
/// # Errors
/// - `TruncatedHeader` when the source ends mid-record.
/// - `MalformedHeader` when a record declares a negative size.
/// - `TextDecode` when a name or type tag is not valid UTF-8.
pub fn scan_attributes<R: BufRead>(
    cursor: &mut ByteCursor<R>,
) -> Result<Vec<RawAttribute>, HeaderError> {
    let mut attributes = Vec::new();

    loop {
        let index = attributes.len();
        let name = read_text(cursor, index, "name")?;
        if name.is_empty() {
            debug!(attributes = index, end = cursor.position(), "header sentinel reached");
            return Ok(attributes);
        }
        let type_tag = read_text(cursor, index, "type tag")?;

        let size_offset = cursor.position();
        let size = cursor
            .read_i32_le()
            .map_err(|err| HeaderError::truncated(index, err))?;
        let size = u32::try_from(size).map_err(|_| HeaderError::MalformedHeader {
            offset: size_offset,
            attribute_index: index,
            size,
        })?;

        let span = ByteSpan {
            offset: cursor.position(),
            len: size,
        };
        let data = cursor
            .read_exact(size as usize)
            .map_err(|err| HeaderError::truncated(index, err))?;

        debug!(
            index,
            name = %name,
            type_tag = %type_tag,
            size,
            offset = span.offset,
            "attribute scanned"
        );
        attributes.push(RawAttribute {
            name,
            type_tag,
            size,
            span,
            data,
        });
    }
}

fn read_text<R: BufRead>(
    cursor: &mut ByteCursor<R>,
    attribute_index: usize,
    field: &'static str,
) -> Result<String, HeaderError> {
    let offset = cursor.position();
    let bytes = cursor
        .read_null_terminated_bytes()
        .map_err(|err| HeaderError::truncated(attribute_index, err))?;
    decode_strict(bytes).ok_or(HeaderError::TextDecode {
        offset,
        attribute_index,
        field,
    })
}
