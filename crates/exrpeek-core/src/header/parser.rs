use std::io::BufRead;
use std::path::Path;

use tracing::{debug, trace};

use crate::attribute::layout::IMAGE_TYPE_ATTRIBUTE;
use crate::attribute::parser::{classification_text, decode_attribute_value, is_deep_image_type};
use crate::source::{ByteCursor, open_file};
use crate::{Attribute, Header};

use super::error::HeaderError;
use super::scanner::scan_attributes;
use super::version::VersionDescriptor;

/// Parse a header from any buffered byte source.
///
/// Reading stops right after the header sentinel; pixel data is never
/// touched.
///
/// # Errors
/// Returns `HeaderError` for truncated or malformed input.
pub fn parse_header<R: BufRead>(reader: R) -> Result<Header, HeaderError> {
    let mut cursor = ByteCursor::new(reader);
    read_header(&mut cursor)
}

/// Parse a header from an in-memory buffer.
///
/// # Examples
/// ```
/// use exrpeek_core::parse_header_bytes;
///
/// let mut bytes = Vec::new();
/// bytes.extend_from_slice(&exrpeek_core::EXR_MAGIC.to_le_bytes());
/// bytes.extend_from_slice(&2u32.to_le_bytes());
/// bytes.extend_from_slice(b"foo\0int\0");
/// bytes.extend_from_slice(&4i32.to_le_bytes());
/// bytes.extend_from_slice(&42i32.to_le_bytes());
/// bytes.push(0);
///
/// let header = parse_header_bytes(&bytes)?;
/// assert!(header.has_expected_magic());
/// assert_eq!(header.attributes().len(), 1);
/// # Ok::<(), exrpeek_core::HeaderError>(())
/// ```
pub fn parse_header_bytes(bytes: &[u8]) -> Result<Header, HeaderError> {
    parse_header(bytes)
}

/// Open a file and parse its header.
///
/// # Errors
/// Returns `HeaderError::Io` when the file cannot be opened or read.
pub fn parse_header_file(path: &Path) -> Result<Header, HeaderError> {
    let mut cursor = open_file(path)?;
    let header = read_header(&mut cursor)?;
    debug!(path = %path.display(), attributes = header.attributes().len(), "header parsed");
    Ok(header)
}

/// Assemble a header from a cursor positioned at the start of the file.
pub fn read_header<R: BufRead>(cursor: &mut ByteCursor<R>) -> Result<Header, HeaderError> {
    let magic = cursor
        .read_u32_le()
        .map_err(|err| HeaderError::unexpected_eof("magic", err))?;
    let word = cursor
        .read_u32_le()
        .map_err(|err| HeaderError::unexpected_eof("version", err))?;
    trace!(magic, word, "version word read");
    let version = VersionDescriptor::from_word(word);

    let raw_attributes = scan_attributes(cursor)?;
    let mut attributes = Vec::with_capacity(raw_attributes.len());
    let mut image_type = None;
    let mut deep_by_type = false;

    for (attribute_index, raw) in raw_attributes.into_iter().enumerate() {
        let value = decode_attribute_value(&raw.type_tag, &raw.data).map_err(|source| {
            HeaderError::MalformedAttribute {
                offset: raw.span.offset,
                attribute_index,
                name: raw.name.clone(),
                type_tag: raw.type_tag.clone(),
                source,
            }
        })?;

        if raw.name == IMAGE_TYPE_ATTRIBUTE {
            let text = classification_text(&raw.data);
            deep_by_type |= is_deep_image_type(&text);
            if image_type.is_none() {
                image_type = Some(text);
            }
        }
        attributes.push(Attribute { raw, value });
    }

    if version.deep_data != deep_by_type {
        debug!(
            deep_by_version = version.deep_data,
            deep_by_type, "deep data signals disagree"
        );
    }

    Ok(Header {
        magic,
        version,
        attributes,
        image_type,
        deep_by_type,
        header_len: cursor.position(),
    })
}
