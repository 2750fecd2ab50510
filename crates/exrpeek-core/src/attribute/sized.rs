use crate::common::text::decode_sized;

use super::error::AttributeError;
use super::layout;
use super::reader::AttributeReader;
use super::value::Preview;

/// Decode a `stringvector` span: i32-length-prefixed texts filling the span.
///
/// The entry count is implied by the span size, so every entry must end
/// exactly at the span end.
pub fn parse_string_vector(data: &[u8]) -> Result<Vec<String>, AttributeError> {
    let mut reader = AttributeReader::new(data);
    let mut texts = Vec::new();

    while !reader.is_exhausted() {
        let offset = reader.offset();
        let length = reader.read_i32_le()?;
        let length =
            usize::try_from(length).map_err(|_| AttributeError::NegativeStringLength {
                offset,
                length,
            })?;
        texts.push(decode_sized(reader.read_slice(length)?));
    }

    Ok(texts)
}

/// Decode a `preview` span: width, height, then `4 * width * height` RGBA
/// bytes and nothing else.
pub fn parse_preview(data: &[u8]) -> Result<Preview, AttributeError> {
    let mut reader = AttributeReader::new(data);
    let width = reader.read_u32_le()?;
    let height = reader.read_u32_le()?;

    let expected = u64::from(width)
        .checked_mul(u64::from(height))
        .and_then(|pixels| pixels.checked_mul(layout::PREVIEW_BYTES_PER_PIXEL))
        .and_then(|bytes| bytes.checked_add(layout::PREVIEW_HEADER_LEN as u64));
    if expected != Some(data.len() as u64) {
        return Err(AttributeError::PreviewSizeMismatch {
            width,
            height,
            expected: expected.unwrap_or(u64::MAX),
            actual: data.len(),
        });
    }

    Ok(Preview {
        width,
        height,
        pixels: reader.read_slice(reader.remaining())?.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::{parse_preview, parse_string_vector};
    use crate::attribute::error::AttributeError;

    fn sized(text: &str) -> Vec<u8> {
        let mut out = (text.len() as i32).to_le_bytes().to_vec();
        out.extend_from_slice(text.as_bytes());
        out
    }

    #[test]
    fn string_vector_entries_in_order() {
        let mut data = sized("left");
        data.extend(sized(""));
        data.extend(sized("right"));
        assert_eq!(parse_string_vector(&data).unwrap(), vec!["left", "", "right"]);
    }

    #[test]
    fn string_vector_empty_span() {
        assert!(parse_string_vector(&[]).unwrap().is_empty());
    }

    #[test]
    fn string_vector_entry_past_span_end() {
        let mut data = sized("left");
        data.truncate(6);
        let err = parse_string_vector(&data).unwrap_err();
        assert_eq!(err, AttributeError::TooShort { needed: 4, actual: 2 });
    }

    #[test]
    fn string_vector_dangling_length_bytes() {
        let mut data = sized("left");
        data.extend_from_slice(&[1, 0]);
        assert!(matches!(
            parse_string_vector(&data).unwrap_err(),
            AttributeError::TooShort { needed: 4, actual: 2 }
        ));
    }

    #[test]
    fn string_vector_negative_length() {
        let mut data = sized("a");
        data.extend_from_slice(&(-2i32).to_le_bytes());
        assert_eq!(
            parse_string_vector(&data).unwrap_err(),
            AttributeError::NegativeStringLength {
                offset: 5,
                length: -2
            }
        );
    }

    fn preview_bytes(width: u32, height: u32, pixel_bytes: usize) -> Vec<u8> {
        let mut out = width.to_le_bytes().to_vec();
        out.extend_from_slice(&height.to_le_bytes());
        out.extend((0..pixel_bytes).map(|i| i as u8));
        out
    }

    #[test]
    fn preview_keeps_rgba_pixels() {
        let preview = parse_preview(&preview_bytes(2, 1, 8)).unwrap();
        assert_eq!((preview.width, preview.height), (2, 1));
        assert_eq!(preview.pixels, vec![0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn preview_pixel_count_must_match() {
        let err = parse_preview(&preview_bytes(2, 2, 8)).unwrap_err();
        assert_eq!(
            err,
            AttributeError::PreviewSizeMismatch {
                width: 2,
                height: 2,
                expected: 24,
                actual: 16
            }
        );
    }

    #[test]
    fn preview_huge_dimensions_do_not_overflow() {
        let err = parse_preview(&preview_bytes(u32::MAX, u32::MAX, 0)).unwrap_err();
        assert!(matches!(err, AttributeError::PreviewSizeMismatch { actual: 8, .. }));
    }

    #[test]
    fn preview_missing_dimensions() {
        assert!(matches!(
            parse_preview(&[0, 0, 0]).unwrap_err(),
            AttributeError::TooShort { .. }
        ));
    }
}
