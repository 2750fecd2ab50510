use crate::common::text::decode_strict;

use super::error::AttributeError;
use super::layout;
use super::reader::AttributeReader;
use super::value::{Channel, PixelType};

/// Decode a `chlist` span into channels, in file order.
///
/// The list ends at an empty name or when the span is used up, whichever
/// comes first; bytes after an early terminator are ignored.
pub fn parse_channel_list(data: &[u8]) -> Result<Vec<Channel>, AttributeError> {
    let mut reader = AttributeReader::new(data);
    let mut channels = Vec::new();

    while !reader.is_exhausted() {
        let name_offset = reader.offset();
        let name = reader
            .read_null_terminated()
            .ok_or(AttributeError::UnterminatedChannelName {
                offset: name_offset,
            })?;
        if name.is_empty() {
            break;
        }
        let name = decode_strict(name.to_vec()).ok_or(AttributeError::InvalidChannelName {
            offset: name_offset,
        })?;

        let record = reader
            .read_slice(layout::CHANNEL_RECORD_LEN)
            .map_err(|_| AttributeError::TruncatedChannel {
                channel: name.clone(),
                needed: layout::CHANNEL_RECORD_LEN,
                actual: reader.remaining(),
            })?;
        channels.push(parse_channel_record(name, record)?);
    }

    Ok(channels)
}

fn parse_channel_record(name: String, record: &[u8]) -> Result<Channel, AttributeError> {
    let mut reader = AttributeReader::new(record);
    let pixel_type = PixelType::from_i32(reader.read_i32_le()?);
    let perceptually_linear = reader.read_u8()? != 0;
    reader.read_slice(layout::CHANNEL_RESERVED_LEN)?;
    let x_sampling = reader.read_i32_le()?;
    let y_sampling = reader.read_i32_le()?;

    Ok(Channel {
        name,
        pixel_type,
        perceptually_linear,
        x_sampling,
        y_sampling,
    })
}
