use crate::common::text::decode_lossy;

use super::channel::parse_channel_list;
use super::error::AttributeError;
use super::layout;
use super::reader::AttributeReader;
use super::sized::{parse_preview, parse_string_vector};
use super::value::{
    Box2f, Box2i, Chromaticities, Compression, DecodedValue, EnvironmentMap, KeyCode, LevelMode,
    LineOrder, Rational, RoundingMode, TileDescription, TimeCode, V2f, V2i, V3f, V3i,
};

/// Decode an attribute's bytes according to its type tag.
///
/// Fixed-size types must match their layout exactly. `string` and
/// unrecognized tags never fail.
///
/// # Examples
/// ```
/// use exrpeek_core::{DecodedValue, decode_attribute_value};
///
/// let value = decode_attribute_value("int", &42i32.to_le_bytes())?;
/// assert_eq!(value, DecodedValue::Int(42));
///
/// let raw = decode_attribute_value("unknownthing", &[1, 2, 3])?;
/// assert_eq!(raw, DecodedValue::Raw(vec![1, 2, 3]));
/// # Ok::<(), exrpeek_core::AttributeError>(())
/// ```
pub fn decode_attribute_value(type_tag: &str, data: &[u8]) -> Result<DecodedValue, AttributeError> {
    let mut reader = AttributeReader::new(data);
    let value = match type_tag {
        layout::TYPE_STRING => DecodedValue::String(decode_lossy(data)),
        layout::TYPE_INT => {
            reader.require_exact_len(layout::TYPE_INT, layout::INT_SIZE)?;
            DecodedValue::Int(reader.read_i32_le()?)
        }
        layout::TYPE_FLOAT => {
            reader.require_exact_len(layout::TYPE_FLOAT, layout::FLOAT_SIZE)?;
            DecodedValue::Float(reader.read_f32_le()?)
        }
        layout::TYPE_DOUBLE => {
            reader.require_exact_len(layout::TYPE_DOUBLE, layout::DOUBLE_SIZE)?;
            DecodedValue::Double(reader.read_f64_le()?)
        }
        layout::TYPE_BOX2I => {
            reader.require_exact_len(layout::TYPE_BOX2I, layout::BOX2I_SIZE)?;
            DecodedValue::Box2i(Box2i {
                xmin: reader.read_i32_le()?,
                ymin: reader.read_i32_le()?,
                xmax: reader.read_i32_le()?,
                ymax: reader.read_i32_le()?,
            })
        }
        layout::TYPE_BOX2F => {
            reader.require_exact_len(layout::TYPE_BOX2F, layout::BOX2F_SIZE)?;
            DecodedValue::Box2f(Box2f {
                xmin: reader.read_f32_le()?,
                ymin: reader.read_f32_le()?,
                xmax: reader.read_f32_le()?,
                ymax: reader.read_f32_le()?,
            })
        }
        layout::TYPE_V2I => {
            reader.require_exact_len(layout::TYPE_V2I, layout::V2I_SIZE)?;
            DecodedValue::V2i(V2i {
                x: reader.read_i32_le()?,
                y: reader.read_i32_le()?,
            })
        }
        layout::TYPE_V2F => {
            reader.require_exact_len(layout::TYPE_V2F, layout::V2F_SIZE)?;
            DecodedValue::V2f(read_v2f(&mut reader)?)
        }
        layout::TYPE_RATIONAL => {
            reader.require_exact_len(layout::TYPE_RATIONAL, layout::RATIONAL_SIZE)?;
            DecodedValue::Rational(Rational {
                numerator: reader.read_i32_le()?,
                denominator: reader.read_u32_le()?,
            })
        }
        layout::TYPE_TILEDESC => {
            reader.require_exact_len(layout::TYPE_TILEDESC, layout::TILEDESC_SIZE)?;
            let x_size = reader.read_u32_le()?;
            let y_size = reader.read_u32_le()?;
            let mode = reader.read_u8()?;
            DecodedValue::TileDescription(TileDescription {
                x_size,
                y_size,
                level_mode: LevelMode::from_u8(mode & layout::TILEDESC_LEVEL_MODE_MASK),
                rounding_mode: RoundingMode::from_u8(mode >> layout::TILEDESC_ROUNDING_MODE_SHIFT),
            })
        }
        layout::TYPE_COMPRESSION => {
            reader.require_exact_len(layout::TYPE_COMPRESSION, layout::COMPRESSION_SIZE)?;
            DecodedValue::Compression(Compression::from_u8(reader.read_u8()?))
        }
        layout::TYPE_LINE_ORDER => {
            reader.require_exact_len(layout::TYPE_LINE_ORDER, layout::LINE_ORDER_SIZE)?;
            DecodedValue::LineOrder(LineOrder::from_u8(reader.read_u8()?))
        }
        layout::TYPE_CHLIST => DecodedValue::ChannelList(parse_channel_list(data)?),
        layout::TYPE_TIMECODE => {
            reader.require_exact_len(layout::TYPE_TIMECODE, layout::TIMECODE_SIZE)?;
            DecodedValue::TimeCode(TimeCode {
                time_and_flags: reader.read_u32_le()?,
                user_data: reader.read_u32_le()?,
            })
        }
        layout::TYPE_V3I => {
            reader.require_exact_len(layout::TYPE_V3I, layout::V3I_SIZE)?;
            DecodedValue::V3i(V3i {
                x: reader.read_i32_le()?,
                y: reader.read_i32_le()?,
                z: reader.read_i32_le()?,
            })
        }
        layout::TYPE_V3F => {
            reader.require_exact_len(layout::TYPE_V3F, layout::V3F_SIZE)?;
            DecodedValue::V3f(V3f {
                x: reader.read_f32_le()?,
                y: reader.read_f32_le()?,
                z: reader.read_f32_le()?,
            })
        }
        layout::TYPE_CHROMATICITIES => {
            reader.require_exact_len(layout::TYPE_CHROMATICITIES, layout::CHROMATICITIES_SIZE)?;
            DecodedValue::Chromaticities(Chromaticities {
                red: read_v2f(&mut reader)?,
                green: read_v2f(&mut reader)?,
                blue: read_v2f(&mut reader)?,
                white: read_v2f(&mut reader)?,
            })
        }
        layout::TYPE_KEYCODE => {
            reader.require_exact_len(layout::TYPE_KEYCODE, layout::KEYCODE_SIZE)?;
            DecodedValue::KeyCode(KeyCode {
                film_manufacturer_code: reader.read_i32_le()?,
                film_type: reader.read_i32_le()?,
                prefix: reader.read_i32_le()?,
                count: reader.read_i32_le()?,
                perforation_offset: reader.read_i32_le()?,
                perforations_per_frame: reader.read_i32_le()?,
                perforations_per_count: reader.read_i32_le()?,
            })
        }
        layout::TYPE_ENVMAP => {
            reader.require_exact_len(layout::TYPE_ENVMAP, layout::ENVMAP_SIZE)?;
            DecodedValue::EnvironmentMap(EnvironmentMap::from_u8(reader.read_u8()?))
        }
        layout::TYPE_M33F => {
            reader.require_exact_len(layout::TYPE_M33F, layout::M33F_SIZE)?;
            DecodedValue::M33f(read_f32_array(&mut reader)?)
        }
        layout::TYPE_M44F => {
            reader.require_exact_len(layout::TYPE_M44F, layout::M44F_SIZE)?;
            DecodedValue::M44f(read_f32_array(&mut reader)?)
        }
        layout::TYPE_STRING_VECTOR => DecodedValue::StringVector(parse_string_vector(data)?),
        layout::TYPE_PREVIEW => DecodedValue::Preview(parse_preview(data)?),
        _ => DecodedValue::Raw(data.to_vec()),
    };
    Ok(value)
}

fn read_v2f(reader: &mut AttributeReader<'_>) -> Result<V2f, AttributeError> {
    Ok(V2f {
        x: reader.read_f32_le()?,
        y: reader.read_f32_le()?,
    })
}

fn read_f32_array<const N: usize>(
    reader: &mut AttributeReader<'_>,
) -> Result<[f32; N], AttributeError> {
    let mut values = [0.0f32; N];
    for value in &mut values {
        *value = reader.read_f32_le()?;
    }
    Ok(values)
}

/// Text of an attribute read for image classification, whatever its type.
pub fn classification_text(data: &[u8]) -> String {
    decode_lossy(data)
}

/// Whether an image type text denotes deep data.
pub fn is_deep_image_type(text: &str) -> bool {
    layout::DEEP_IMAGE_TYPES.contains(&text)
}
