pub const TYPE_STRING: &str = "string";
pub const TYPE_INT: &str = "int";
pub const TYPE_FLOAT: &str = "float";
pub const TYPE_DOUBLE: &str = "double";
pub const TYPE_BOX2I: &str = "box2i";
pub const TYPE_BOX2F: &str = "box2f";
pub const TYPE_V2I: &str = "v2i";
pub const TYPE_V2F: &str = "v2f";
pub const TYPE_RATIONAL: &str = "rational";
pub const TYPE_TILEDESC: &str = "tiledesc";
pub const TYPE_COMPRESSION: &str = "compression";
pub const TYPE_LINE_ORDER: &str = "lineOrder";
pub const TYPE_CHLIST: &str = "chlist";
pub const TYPE_TIMECODE: &str = "timecode";
pub const TYPE_V3I: &str = "v3i";
pub const TYPE_V3F: &str = "v3f";
pub const TYPE_CHROMATICITIES: &str = "chromaticities";
pub const TYPE_KEYCODE: &str = "keycode";
pub const TYPE_ENVMAP: &str = "envmap";
pub const TYPE_M33F: &str = "m33f";
pub const TYPE_M44F: &str = "m44f";
pub const TYPE_STRING_VECTOR: &str = "stringvector";
pub const TYPE_PREVIEW: &str = "preview";

pub const INT_SIZE: usize = 4;
pub const FLOAT_SIZE: usize = 4;
pub const DOUBLE_SIZE: usize = 8;
pub const BOX2I_SIZE: usize = 16;
pub const BOX2F_SIZE: usize = 16;
pub const V2I_SIZE: usize = 8;
pub const V2F_SIZE: usize = 8;
pub const RATIONAL_SIZE: usize = 8;
pub const TILEDESC_SIZE: usize = 9;
pub const COMPRESSION_SIZE: usize = 1;
pub const LINE_ORDER_SIZE: usize = 1;
pub const TIMECODE_SIZE: usize = 8;
pub const V3I_SIZE: usize = 12;
pub const V3F_SIZE: usize = 12;
/// Red, green, blue and white points, each an `x, y` f32 pair.
pub const CHROMATICITIES_SIZE: usize = 32;
/// Seven i32 fields.
pub const KEYCODE_SIZE: usize = 28;
pub const ENVMAP_SIZE: usize = 1;
pub const M33F_SIZE: usize = 36;
pub const M44F_SIZE: usize = 64;

/// Width and height (u32 each) ahead of the RGBA preview pixels.
pub const PREVIEW_HEADER_LEN: usize = 8;
pub const PREVIEW_BYTES_PER_PIXEL: u64 = 4;

/// Packed SMPTE time: BCD digit fields as `(shift, tens bits)`.
pub const TIMECODE_FRAME_FIELD: (u32, u32) = (0, 2);
pub const TIMECODE_SECONDS_FIELD: (u32, u32) = (8, 3);
pub const TIMECODE_MINUTES_FIELD: (u32, u32) = (16, 3);
pub const TIMECODE_HOURS_FIELD: (u32, u32) = (24, 2);
pub const TIMECODE_DROP_FRAME_BIT: u32 = 1 << 6;

pub const TILEDESC_LEVEL_MODE_MASK: u8 = 0x0f;
pub const TILEDESC_ROUNDING_MODE_SHIFT: u8 = 4;

/// Bytes following a channel name: pixel type, linear flag, reserved, sampling.
pub const CHANNEL_RECORD_LEN: usize = 16;
pub const CHANNEL_RESERVED_LEN: usize = 3;

/// Name of the attribute whose text classifies the image kind.
pub const IMAGE_TYPE_ATTRIBUTE: &str = "type";
pub const DEEP_IMAGE_TYPES: [&str; 2] = ["deepscanline", "deeptile"];
