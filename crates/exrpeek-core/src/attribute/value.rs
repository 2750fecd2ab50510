use std::fmt;

use serde::{Deserialize, Serialize};

use super::layout;

/// Decoded attribute value, tagged by the attribute's type.
///
/// Unrecognized type tags keep their bytes untouched in `Raw`.
///
/// # Examples
/// ```
/// use exrpeek_core::{Compression, DecodedValue};
///
/// let value = DecodedValue::Compression(Compression::Zip);
/// assert_eq!(value.to_string(), "ZIP_COMPRESSION");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DecodedValue {
    String(String),
    Int(i32),
    Float(f32),
    Double(f64),
    Box2i(Box2i),
    Box2f(Box2f),
    V2i(V2i),
    V2f(V2f),
    Rational(Rational),
    TileDescription(TileDescription),
    Compression(Compression),
    LineOrder(LineOrder),
    ChannelList(Vec<Channel>),
    TimeCode(TimeCode),
    V3i(V3i),
    V3f(V3f),
    Chromaticities(Chromaticities),
    KeyCode(KeyCode),
    EnvironmentMap(EnvironmentMap),
    M33f([f32; 9]),
    M44f([f32; 16]),
    StringVector(Vec<String>),
    Preview(Preview),
    Raw(Vec<u8>),
}

impl fmt::Display for DecodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodedValue::String(text) => write!(f, "{text}"),
            DecodedValue::Int(value) => write!(f, "{value}"),
            DecodedValue::Float(value) => write!(f, "{value}"),
            DecodedValue::Double(value) => write!(f, "{value}"),
            DecodedValue::Box2i(value) => write!(f, "{value}"),
            DecodedValue::Box2f(value) => write!(f, "{value}"),
            DecodedValue::V2i(value) => write!(f, "{value}"),
            DecodedValue::V2f(value) => write!(f, "{value}"),
            DecodedValue::Rational(value) => {
                write!(f, "{}/{}", value.numerator, value.denominator)
            }
            DecodedValue::TileDescription(value) => write!(
                f,
                "{}x{}, {}, {}",
                value.x_size, value.y_size, value.level_mode, value.rounding_mode
            ),
            DecodedValue::Compression(value) => write!(f, "{value}"),
            DecodedValue::LineOrder(value) => write!(f, "{value}"),
            DecodedValue::ChannelList(channels) => write!(f, "{} channels", channels.len()),
            DecodedValue::TimeCode(value) => write!(f, "{value}"),
            DecodedValue::V3i(value) => write!(f, "({}, {}, {})", value.x, value.y, value.z),
            DecodedValue::V3f(value) => write!(f, "({}, {}, {})", value.x, value.y, value.z),
            DecodedValue::Chromaticities(value) => write!(f, "{value}"),
            DecodedValue::KeyCode(value) => write!(f, "{value}"),
            DecodedValue::EnvironmentMap(value) => write!(f, "{value}"),
            DecodedValue::M33f(values) => fmt_matrix(f, values, 3),
            DecodedValue::M44f(values) => fmt_matrix(f, values, 4),
            DecodedValue::StringVector(texts) => {
                let quoted: Vec<_> = texts.iter().map(|text| format!("{text:?}")).collect();
                write!(f, "[{}]", quoted.join(", "))
            }
            DecodedValue::Preview(value) => write!(f, "{}x{} preview", value.width, value.height),
            DecodedValue::Raw(bytes) => write!(f, "{} raw bytes", bytes.len()),
        }
    }
}

/// Row-major matrix as `[a, b, c] [d, e, f] ...`.
fn fmt_matrix(f: &mut fmt::Formatter<'_>, values: &[f32], columns: usize) -> fmt::Result {
    for (index, row) in values.chunks(columns).enumerate() {
        if index > 0 {
            f.write_str(" ")?;
        }
        let cells: Vec<_> = row.iter().map(|value| value.to_string()).collect();
        write!(f, "[{}]", cells.join(", "))?;
    }
    Ok(())
}

/// Integer bounding box; bounds are reported as stored, never reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Box2i {
    pub xmin: i32,
    pub ymin: i32,
    pub xmax: i32,
    pub ymax: i32,
}

impl fmt::Display for Box2i {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) - ({}, {})",
            self.xmin, self.ymin, self.xmax, self.ymax
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Box2f {
    pub xmin: f32,
    pub ymin: f32,
    pub xmax: f32,
    pub ymax: f32,
}

impl fmt::Display for Box2f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) - ({}, {})",
            self.xmin, self.ymin, self.xmax, self.ymax
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct V2i {
    pub x: i32,
    pub y: i32,
}

impl fmt::Display for V2i {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct V2f {
    pub x: f32,
    pub y: f32,
}

impl fmt::Display for V2f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct V3i {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct V3f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// CIE xy coordinates of the primaries and the white point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Chromaticities {
    pub red: V2f,
    pub green: V2f,
    pub blue: V2f,
    pub white: V2f,
}

impl fmt::Display for Chromaticities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "red {}, green {}, blue {}, white {}",
            self.red, self.green, self.blue, self.white
        )
    }
}

/// SMPTE time code as stored: packed BCD time and flags plus user data.
///
/// # Examples
/// ```
/// use exrpeek_core::TimeCode;
///
/// let code = TimeCode { time_and_flags: 0x1023_4512, user_data: 0 };
/// assert_eq!((code.hours(), code.minutes()), (10, 23));
/// assert_eq!(code.to_string(), "10:23:45:12");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeCode {
    pub time_and_flags: u32,
    pub user_data: u32,
}

impl TimeCode {
    pub fn hours(self) -> u32 {
        self.bcd(layout::TIMECODE_HOURS_FIELD)
    }

    pub fn minutes(self) -> u32 {
        self.bcd(layout::TIMECODE_MINUTES_FIELD)
    }

    pub fn seconds(self) -> u32 {
        self.bcd(layout::TIMECODE_SECONDS_FIELD)
    }

    pub fn frame(self) -> u32 {
        self.bcd(layout::TIMECODE_FRAME_FIELD)
    }

    pub fn drop_frame(self) -> bool {
        self.time_and_flags & layout::TIMECODE_DROP_FRAME_BIT != 0
    }

    fn bcd(self, (shift, tens_bits): (u32, u32)) -> u32 {
        let units = (self.time_and_flags >> shift) & 0x0f;
        let tens = (self.time_and_flags >> (shift + 4)) & ((1 << tens_bits) - 1);
        tens * 10 + units
    }
}

impl fmt::Display for TimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frame_separator = if self.drop_frame() { ';' } else { ':' };
        write!(
            f,
            "{:02}:{:02}:{:02}{}{:02}",
            self.hours(),
            self.minutes(),
            self.seconds(),
            frame_separator,
            self.frame()
        )
    }
}

/// Film frame identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyCode {
    pub film_manufacturer_code: i32,
    pub film_type: i32,
    pub prefix: i32,
    pub count: i32,
    pub perforation_offset: i32,
    pub perforations_per_frame: i32,
    pub perforations_per_count: i32,
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "manufacturer {}, type {}, prefix {}, count {}, offset {}, {} perfs/frame, {} perfs/count",
            self.film_manufacturer_code,
            self.film_type,
            self.prefix,
            self.count,
            self.perforation_offset,
            self.perforations_per_frame,
            self.perforations_per_count
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnvironmentMap {
    LatLong,
    Cube,
    Unknown(u8),
}

impl EnvironmentMap {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => EnvironmentMap::LatLong,
            1 => EnvironmentMap::Cube,
            other => EnvironmentMap::Unknown(other),
        }
    }
}

impl fmt::Display for EnvironmentMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvironmentMap::LatLong => f.write_str("ENVMAP_LATLONG"),
            EnvironmentMap::Cube => f.write_str("ENVMAP_CUBE"),
            EnvironmentMap::Unknown(code) => write!(f, "UNKNOWN({code})"),
        }
    }
}

/// Thumbnail image; pixels are RGBA bytes in increasing-y order.
///
/// The pixels stay out of serialized output, like raw attribute bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preview {
    pub width: u32,
    pub height: u32,
    #[serde(skip)]
    pub pixels: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rational {
    pub numerator: i32,
    pub denominator: u32,
}

/// Tile layout of a tiled image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileDescription {
    pub x_size: u32,
    pub y_size: u32,
    pub level_mode: LevelMode,
    pub rounding_mode: RoundingMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelMode {
    OneLevel,
    MipmapLevels,
    RipmapLevels,
    Unknown(u8),
}

impl LevelMode {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => LevelMode::OneLevel,
            1 => LevelMode::MipmapLevels,
            2 => LevelMode::RipmapLevels,
            other => LevelMode::Unknown(other),
        }
    }
}

impl fmt::Display for LevelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelMode::OneLevel => f.write_str("ONE_LEVEL"),
            LevelMode::MipmapLevels => f.write_str("MIPMAP_LEVELS"),
            LevelMode::RipmapLevels => f.write_str("RIPMAP_LEVELS"),
            LevelMode::Unknown(code) => write!(f, "UNKNOWN({code})"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundingMode {
    RoundDown,
    RoundUp,
    Unknown(u8),
}

impl RoundingMode {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => RoundingMode::RoundDown,
            1 => RoundingMode::RoundUp,
            other => RoundingMode::Unknown(other),
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundingMode::RoundDown => f.write_str("ROUND_DOWN"),
            RoundingMode::RoundUp => f.write_str("ROUND_UP"),
            RoundingMode::Unknown(code) => write!(f, "UNKNOWN({code})"),
        }
    }
}

/// Pixel compression method. Ids outside the known table are kept.
///
/// # Examples
/// ```
/// use exrpeek_core::Compression;
///
/// assert_eq!(Compression::from_u8(9), Compression::Dwab);
/// assert_eq!(Compression::from_u8(200), Compression::Unknown(200));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Compression {
    None,
    Rle,
    Zips,
    Zip,
    Piz,
    Pxr24,
    B44,
    B44a,
    Dwaa,
    Dwab,
    Unknown(u8),
}

impl Compression {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => Compression::None,
            1 => Compression::Rle,
            2 => Compression::Zips,
            3 => Compression::Zip,
            4 => Compression::Piz,
            5 => Compression::Pxr24,
            6 => Compression::B44,
            7 => Compression::B44a,
            8 => Compression::Dwaa,
            9 => Compression::Dwab,
            other => Compression::Unknown(other),
        }
    }

    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            Compression::None => "NO_COMPRESSION",
            Compression::Rle => "RLE_COMPRESSION",
            Compression::Zips => "ZIPS_COMPRESSION",
            Compression::Zip => "ZIP_COMPRESSION",
            Compression::Piz => "PIZ_COMPRESSION",
            Compression::Pxr24 => "PXR24_COMPRESSION",
            Compression::B44 => "B44_COMPRESSION",
            Compression::B44a => "B44A_COMPRESSION",
            Compression::Dwaa => "DWAA_COMPRESSION",
            Compression::Dwab => "DWAB_COMPRESSION",
            Compression::Unknown(_) => return None,
        };
        Some(name)
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compression::Unknown(code) => write!(f, "UNKNOWN({code})"),
            known => f.write_str(known.name().unwrap_or("UNKNOWN")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineOrder {
    IncreasingY,
    DecreasingY,
    RandomY,
    Unknown(u8),
}

impl LineOrder {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => LineOrder::IncreasingY,
            1 => LineOrder::DecreasingY,
            2 => LineOrder::RandomY,
            other => LineOrder::Unknown(other),
        }
    }
}

impl fmt::Display for LineOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineOrder::IncreasingY => f.write_str("INCREASING_Y"),
            LineOrder::DecreasingY => f.write_str("DECREASING_Y"),
            LineOrder::RandomY => f.write_str("RANDOM_Y"),
            LineOrder::Unknown(code) => write!(f, "UNKNOWN({code})"),
        }
    }
}

/// Sample type of one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PixelType {
    Uint,
    Half,
    Float,
    Unknown(i32),
}

impl PixelType {
    pub fn from_i32(value: i32) -> Self {
        match value {
            0 => PixelType::Uint,
            1 => PixelType::Half,
            2 => PixelType::Float,
            other => PixelType::Unknown(other),
        }
    }
}

impl fmt::Display for PixelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelType::Uint => f.write_str("UINT"),
            PixelType::Half => f.write_str("HALF"),
            PixelType::Float => f.write_str("FLOAT"),
            PixelType::Unknown(code) => write!(f, "UNKNOWN({code})"),
        }
    }
}

/// One entry of a channel list, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub name: String,
    pub pixel_type: PixelType,
    pub perceptually_linear: bool,
    pub x_sampling: i32,
    pub y_sampling: i32,
}
