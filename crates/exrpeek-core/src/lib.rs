//! exrpeek core library: OpenEXR header decoding without pixel data.
//!
//! Bytes flow one way: a forward-only `source` cursor feeds the `header`
//! scanner, which produces raw attribute records; the `attribute` decoder
//! turns each record into a typed value (layout/reader/parser), and the
//! header assembler collects everything into an immutable `Header`.
//! Parsing is synchronous and side-effect free; the only I/O is in `source`.
//!
//! Invariants:
//! - Attribute order is file order; duplicate names are kept.
//! - Fixed-size values consume exactly their declared size or fail.
//! - The two deep-data signals (version flag, `type` attribute) are
//!   reported separately and never merged.
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//!
//! use exrpeek_core::parse_header_file;
//!
//! let header = parse_header_file(Path::new("Balls.exr"))?;
//! println!("deep (version flag): {}", header.deep_by_version());
//! println!("deep (type attribute): {}", header.deep_by_type());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

mod attribute;
mod common;
mod header;
mod source;

use attribute::layout::IMAGE_TYPE_ATTRIBUTE;
use attribute::parser::{classification_text, is_deep_image_type};

pub use attribute::{
    AttributeError, Box2f, Box2i, Channel, Chromaticities, Compression, DecodedValue,
    EnvironmentMap, KeyCode, LevelMode, LineOrder, PixelType, Preview, Rational, RoundingMode,
    TileDescription, TimeCode, V2f, V2i, V3f, V3i, decode_attribute_value,
};
pub use header::layout::EXR_MAGIC;
pub use header::{
    ByteSpan, HeaderError, RawAttribute, VersionDescriptor, parse_header, parse_header_bytes,
    parse_header_file, read_header, scan_attributes,
};
pub use source::{ByteCursor, SourceError, open_file};

/// One header attribute: the record as stored plus its decoded value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub raw: RawAttribute,
    pub value: DecodedValue,
}

impl Attribute {
    pub fn name(&self) -> &str {
        &self.raw.name
    }

    pub fn type_tag(&self) -> &str {
        &self.raw.type_tag
    }

    /// Classification text of a `type` attribute, whatever its type tag.
    ///
    /// `None` for every other attribute.
    pub fn image_type_text(&self) -> Option<String> {
        (self.name() == IMAGE_TYPE_ATTRIBUTE).then(|| classification_text(&self.raw.data))
    }

    /// Whether this is a `type` attribute naming a deep image.
    pub fn marks_deep_image(&self) -> bool {
        self.image_type_text()
            .is_some_and(|text| is_deep_image_type(&text))
    }
}

/// Decoded header of one file.
///
/// Built once per parse and read-only afterwards. The magic word is exposed
/// as read; checking it is up to the caller (`has_expected_magic`).
///
/// # Examples
/// ```
/// use exrpeek_core::{Compression, parse_header_bytes};
///
/// let mut bytes = Vec::new();
/// bytes.extend_from_slice(&exrpeek_core::EXR_MAGIC.to_le_bytes());
/// bytes.extend_from_slice(&0x802u32.to_le_bytes());
/// bytes.extend_from_slice(b"compression\0compression\0");
/// bytes.extend_from_slice(&1i32.to_le_bytes());
/// bytes.push(3);
/// bytes.push(0);
///
/// let header = parse_header_bytes(&bytes)?;
/// assert_eq!(header.compression(), Some(Compression::Zip));
/// assert!(header.deep_by_version());
/// assert!(!header.deep_by_type());
/// # Ok::<(), exrpeek_core::HeaderError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    magic: u32,
    version: VersionDescriptor,
    attributes: Vec<Attribute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_type: Option<String>,
    deep_by_type: bool,
    header_len: u64,
}

impl Header {
    pub fn magic(&self) -> u32 {
        self.magic
    }

    pub fn has_expected_magic(&self) -> bool {
        self.magic == EXR_MAGIC
    }

    pub fn version(&self) -> &VersionDescriptor {
        &self.version
    }

    /// All attributes in file order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// First attribute with the given name.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.name() == name)
    }

    /// Every attribute with the given name, in file order.
    pub fn attributes_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Attribute> {
        self.attributes.iter().filter(move |attr| attr.name() == name)
    }

    /// Deep-data flag from the version word.
    pub fn deep_by_version(&self) -> bool {
        self.version.deep_data
    }

    /// Deep-data signal from a `type` attribute of `deepscanline`/`deeptile`.
    pub fn deep_by_type(&self) -> bool {
        self.deep_by_type
    }

    /// Text of the first `type` attribute, if present.
    pub fn image_type(&self) -> Option<&str> {
        self.image_type.as_deref()
    }

    /// Byte offset just past the header sentinel.
    pub fn header_len(&self) -> u64 {
        self.header_len
    }

    pub fn channels(&self) -> Option<&[Channel]> {
        match self.attribute("channels").map(|attr| &attr.value) {
            Some(DecodedValue::ChannelList(channels)) => Some(channels),
            _ => None,
        }
    }

    pub fn data_window(&self) -> Option<Box2i> {
        self.box2i("dataWindow")
    }

    pub fn display_window(&self) -> Option<Box2i> {
        self.box2i("displayWindow")
    }

    pub fn compression(&self) -> Option<Compression> {
        match self.attribute("compression").map(|attr| &attr.value) {
            Some(DecodedValue::Compression(compression)) => Some(*compression),
            _ => None,
        }
    }

    pub fn line_order(&self) -> Option<LineOrder> {
        match self.attribute("lineOrder").map(|attr| &attr.value) {
            Some(DecodedValue::LineOrder(order)) => Some(*order),
            _ => None,
        }
    }

    fn box2i(&self, name: &str) -> Option<Box2i> {
        match self.attribute(name).map(|attr| &attr.value) {
            Some(DecodedValue::Box2i(window)) => Some(*window),
            _ => None,
        }
    }
}
