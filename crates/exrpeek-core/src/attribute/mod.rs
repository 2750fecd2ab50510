//! Typed attribute decoding.
//!
//! A closed dispatch on the attribute type tag: each known tag has a fixed
//! layout, a nested channel list, or a length-prefixed body (`sized`), and
//! anything else is kept as raw bytes. Byte constants live in `layout`,
//! bounded little-endian reads in `reader`, and domain decoding in
//! `parser`/`channel`/`sized`.

pub mod channel;
pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;
pub mod sized;
pub mod value;

pub use error::AttributeError;
pub use parser::decode_attribute_value;
pub use value::{
    Box2f, Box2i, Channel, Chromaticities, Compression, DecodedValue, EnvironmentMap, KeyCode,
    LevelMode, LineOrder, PixelType, Preview, Rational, RoundingMode, TileDescription, TimeCode,
    V2f, V2i, V3f, V3i,
};
