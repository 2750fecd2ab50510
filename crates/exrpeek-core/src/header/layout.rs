/// Magic number at offset 0 (`20000630`).
pub const EXR_MAGIC: u32 = 0x0131_2f76;

pub const VERSION_NUMBER_MASK: u32 = 0x0000_00ff;
pub const FLAGS_SHIFT: u32 = 8;

pub const SINGLE_TILE_BIT: u32 = 0x0000_0200;
pub const LONG_NAMES_BIT: u32 = 0x0000_0400;
pub const DEEP_DATA_BIT: u32 = 0x0000_0800;
pub const MULTIPART_BIT: u32 = 0x0000_1000;

pub const NAMED_FLAG_BITS: u32 = SINGLE_TILE_BIT | LONG_NAMES_BIT | DEEP_DATA_BIT | MULTIPART_BIT;
