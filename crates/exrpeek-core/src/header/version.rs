use serde::{Deserialize, Serialize};

use super::layout;

/// Decoded version word: file format version plus feature flags.
///
/// # Examples
/// ```
/// use exrpeek_core::VersionDescriptor;
///
/// let version = VersionDescriptor::from_word(0x0000_0802);
/// assert_eq!(version.file_version, 2);
/// assert!(version.deep_data);
/// assert!(!version.single_tile);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionDescriptor {
    pub file_version: u8,
    pub single_tile: bool,
    pub long_names: bool,
    pub deep_data: bool,
    pub multipart: bool,
    /// Flag bits above the version byte that have no name, in place.
    pub reserved_flag_bits: u32,
}

impl VersionDescriptor {
    /// Split a version word. Every bit pattern is accepted.
    pub fn from_word(word: u32) -> Self {
        Self {
            file_version: (word & layout::VERSION_NUMBER_MASK) as u8,
            single_tile: word & layout::SINGLE_TILE_BIT != 0,
            long_names: word & layout::LONG_NAMES_BIT != 0,
            deep_data: word & layout::DEEP_DATA_BIT != 0,
            multipart: word & layout::MULTIPART_BIT != 0,
            reserved_flag_bits: word & !layout::VERSION_NUMBER_MASK & !layout::NAMED_FLAG_BITS,
        }
    }

    /// Reassemble the original version word.
    pub fn word(&self) -> u32 {
        let mut word = u32::from(self.file_version) | self.reserved_flag_bits;
        for (set, bit) in [
            (self.single_tile, layout::SINGLE_TILE_BIT),
            (self.long_names, layout::LONG_NAMES_BIT),
            (self.deep_data, layout::DEEP_DATA_BIT),
            (self.multipart, layout::MULTIPART_BIT),
        ] {
            if set {
                word |= bit;
            }
        }
        word
    }

    /// The flag field (the word without its version byte).
    pub fn flags(&self) -> u32 {
        self.word() >> layout::FLAGS_SHIFT
    }
}

#[cfg(test)]
mod tests {
    use super::VersionDescriptor;

    #[test]
    fn plain_scanline_version() {
        let version = VersionDescriptor::from_word(2);
        assert_eq!(version.file_version, 2);
        assert!(!version.single_tile);
        assert!(!version.long_names);
        assert!(!version.deep_data);
        assert!(!version.multipart);
        assert_eq!(version.reserved_flag_bits, 0);
        assert_eq!(version.flags(), 0);
    }

    #[test]
    fn each_named_bit() {
        assert!(VersionDescriptor::from_word(0x200).single_tile);
        assert!(VersionDescriptor::from_word(0x400).long_names);
        assert!(VersionDescriptor::from_word(0x800).deep_data);
        assert!(VersionDescriptor::from_word(0x1000).multipart);
    }

    #[test]
    fn reserved_bits_are_preserved() {
        let version = VersionDescriptor::from_word(0x8000_0102);
        assert_eq!(version.file_version, 2);
        assert_eq!(version.reserved_flag_bits, 0x8000_0100);
        assert!(!version.deep_data);
    }

    #[test]
    fn word_round_trips() {
        let word = 0xdead_beef;
        assert_eq!(VersionDescriptor::from_word(word).word(), word);
        assert_eq!(VersionDescriptor::from_word(word).flags(), word >> 8);
    }
}
