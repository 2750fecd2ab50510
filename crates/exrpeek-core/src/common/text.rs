//! The two text policies used by the decoder.
//!
//! Structural text (attribute names, type tags, channel names) must decode
//! cleanly or the parse fails. Display text (string attribute values) never
//! fails and replaces invalid sequences instead. Its final byte is the
//! stored terminator and is always dropped, whatever its value.

/// Decode structural text, rejecting anything that is not valid UTF-8.
pub(crate) fn decode_strict(bytes: Vec<u8>) -> Option<String> {
    String::from_utf8(bytes).ok()
}

/// Decode display text, dropping the final byte.
pub(crate) fn decode_lossy(bytes: &[u8]) -> String {
    let text = bytes.split_last().map_or(&[][..], |(_, rest)| rest);
    String::from_utf8_lossy(text).into_owned()
}

/// Decode length-prefixed display text, which carries no terminator.
pub(crate) fn decode_sized(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::{decode_lossy, decode_sized, decode_strict};

    #[test]
    fn strict_accepts_ascii() {
        assert_eq!(decode_strict(b"dataWindow".to_vec()).as_deref(), Some("dataWindow"));
    }

    #[test]
    fn strict_rejects_invalid_bytes() {
        assert_eq!(decode_strict(vec![0x66, 0xff, 0x6f]), None);
    }

    #[test]
    fn lossy_strips_single_terminator() {
        assert_eq!(decode_lossy(b"deeptile\0"), "deeptile");
        assert_eq!(decode_lossy(b"a\0\0"), "a\0");
    }

    #[test]
    fn lossy_drops_final_byte_even_when_not_nul() {
        assert_eq!(decode_lossy(b"scanlineimage"), "scanlineimag");
        assert_eq!(decode_lossy(b"x"), "");
    }

    #[test]
    fn lossy_replaces_invalid_bytes() {
        assert_eq!(decode_lossy(&[b'o', 0xff, b'k', 0]), "o\u{fffd}k");
    }

    #[test]
    fn sized_keeps_every_byte() {
        assert_eq!(decode_sized(b"left"), "left");
        assert_eq!(decode_sized(&[b'o', 0xff]), "o\u{fffd}");
    }

    #[test]
    fn lossy_empty() {
        assert_eq!(decode_lossy(&[]), "");
    }
}
