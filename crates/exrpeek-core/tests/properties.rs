use exrpeek_core::{Compression, DecodedValue, VersionDescriptor, decode_attribute_value};
use proptest::prelude::*;

proptest! {
    #[test]
    fn deep_flag_follows_bit_11(word in any::<u32>()) {
        prop_assert!(VersionDescriptor::from_word(word | 0x800).deep_data);
        prop_assert!(!VersionDescriptor::from_word(word & !0x800).deep_data);
    }

    #[test]
    fn version_word_is_preserved(word in any::<u32>()) {
        let version = VersionDescriptor::from_word(word);
        prop_assert_eq!(version.file_version, (word & 0xff) as u8);
        prop_assert_eq!(version.word(), word);
    }

    #[test]
    fn int_decodes_bit_exact(value in any::<i32>()) {
        let decoded = decode_attribute_value("int", &value.to_le_bytes()).unwrap();
        prop_assert_eq!(decoded, DecodedValue::Int(value));
    }

    #[test]
    fn float_decodes_bit_exact(bits in any::<u32>()) {
        let value = f32::from_bits(bits);
        match decode_attribute_value("float", &value.to_le_bytes()).unwrap() {
            DecodedValue::Float(decoded) => prop_assert_eq!(decoded.to_bits(), bits),
            other => prop_assert!(false, "unexpected value {:?}", other),
        }
    }

    #[test]
    fn double_decodes_bit_exact(bits in any::<u64>()) {
        let value = f64::from_bits(bits);
        match decode_attribute_value("double", &value.to_le_bytes()).unwrap() {
            DecodedValue::Double(decoded) => prop_assert_eq!(decoded.to_bits(), bits),
            other => prop_assert!(false, "unexpected value {:?}", other),
        }
    }

    #[test]
    fn compression_never_fails(code in any::<u8>()) {
        let decoded = decode_attribute_value("compression", &[code]).unwrap();
        let expected = Compression::from_u8(code);
        prop_assert_eq!(decoded, DecodedValue::Compression(expected));
        prop_assert_eq!(matches!(expected, Compression::Unknown(_)), code > 9);
    }

    #[test]
    fn unknown_tags_keep_bytes(data in proptest::collection::vec(any::<u8>(), 0..64)) {
        let decoded = decode_attribute_value("unknownthing", &data).unwrap();
        prop_assert_eq!(decoded, DecodedValue::Raw(data));
    }

    #[test]
    fn string_values_drop_final_byte(data in proptest::collection::vec(any::<u8>(), 0..64)) {
        let decoded = decode_attribute_value("string", &data).unwrap();
        let expected =
            String::from_utf8_lossy(&data[..data.len().saturating_sub(1)]).into_owned();
        prop_assert_eq!(decoded, DecodedValue::String(expected));
    }

    #[test]
    fn string_vector_keeps_every_entry(
        texts in proptest::collection::vec("[a-zA-Z0-9 ]{0,12}", 0..6)
    ) {
        let mut data = Vec::new();
        for text in &texts {
            data.extend_from_slice(&(text.len() as i32).to_le_bytes());
            data.extend_from_slice(text.as_bytes());
        }
        let decoded = decode_attribute_value("stringvector", &data).unwrap();
        prop_assert_eq!(decoded, DecodedValue::StringVector(texts));
    }
}
