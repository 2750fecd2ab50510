use std::fs;
use std::io::BufReader;
use std::time::{SystemTime, UNIX_EPOCH};

use exrpeek_core::{
    ByteCursor, Compression, DecodedValue, EXR_MAGIC, HeaderError, LineOrder, PixelType,
    parse_header, parse_header_bytes, parse_header_file, scan_attributes,
};

struct HeaderBuilder {
    bytes: Vec<u8>,
}

impl HeaderBuilder {
    fn new(version: u32) -> Self {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&EXR_MAGIC.to_le_bytes());
        bytes.extend_from_slice(&version.to_le_bytes());
        Self { bytes }
    }

    fn attribute(mut self, name: &str, type_tag: &str, data: &[u8]) -> Self {
        self.bytes.extend_from_slice(name.as_bytes());
        self.bytes.push(0);
        self.bytes.extend_from_slice(type_tag.as_bytes());
        self.bytes.push(0);
        self.bytes
            .extend_from_slice(&(data.len() as i32).to_le_bytes());
        self.bytes.extend_from_slice(data);
        self
    }

    fn finish(mut self) -> Vec<u8> {
        self.bytes.push(0);
        self.bytes
    }
}

fn channel(name: &str, pixel_type: i32, x: i32, y: i32) -> Vec<u8> {
    let mut out = name.as_bytes().to_vec();
    out.push(0);
    out.extend_from_slice(&pixel_type.to_le_bytes());
    out.extend_from_slice(&[0, 0, 0, 0]);
    out.extend_from_slice(&x.to_le_bytes());
    out.extend_from_slice(&y.to_le_bytes());
    out
}

fn i32s(values: &[i32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

fn scanline_header() -> Vec<u8> {
    let mut channels = channel("B", 1, 1, 1);
    channels.extend(channel("G", 1, 1, 1));
    channels.extend(channel("R", 1, 1, 1));
    channels.push(0);

    HeaderBuilder::new(2)
        .attribute("channels", "chlist", &channels)
        .attribute("compression", "compression", &[3])
        .attribute("dataWindow", "box2i", &i32s(&[0, 0, 639, 479]))
        .attribute("displayWindow", "box2i", &i32s(&[0, 0, 639, 479]))
        .attribute("lineOrder", "lineOrder", &[0])
        .attribute("pixelAspectRatio", "float", &1.0f32.to_le_bytes())
        .attribute("screenWindowCenter", "v2f", &[0u8; 8])
        .attribute("screenWindowWidth", "float", &1.0f32.to_le_bytes())
        .attribute("owner", "string", b"exrpeek tests\0")
        .finish()
}

#[test]
fn scanline_header_decodes_fully() {
    let bytes = scanline_header();
    let header = parse_header_bytes(&bytes).unwrap();

    assert!(header.has_expected_magic());
    assert_eq!(header.version().file_version, 2);
    assert_eq!(header.attributes().len(), 9);
    assert_eq!(header.compression(), Some(Compression::Zip));
    assert_eq!(header.line_order(), Some(LineOrder::IncreasingY));

    let channels = header.channels().unwrap();
    let names: Vec<_> = channels.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["B", "G", "R"]);
    assert!(channels.iter().all(|c| c.pixel_type == PixelType::Half));

    let window = header.data_window().unwrap();
    assert_eq!((window.xmax, window.ymax), (639, 479));
    assert_eq!(
        header.attribute("owner").map(|a| &a.value),
        Some(&DecodedValue::String("exrpeek tests".to_string()))
    );
    assert!(!header.deep_by_version());
    assert!(!header.deep_by_type());
}

#[test]
fn pixel_data_after_sentinel_is_not_read() {
    let mut bytes = scanline_header();
    let header_len = bytes.len() as u64;
    bytes.extend_from_slice(&[0xff; 64]);

    let header = parse_header_bytes(&bytes).unwrap();
    assert_eq!(header.header_len(), header_len);
}

#[test]
fn deep_tile_signals_reported_separately() {
    let bytes = HeaderBuilder::new(2)
        .attribute("type", "string", b"deeptile\0")
        .finish();
    let header = parse_header_bytes(&bytes).unwrap();
    assert!(header.deep_by_type());
    assert!(!header.deep_by_version());

    let bytes = HeaderBuilder::new(0x802)
        .attribute("type", "string", b"deepscanline\0")
        .finish();
    let header = parse_header_bytes(&bytes).unwrap();
    assert!(header.deep_by_type());
    assert!(header.deep_by_version());
}

#[test]
fn type_text_always_loses_its_final_byte() {
    let bytes = HeaderBuilder::new(2)
        .attribute("type", "string", b"deeptile")
        .finish();
    let header = parse_header_bytes(&bytes).unwrap();
    assert_eq!(header.image_type(), Some("deeptil"));
    assert!(!header.deep_by_type());
    assert_eq!(
        header.attributes()[0].value,
        DecodedValue::String("deeptil".to_string())
    );
}

#[test]
fn scanner_stops_after_single_attribute() {
    let bytes = b"foo\0int\0\x04\x00\x00\x00\x2a\x00\x00\x00\0";
    let mut cursor = ByteCursor::new(&bytes[..]);
    let attributes = scan_attributes(&mut cursor).unwrap();
    assert_eq!(attributes.len(), 1);
    assert_eq!(attributes[0].name, "foo");
    assert_eq!(
        exrpeek_core::decode_attribute_value(&attributes[0].type_tag, &attributes[0].data)
            .unwrap(),
        DecodedValue::Int(42)
    );
}

#[test]
fn truncated_channel_record_is_malformed_attribute() {
    let mut channels = channel("R", 2, 1, 1);
    channels.truncate(2 + 10);
    let bytes = HeaderBuilder::new(2)
        .attribute("channels", "chlist", &channels)
        .finish();
    let err = parse_header_bytes(&bytes).unwrap_err();
    assert!(matches!(err, HeaderError::MalformedAttribute { attribute_index: 0, .. }));
    assert!(err.to_string().contains("channels"));
}

#[test]
fn negative_size_is_malformed_header() {
    let mut bytes = HeaderBuilder::new(2).finish();
    bytes.pop();
    bytes.extend_from_slice(b"bad\0int\0");
    bytes.extend_from_slice(&(-4i32).to_le_bytes());
    let err = parse_header_bytes(&bytes).unwrap_err();
    assert!(matches!(
        err,
        HeaderError::MalformedHeader {
            attribute_index: 0,
            size: -4,
            ..
        }
    ));
}

#[test]
fn truncated_header_reports_complete_attributes() {
    let mut bytes = scanline_header();
    bytes.truncate(bytes.len() - 5);
    let err = parse_header_bytes(&bytes).unwrap_err();
    assert!(matches!(
        err,
        HeaderError::TruncatedHeader {
            attributes_read: 8,
            ..
        }
    ));
}

#[test]
fn empty_input_is_unexpected_eof() {
    let err = parse_header_bytes(&[]).unwrap_err();
    assert!(matches!(err, HeaderError::UnexpectedEof { field: "magic", .. }));
}

#[test]
fn parse_header_file_reads_from_disk() {
    let mut path = std::env::temp_dir();
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    path.push(format!("exrpeek_header_{unique}.exr"));

    let mut bytes = scanline_header();
    bytes.extend_from_slice(&[0u8; 128]);
    fs::write(&path, &bytes).unwrap();
    let result = parse_header_file(&path);
    let _ = fs::remove_file(&path);

    let header = result.unwrap();
    assert_eq!(header.attributes().len(), 9);
}

#[test]
fn parse_header_file_missing_is_io_error() {
    let path = std::env::temp_dir().join("exrpeek_missing_input.exr");
    let err = parse_header_file(&path).unwrap_err();
    assert!(matches!(err, HeaderError::Io(_)));
}

#[test]
fn parse_header_accepts_any_buffered_reader() {
    let bytes = scanline_header();
    let reader = BufReader::with_capacity(3, &bytes[..]);
    let header = parse_header(reader).unwrap();
    assert_eq!(header.attributes().len(), 9);
}

#[test]
fn parses_are_independent_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| parse_header_bytes(&scanline_header()).unwrap()))
        .collect();
    let headers: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(headers.windows(2).all(|pair| pair[0] == pair[1]));
}
