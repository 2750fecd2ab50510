use std::fmt;
use std::path::Path;

use exrpeek_core::{Attribute, DecodedValue, EXR_MAGIC, Header};

const RULE: &str = "============================================================";

/// Human-readable rendering of one decoded header.
pub struct HeaderReport<'a> {
    path: &'a Path,
    header: &'a Header,
}

impl<'a> HeaderReport<'a> {
    pub fn new(path: &'a Path, header: &'a Header) -> Self {
        Self { path, header }
    }

    fn fmt_version(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = self.header;
        let version = header.version();
        write!(f, "Magic: 0x{:08x}", header.magic())?;
        if !header.has_expected_magic() {
            write!(f, " (expected 0x{EXR_MAGIC:08x})")?;
        }
        writeln!(f)?;
        writeln!(f, "File version: {}", version.file_version)?;
        writeln!(f, "Version field: 0x{:08x}", version.word())?;
        writeln!(f, "Flags: 0x{:06x}", version.flags())?;
        writeln!(f, "  Single tile: {}", version.single_tile)?;
        writeln!(f, "  Long names: {}", version.long_names)?;
        writeln!(f, "  Deep data: {}", version.deep_data)?;
        writeln!(f, "  Multi-part: {}", version.multipart)
    }

    fn fmt_attribute(&self, f: &mut fmt::Formatter<'_>, attribute: &Attribute) -> fmt::Result {
        writeln!(f)?;
        writeln!(
            f,
            "  {} ({}, {} bytes)",
            attribute.name(),
            attribute.type_tag(),
            attribute.raw.size
        )?;

        match &attribute.value {
            DecodedValue::ChannelList(channels) => {
                writeln!(f, "    Channels:")?;
                for channel in channels {
                    write!(
                        f,
                        "      {}: {}, sampling ({}, {})",
                        channel.name, channel.pixel_type, channel.x_sampling, channel.y_sampling
                    )?;
                    if channel.perceptually_linear {
                        write!(f, ", linear")?;
                    }
                    writeln!(f)?;
                }
            }
            DecodedValue::Raw(bytes) => match attribute.image_type_text() {
                Some(text) => writeln!(f, "    Value: {text}")?,
                None => writeln!(f, "    Raw: {} bytes", bytes.len())?,
            },
            value => writeln!(f, "    Value: {value}")?,
        }

        if attribute.marks_deep_image() {
            writeln!(f, "    *** DEEP DATA IMAGE ***")?;
        }
        Ok(())
    }
}

impl fmt::Display for HeaderReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = self.header;
        writeln!(f)?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Examining: {}", self.path.display())?;
        writeln!(f, "{RULE}")?;
        self.fmt_version(f)?;

        writeln!(f)?;
        writeln!(f, "Header attributes:")?;
        for attribute in header.attributes() {
            self.fmt_attribute(f, attribute)?;
        }

        writeln!(f)?;
        writeln!(f, "File position after header: {}", header.header_len())?;
        writeln!(f)?;
        if header.deep_by_version() {
            writeln!(f, "*** This is a DEEP DATA image ***")?;
        } else {
            writeln!(f, "*** This is a FLAT image ***")?;
        }
        if header.deep_by_type() != header.deep_by_version() {
            writeln!(
                f,
                "note: type attribute says {}, version flag says {}",
                deep_label(header.deep_by_type()),
                deep_label(header.deep_by_version())
            )?;
        }
        Ok(())
    }
}

fn deep_label(deep: bool) -> &'static str {
    if deep { "deep" } else { "flat" }
}
