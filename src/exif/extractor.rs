//! EXIF metadata extraction and parsing
//!
//! Reads every field of the primary and thumbnail IFDs with kamadak-exif
//! and renders each one as printable text.

use crate::constants::groups;
use crate::error::BoxError;
use async_trait::async_trait;
use kamadak_exif::{Context, Exif, Field, In, Reader, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::io::Cursor;

/// Parsed metadata, tag name to value
pub type TagMap = BTreeMap<String, TagValue>;

/// A single metadata value in printable form
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagValue {
    printable: String,
}

impl TagValue {
    pub fn new(printable: impl Into<String>) -> Self {
        Self {
            printable: printable.into(),
        }
    }

    /// Text form of the value, untrimmed
    pub fn printable(&self) -> &str {
        &self.printable
    }
}

impl From<&str> for TagValue {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TagValue {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.printable)
    }
}

/// Source of metadata tag mappings for raw image bytes
///
/// An `Ok` with an empty map means the input had no metadata; `Err` means
/// the input could not be read at all.
#[async_trait]
pub trait MetadataParser: Send + Sync {
    async fn parse(&self, bytes: &[u8]) -> Result<TagMap, BoxError>;
}

/// EXIF metadata extractor backed by kamadak-exif
#[derive(Debug, Clone, Copy, Default)]
pub struct ExifExtractor;

impl ExifExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract all tags from an in-memory image container
    ///
    /// Supports whatever containers kamadak-exif understands (JPEG, TIFF
    /// and TIFF-based raw files, HEIF, PNG, WebP). A container without an
    /// EXIF segment yields an empty map.
    pub fn extract_tags(bytes: &[u8]) -> Result<TagMap, kamadak_exif::Error> {
        let mut cursor = Cursor::new(bytes);
        let exif = match Reader::new().read_from_container(&mut cursor) {
            Ok(exif) => exif,
            Err(kamadak_exif::Error::NotFound(_)) => return Ok(TagMap::new()),
            Err(error) => return Err(error),
        };

        Ok(exif
            .fields()
            .filter_map(|field| {
                let name = tag_name(field)?;
                Some((name, TagValue::new(printable_value(field, &exif))))
            })
            .collect())
    }
}

#[async_trait]
impl MetadataParser for ExifExtractor {
    async fn parse(&self, bytes: &[u8]) -> Result<TagMap, BoxError> {
        Self::extract_tags(bytes).map_err(|error| Box::new(error) as BoxError)
    }
}

/// `"<group> <TagName>"`, or `None` for fields outside the known groups
fn tag_name(field: &Field) -> Option<String> {
    let group = group_name(field.tag.context(), field.ifd_num)?;
    Some(format!("{} {}", group, field.tag))
}

fn group_name(context: Context, ifd: In) -> Option<&'static str> {
    match context {
        Context::Tiff if ifd == In::PRIMARY => Some(groups::IMAGE),
        Context::Tiff if ifd == In::THUMBNAIL => Some(groups::THUMBNAIL),
        Context::Exif => Some(groups::EXIF),
        Context::Gps => Some(groups::GPS),
        Context::Interop => Some(groups::INTEROP),
        #[allow(unreachable_patterns)]
        _ => None,
    }
}

fn printable_value(field: &Field, exif: &Exif) -> String {
    match &field.value {
        // display_value() would quote ASCII strings
        Value::Ascii(strings) => strings
            .iter()
            .map(|bytes| {
                String::from_utf8_lossy(bytes)
                    .trim_end_matches('\0')
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join(", "),
        _ => field.display_value().with_unit(exif).to_string(),
    }
}
