//! EXIF metadata extraction module
//!
//! Turns raw image bytes into a flat tag mapping keyed by
//! `"<group> <TagName>"` (for example `"Image Make"`). The detectors only
//! see the mapping; everything format-specific stays behind
//! [`MetadataParser`].

pub mod extractor;

pub use extractor::{ExifExtractor, MetadataParser, TagMap, TagValue};
