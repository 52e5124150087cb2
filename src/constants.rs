//! Fixed tag names, patterns and limits used by the detectors
//!
//! Model spellings and manufacturer names live in the registry, not here.

/// Metadata tag holding the manufacturer name
pub const TAG_MAKE: &str = "Image Make";

/// Metadata tag holding the model name
pub const TAG_MODEL: &str = "Image Model";

/// Two-letter family token accepted in unrecognised model strings
pub const BRAND_TOKEN: &str = "GR";

/// Final path segment pattern for in-camera filenames.
///
/// One letter, seven digits, then a still-image extension. ASCII-only so
/// no Unicode case folding widens the match.
pub const FILENAME_PATTERN: &str = r"(?i-u)^[A-Z][0-9]{7}\.(?:jpe?g|dng|raf|tiff?)$";

/// Number of leading input bytes kept with a parse failure
pub const PARSE_PREVIEW_LEN: usize = 100;

/// EXIF group prefixes used when rendering tag names
pub mod groups {
    pub const IMAGE: &str = "Image";
    pub const THUMBNAIL: &str = "Thumbnail";
    pub const EXIF: &str = "EXIF";
    pub const GPS: &str = "GPS";
    pub const INTEROP: &str = "Interoperability";
}
