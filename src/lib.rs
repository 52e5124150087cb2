//! # GR Detect
//!
//! Tells whether a photograph came from a Ricoh GR camera.
//!
//! Two independent signals are combined:
//! - Embedded metadata: the `Image Make` and `Image Model` EXIF tags
//! - Filename shape: the `R0001234.DNG` pattern GR bodies write
//!
//! Metadata is the stronger signal and is the only one that names a model.
//! A filename match is advisory. When metadata cannot be read, a
//! [`DetectorConfig`] decides whether the failure is returned, reported, or
//! covered by the filename signal.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gr_detect::{detect_from_source, DetectionMethod, DetectorConfig};
//!
//! # async fn run() -> Result<(), gr_detect::DetectionError> {
//! let bytes = std::fs::read("R0001234.JPG").unwrap_or_default();
//! let result = detect_from_source(&bytes, Some("R0001234.JPG"), DetectorConfig::default()).await?;
//!
//! if result.is_match && result.method == DetectionMethod::Both {
//!     println!("GR photo: {:?}", result.model);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod detection;
pub mod detector;
pub mod error;
pub mod exif;
pub mod registry;

pub use config::{DetectorConfig, ErrorCallback};
pub use detection::{
    DetectionMethod, DetectionResult, DetectionStatus, FilenameDetector, MetadataDetector,
};
pub use detector::GrDetector;
pub use error::{BoxError, DetectionError, Result};
pub use exif::{ExifExtractor, MetadataParser, TagMap, TagValue};
pub use registry::CameraModel;

/// Detect from raw image bytes using the EXIF extractor
///
/// `filename` is the file's name or path, if known. Under the default
/// configuration this never returns `Err`.
pub async fn detect_from_source(
    bytes: &[u8],
    filename: Option<&str>,
    config: DetectorConfig,
) -> Result<DetectionResult> {
    GrDetector::new(config)
        .detect_from_source(bytes, filename)
        .await
}

/// Detect from a file name or path alone
pub fn detect_from_filename_only(filename: &str) -> DetectionResult {
    FilenameDetector::new().detect(filename)
}

/// Detect from an already parsed metadata tag mapping
pub fn detect_from_metadata_tags(tags: &TagMap) -> DetectionResult {
    MetadataDetector::new().detect(tags)
}
