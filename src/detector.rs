//! Combines the metadata and filename signals under a [`DetectorConfig`]
//!
//! ## Flow
//!
//! 1. Empty input is rejected before the parser runs.
//! 2. The parser turns bytes into tags. A parser error or an empty tag set
//!    goes through error handling.
//! 3. A metadata match is upgraded to `DetectionMethod::Both` when the
//!    filename agrees. Without a metadata match the filename decides.
//!
//! Error handling always notifies `on_error` first, then either returns
//! the error, falls back to the filename, or returns an error-only result.
//! The original error is kept in the result even when the fallback
//! matches.

use crate::config::DetectorConfig;
use crate::detection::{DetectionResult, FilenameDetector, MetadataDetector};
use crate::error::{DetectionError, Result};
use crate::exif::{ExifExtractor, MetadataParser, TagMap};
use tracing::{debug, info, warn};

/// Detection orchestrator
pub struct GrDetector<P = ExifExtractor> {
    parser: P,
    config: DetectorConfig,
    metadata: MetadataDetector,
    filename: FilenameDetector,
}

impl GrDetector<ExifExtractor> {
    /// Create a detector using the EXIF extractor
    pub fn new(config: DetectorConfig) -> Self {
        Self::with_parser(ExifExtractor::new(), config)
    }
}

impl Default for GrDetector<ExifExtractor> {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}

impl<P: MetadataParser> GrDetector<P> {
    /// Create a detector over a custom metadata parser
    pub fn with_parser(parser: P, config: DetectorConfig) -> Self {
        Self {
            parser,
            config,
            metadata: MetadataDetector::new(),
            filename: FilenameDetector::new(),
        }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Detect from raw image bytes, optionally backed by the file's name
    ///
    /// # Errors
    ///
    /// Only when `throw_on_error` is set; otherwise every failure is
    /// reported inside the returned [`DetectionResult`].
    pub async fn detect_from_source(
        &self,
        bytes: &[u8],
        filename: Option<&str>,
    ) -> Result<DetectionResult> {
        let filename = filename.filter(|name| !name.trim().is_empty());

        if bytes.is_empty() {
            return self.handle_error(
                DetectionError::invalid_input("empty byte sequence", bytes.len()),
                filename,
            );
        }

        let tags = match self.parser.parse(bytes).await {
            Ok(tags) => tags,
            Err(source) => {
                return self.handle_error(DetectionError::parse_failure(bytes, source), filename)
            }
        };

        if tags.is_empty() {
            return self.handle_error(DetectionError::metadata_absent(), filename);
        }

        let from_metadata = self.metadata.detect(&tags);
        let result = match filename {
            Some(name) if from_metadata.is_match => {
                if self.filename.detect(name).is_match {
                    debug!(name, "filename confirms metadata match");
                    from_metadata.confirmed_by_filename()
                } else {
                    from_metadata
                }
            }
            _ if from_metadata.is_match => from_metadata,
            Some(name) => self.filename.detect(name),
            None => DetectionResult::not_detected(),
        };

        debug!(
            is_match = result.is_match,
            method = ?result.method,
            model = ?result.model,
            "detection finished"
        );
        Ok(result)
    }

    /// Filename signal only
    pub fn detect_from_filename_only(&self, filename: &str) -> DetectionResult {
        self.filename.detect(filename)
    }

    /// Metadata signal only, over an already parsed tag mapping
    pub fn detect_from_metadata_tags(&self, tags: &TagMap) -> DetectionResult {
        self.metadata.detect(tags)
    }

    fn handle_error(
        &self,
        error: DetectionError,
        filename: Option<&str>,
    ) -> Result<DetectionResult> {
        warn!(kind = error.kind(), %error, "metadata unusable");
        self.config.notify(&error);

        if self.config.throw_on_error {
            return Err(error);
        }

        match filename {
            Some(name) if self.config.allows_fallback_for(&error) => {
                let fallback = self.filename.detect(name);
                if fallback.is_match {
                    info!(name, kind = error.kind(), "filename fallback matched");
                }
                Ok(DetectionResult::with_fallback(fallback, error))
            }
            _ => Ok(DetectionResult::error_only(error)),
        }
    }
}

impl<P> std::fmt::Debug for GrDetector<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrDetector")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
