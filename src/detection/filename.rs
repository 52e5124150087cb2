//! In-camera filename matching
//!
//! GR bodies name files as one letter followed by seven digits. The signal
//! is weak (other cameras share the shape) so a hit never names a model.

use super::result::DetectionResult;
use crate::constants::FILENAME_PATTERN;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static FILENAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(FILENAME_PATTERN).expect("filename pattern is valid"));

/// Filename signal detector
#[derive(Debug, Clone, Copy, Default)]
pub struct FilenameDetector;

impl FilenameDetector {
    pub fn new() -> Self {
        Self
    }

    /// Classify a file name or path
    ///
    /// Directory components are stripped for both `/` and `\` separators
    /// before matching.
    pub fn detect(&self, path: &str) -> DetectionResult {
        let name = final_segment(path);
        if name.is_empty() {
            return DetectionResult::not_detected();
        }

        if FILENAME_REGEX.is_match(name) {
            debug!(name, "filename matches in-camera pattern");
            DetectionResult::filename_match()
        } else {
            debug!(name, "filename does not match");
            DetectionResult::not_detected()
        }
    }
}

/// Last path segment, separator style agnostic
pub fn final_segment(path: &str) -> &str {
    path.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(path)
}
