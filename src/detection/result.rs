//! Detection outcome types

use crate::error::DetectionError;
use crate::registry::CameraModel;
use serde::{Deserialize, Serialize};

/// How a positive result was reached
///
/// Variants are ordered by confidence, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMethod {
    None,
    /// Filename shape only, advisory
    FilenameOnly,
    /// Manufacturer and model tags
    MetadataOnly,
    /// Metadata match confirmed by the filename
    Both,
}

/// Outcome of a detection call
///
/// Separates a confirmed absence (`NotDetected`) from an answer that is
/// unknown because something failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionStatus {
    Detected,
    NotDetected,
    ParseError,
    MetadataAbsent,
    InvalidInput,
}

/// Complete result of inspecting one source
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DetectionResult {
    pub is_match: bool,
    /// Only set for matches that involved metadata
    pub model: Option<CameraModel>,
    pub method: DetectionMethod,
    /// `Image Make` as read from metadata, trimmed
    pub raw_make: Option<String>,
    /// `Image Model` as read from metadata, trimmed
    pub raw_model: Option<String>,
    pub status: DetectionStatus,
    pub error: Option<DetectionError>,
    /// Set when the filename signal stood in for failed metadata
    pub used_fallback: bool,
}

impl DetectionResult {
    /// Valid input, no match
    pub fn not_detected() -> Self {
        Self {
            is_match: false,
            model: None,
            method: DetectionMethod::None,
            raw_make: None,
            raw_model: None,
            status: DetectionStatus::NotDetected,
            error: None,
            used_fallback: false,
        }
    }

    pub fn metadata_match(
        model: CameraModel,
        raw_make: impl Into<String>,
        raw_model: impl Into<String>,
    ) -> Self {
        Self {
            is_match: true,
            model: Some(model),
            method: DetectionMethod::MetadataOnly,
            raw_make: Some(raw_make.into()),
            raw_model: Some(raw_model.into()),
            status: DetectionStatus::Detected,
            error: None,
            used_fallback: false,
        }
    }

    pub fn filename_match() -> Self {
        Self {
            is_match: true,
            model: None,
            method: DetectionMethod::FilenameOnly,
            raw_make: None,
            raw_model: None,
            status: DetectionStatus::Detected,
            error: None,
            used_fallback: false,
        }
    }

    /// Failure with no usable signal
    pub fn error_only(error: DetectionError) -> Self {
        Self {
            status: error.status(),
            error: Some(error),
            ..Self::not_detected()
        }
    }

    /// Wrap a filename outcome that stood in for failed metadata
    ///
    /// The status is `Detected` when the filename matched, otherwise the
    /// original error's status.
    pub fn with_fallback(filename: DetectionResult, error: DetectionError) -> Self {
        let status = if filename.is_match {
            DetectionStatus::Detected
        } else {
            error.status()
        };
        Self {
            status,
            error: Some(error),
            used_fallback: true,
            ..filename
        }
    }

    /// Upgrade a metadata match once the filename agrees
    pub fn confirmed_by_filename(self) -> Self {
        Self {
            method: DetectionMethod::Both,
            ..self
        }
    }

    /// Whether metadata contributed to the answer
    pub fn is_confirmed(&self) -> bool {
        matches!(
            self.method,
            DetectionMethod::MetadataOnly | DetectionMethod::Both
        )
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Alias of [`DetectionMethod`] read as a confidence level
    pub fn confidence(&self) -> DetectionMethod {
        self.method
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_confidence_order() {
        assert!(DetectionMethod::Both > DetectionMethod::MetadataOnly);
        assert!(DetectionMethod::MetadataOnly > DetectionMethod::FilenameOnly);
        assert!(DetectionMethod::FilenameOnly > DetectionMethod::None);
    }

    #[test]
    fn test_confidence_reports_method() {
        let both = DetectionResult::metadata_match(CameraModel::GrIV, "RICOH", "GR IV")
            .confirmed_by_filename();
        assert_eq!(both.confidence(), DetectionMethod::Both);
        assert!(both.confidence() > DetectionResult::filename_match().confidence());
        assert_eq!(DetectionResult::not_detected().confidence(), DetectionMethod::None);
    }

    #[test]
    fn test_confirmed_only_with_metadata() {
        assert!(DetectionResult::metadata_match(CameraModel::GrIII, "RICOH", "GR III").is_confirmed());
        assert!(DetectionResult::metadata_match(CameraModel::GrIII, "RICOH", "GR III")
            .confirmed_by_filename()
            .is_confirmed());
        assert!(!DetectionResult::filename_match().is_confirmed());
        assert!(!DetectionResult::not_detected().is_confirmed());
    }

    #[test]
    fn test_error_only_takes_error_status() {
        let result = DetectionResult::error_only(DetectionError::metadata_absent());
        assert!(!result.is_match);
        assert!(result.has_error());
        assert!(!result.used_fallback);
        assert_eq!(result.status, DetectionStatus::MetadataAbsent);
        assert_eq!(result.method, DetectionMethod::None);
    }

    #[test]
    fn test_fallback_status_follows_filename_outcome() {
        let error = DetectionError::parse_failure(b"xx", "bad".into());

        let matched = DetectionResult::with_fallback(DetectionResult::filename_match(), error.clone());
        assert!(matched.is_match);
        assert_eq!(matched.status, DetectionStatus::Detected);
        assert_eq!(matched.method, DetectionMethod::FilenameOnly);
        assert!(matched.used_fallback);
        assert_eq!(matched.error, Some(error.clone()));

        let missed = DetectionResult::with_fallback(DetectionResult::not_detected(), error);
        assert!(!missed.is_match);
        assert_eq!(missed.status, DetectionStatus::ParseError);
        assert!(missed.used_fallback);
    }

    #[test]
    fn test_result_serialization() {
        let result = DetectionResult::metadata_match(CameraModel::GrIIIx, "RICOH", "GR IIIx");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["method"], "metadata_only");
        assert_eq!(json["status"], "detected");
        assert_eq!(json["model"], "gr_iiix");
        assert!(json["error"].is_null());

        let failed = DetectionResult::error_only(DetectionError::invalid_input("empty", 0));
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json["error"]["kind"], "invalid_input");
    }
}
