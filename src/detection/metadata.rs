//! Manufacturer/model tag matching
//!
//! A match needs both tags. The manufacturer must be an exact registry
//! entry; the model is looked up exactly and, failing that, accepted as an
//! unrecognised GR model when it contains the brand token.

use super::result::DetectionResult;
use crate::constants::{BRAND_TOKEN, TAG_MAKE, TAG_MODEL};
use crate::exif::TagMap;
use crate::registry::{self, CameraModel};
use tracing::debug;

/// Metadata signal detector
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataDetector;

impl MetadataDetector {
    pub fn new() -> Self {
        Self
    }

    /// Classify a parsed tag mapping
    ///
    /// Total over any mapping; missing or foreign tags give a not-detected
    /// result rather than an error.
    pub fn detect(&self, tags: &TagMap) -> DetectionResult {
        let (make, model) = match (trimmed(tags, TAG_MAKE), trimmed(tags, TAG_MODEL)) {
            (Some(make), Some(model)) => (make, model),
            _ => {
                debug!("metadata lacks make or model tag");
                return DetectionResult::not_detected();
            }
        };

        if !registry::is_known_manufacturer(make) {
            debug!(make, "manufacturer not recognised");
            return DetectionResult::not_detected();
        }

        if let Some(camera) = registry::lookup_model(model) {
            debug!(make, model, ?camera, "model matched registry");
            return DetectionResult::metadata_match(camera, make, model);
        }

        if contains_brand_token(model) {
            debug!(make, model, "unlisted model carries brand token");
            return DetectionResult::metadata_match(CameraModel::Unknown, make, model);
        }

        debug!(make, model, "manufacturer recognised but model is not GR");
        DetectionResult::not_detected()
    }
}

fn trimmed<'a>(tags: &'a TagMap, name: &str) -> Option<&'a str> {
    tags.get(name).map(|value| value.printable().trim())
}

fn contains_brand_token(model: &str) -> bool {
    model
        .to_ascii_uppercase()
        .contains(&BRAND_TOKEN.to_ascii_uppercase())
}
