//! Signal detectors and the result model they share
//!
//! Two independent signals feed detection: embedded metadata (manufacturer
//! and model tags) and the shape of the in-camera filename. Each detector
//! is pure and infallible; combining them is the orchestrator's job.

pub mod filename;
pub mod metadata;
pub mod result;

pub use filename::FilenameDetector;
pub use metadata::MetadataDetector;
pub use result::{DetectionMethod, DetectionResult, DetectionStatus};
