//! Camera model registry
//!
//! Static data describing the GR family: the closed set of model variants,
//! the exact model strings cameras write into metadata, and the accepted
//! renderings of the manufacturer name. Detectors only consult these
//! tables, so new spellings are added here without touching detection
//! logic.

pub mod models;
pub mod tables;

pub use models::CameraModel;
pub use tables::{is_known_manufacturer, lookup_model, manufacturer_names, model_strings};
