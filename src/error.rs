//! Error types for the gr_detect library

use crate::constants::PARSE_PREVIEW_LEN;
use crate::detection::DetectionStatus;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use thiserror::Error;

/// Result type alias for gr_detect operations
pub type Result<T> = std::result::Result<T, DetectionError>;

/// Boxed error returned by metadata parsers
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared underlying cause, cloneable so results stay plain values
pub type ErrorCause = Arc<dyn std::error::Error + Send + Sync>;

/// Failures and non-match conditions raised while inspecting a source
#[derive(Error, Debug, Clone)]
pub enum DetectionError {
    /// Byte sequence was empty or unusable before any parse attempt
    #[error("Invalid input: {message} (length {length})")]
    InvalidInput { message: String, length: usize },

    /// The metadata parser raised while reading the input
    #[error("Metadata parse failed: {message}")]
    ParseFailure {
        message: String,
        /// Leading bytes of the input, for diagnosis
        preview: Vec<u8>,
        #[source]
        source: Option<ErrorCause>,
    },

    /// Parsing succeeded but produced no tags
    #[error("No metadata present: {message}")]
    MetadataAbsent { message: String },
}

impl DetectionError {
    /// Create an invalid-input error for a buffer of `length` bytes
    pub fn invalid_input(message: impl Into<String>, length: usize) -> Self {
        Self::InvalidInput {
            message: message.into(),
            length,
        }
    }

    /// Create a parse failure wrapping the parser's error
    ///
    /// Keeps at most [`PARSE_PREVIEW_LEN`] leading bytes of `input`.
    pub fn parse_failure(input: &[u8], source: BoxError) -> Self {
        let preview_len = input.len().min(PARSE_PREVIEW_LEN);
        Self::ParseFailure {
            message: source.to_string(),
            preview: input[..preview_len].to_vec(),
            source: Some(Arc::from(source)),
        }
    }

    /// Create a metadata-absent condition
    pub fn metadata_absent() -> Self {
        Self::MetadataAbsent {
            message: "image contains no readable metadata tags".to_string(),
        }
    }

    /// Status a result carries when this error is the final word
    pub fn status(&self) -> DetectionStatus {
        match self {
            DetectionError::InvalidInput { .. } => DetectionStatus::InvalidInput,
            DetectionError::ParseFailure { .. } => DetectionStatus::ParseError,
            DetectionError::MetadataAbsent { .. } => DetectionStatus::MetadataAbsent,
        }
    }

    /// Short discriminant name, stable across releases
    pub fn kind(&self) -> &'static str {
        match self {
            DetectionError::InvalidInput { .. } => "invalid_input",
            DetectionError::ParseFailure { .. } => "parse_failure",
            DetectionError::MetadataAbsent { .. } => "metadata_absent",
        }
    }

    /// Human-readable message without the kind prefix
    pub fn message(&self) -> &str {
        match self {
            DetectionError::InvalidInput { message, .. }
            | DetectionError::ParseFailure { message, .. }
            | DetectionError::MetadataAbsent { message } => message,
        }
    }

    /// Check if a filename fallback may still produce a usable answer
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DetectionError::ParseFailure { .. } | DetectionError::MetadataAbsent { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            DetectionError::InvalidInput { length, .. } => {
                format!("The image data is unusable ({} bytes). Please check the file.", length)
            }
            DetectionError::ParseFailure { .. } => {
                "Could not read the image metadata. The file may be damaged or unsupported.".to_string()
            }
            DetectionError::MetadataAbsent { .. } => {
                "The image carries no camera metadata. It may have been stripped on export.".to_string()
            }
        }
    }

    fn cause_message(&self) -> Option<String> {
        match self {
            DetectionError::ParseFailure {
                source: Some(source),
                ..
            } => Some(source.to_string()),
            _ => None,
        }
    }
}

// Causes are trait objects; they compare by rendered message.
impl PartialEq for DetectionError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                DetectionError::InvalidInput { message: a, length: la },
                DetectionError::InvalidInput { message: b, length: lb },
            ) => a == b && la == lb,
            (
                DetectionError::ParseFailure {
                    message: a,
                    preview: pa,
                    ..
                },
                DetectionError::ParseFailure {
                    message: b,
                    preview: pb,
                    ..
                },
            ) => a == b && pa == pb && self.cause_message() == other.cause_message(),
            (
                DetectionError::MetadataAbsent { message: a },
                DetectionError::MetadataAbsent { message: b },
            ) => a == b,
            _ => false,
        }
    }
}

impl Eq for DetectionError {}

impl Hash for DetectionError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        match self {
            DetectionError::InvalidInput { message, length } => {
                message.hash(state);
                length.hash(state);
            }
            DetectionError::ParseFailure {
                message, preview, ..
            } => {
                message.hash(state);
                preview.hash(state);
                self.cause_message().hash(state);
            }
            DetectionError::MetadataAbsent { message } => message.hash(state),
        }
    }
}

impl Serialize for DetectionError {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DetectionError", 3)?;
        state.serialize_field("kind", self.kind())?;
        state.serialize_field("message", self.message())?;
        state.serialize_field("cause", &self.cause_message())?;
        state.end()
    }
}
