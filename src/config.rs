//! Error and fallback policy for detection.
//!
//! The policy decides what happens when metadata cannot be used: whether
//! the failure is returned as an `Err`, whether the filename signal is
//! tried instead, and who gets told about it.
//!
//! # Presets
//!
//! ```
//! use gr_detect::DetectorConfig;
//!
//! // Never errors, falls back to the filename
//! let config = DetectorConfig::default();
//! assert!(config.enable_fallback && !config.throw_on_error);
//!
//! // Every failure is an Err, no fallback
//! let config = DetectorConfig::strict();
//! assert!(config.throw_on_error && !config.enable_fallback);
//! ```
//!
//! The policy flags are serde-serialisable so a host application can embed
//! them in its own configuration; the callback is not serialised.

use crate::error::DetectionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Side-channel notification for every error a call runs into
pub type ErrorCallback = Arc<dyn Fn(&DetectionError) + Send + Sync>;

/// Detection policy.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Return failures as `Err` instead of encoding them in the result
    pub throw_on_error: bool,

    /// Try the filename signal when metadata cannot be used
    pub enable_fallback: bool,

    /// Also fall back when metadata parsed but was empty.
    /// When false, absent metadata is reported without trying the filename.
    pub fallback_on_absent_metadata: bool,

    /// Invoked once per error, before the policy above is applied
    #[serde(skip)]
    pub on_error: Option<ErrorCallback>,
}

impl DetectorConfig {
    /// Strict preset: errors propagate, no fallback
    pub fn strict() -> Self {
        Self {
            throw_on_error: true,
            enable_fallback: false,
            ..Self::default()
        }
    }

    pub fn with_throw_on_error(mut self, throw_on_error: bool) -> Self {
        self.throw_on_error = throw_on_error;
        self
    }

    pub fn with_fallback(mut self, enable_fallback: bool) -> Self {
        self.enable_fallback = enable_fallback;
        self
    }

    pub fn with_fallback_on_absent_metadata(mut self, enabled: bool) -> Self {
        self.fallback_on_absent_metadata = enabled;
        self
    }

    pub fn with_on_error<F>(mut self, callback: F) -> Self
    where
        F: Fn(&DetectionError) + Send + Sync + 'static,
    {
        self.on_error = Some(Arc::new(callback));
        self
    }

    /// Whether a filename fallback is allowed for `error`
    ///
    /// Only recoverable errors qualify; absent metadata additionally needs
    /// `fallback_on_absent_metadata`.
    pub fn allows_fallback_for(&self, error: &DetectionError) -> bool {
        if !self.enable_fallback || !error.is_recoverable() {
            return false;
        }
        match error {
            DetectionError::MetadataAbsent { .. } => self.fallback_on_absent_metadata,
            _ => true,
        }
    }

    pub(crate) fn notify(&self, error: &DetectionError) {
        if let Some(callback) = &self.on_error {
            callback(error);
        }
    }
}

/// Default preset: errors are captured in the result, fallback enabled
impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            throw_on_error: false,
            enable_fallback: true,
            fallback_on_absent_metadata: true,
            on_error: None,
        }
    }
}

impl fmt::Debug for DetectorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DetectorConfig")
            .field("throw_on_error", &self.throw_on_error)
            .field("enable_fallback", &self.enable_fallback)
            .field("fallback_on_absent_metadata", &self.fallback_on_absent_metadata)
            .field("on_error", &self.on_error.as_ref().map(|_| "<callback>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_presets() {
        let default = DetectorConfig::default();
        assert!(!default.throw_on_error);
        assert!(default.enable_fallback);
        assert!(default.on_error.is_none());

        let strict = DetectorConfig::strict();
        assert!(strict.throw_on_error);
        assert!(!strict.enable_fallback);
    }

    #[test]
    fn test_fallback_rules() {
        let absent = DetectionError::metadata_absent();
        let parse = DetectionError::parse_failure(b"x", "bad".into());
        let invalid = DetectionError::invalid_input("empty", 0);

        let config = DetectorConfig::default();
        assert!(config.allows_fallback_for(&absent));
        assert!(config.allows_fallback_for(&parse));
        assert!(!config.allows_fallback_for(&invalid));

        let config = DetectorConfig::default().with_fallback_on_absent_metadata(false);
        assert!(!config.allows_fallback_for(&absent));
        assert!(config.allows_fallback_for(&parse));

        let config = DetectorConfig::strict();
        assert!(!config.allows_fallback_for(&parse));
    }

    #[test]
    fn test_fallback_follows_error_recoverability() {
        let config = DetectorConfig::default();
        for error in [
            DetectionError::metadata_absent(),
            DetectionError::parse_failure(b"x", "bad".into()),
            DetectionError::invalid_input("empty", 0),
        ] {
            assert_eq!(config.allows_fallback_for(&error), error.is_recoverable(), "{:?}", error);
        }
    }

    #[test]
    fn test_notify_invokes_callback() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let config = DetectorConfig::default().with_on_error(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        config.notify(&DetectionError::metadata_absent());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_policy_round_trip_skips_callback() {
        let config = DetectorConfig::strict().with_on_error(|_| {});
        let json = serde_json::to_value(&config).unwrap();
        assert!(json.get("on_error").is_none());
        assert_eq!(json["throw_on_error"], true);
        assert_eq!(json["enable_fallback"], false);
        assert_eq!(json["fallback_on_absent_metadata"], true);

        let back: DetectorConfig = serde_json::from_value(json).unwrap();
        assert!(back.throw_on_error);
        assert!(!back.enable_fallback);
        assert!(back.on_error.is_none());
    }

    #[test]
    fn test_missing_fields_use_default_preset() {
        let config: DetectorConfig = serde_json::from_str(r#"{"throw_on_error": true}"#).unwrap();
        assert!(config.throw_on_error);
        assert!(config.enable_fallback);
        assert!(config.fallback_on_absent_metadata);
    }
}
