//! Configuration types for shift extraction and calendar emission.
//!
//! This module contains the strongly-typed configuration structure that
//! is deserialized from a YAML configuration file.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Default timezone for generated events.
pub const DEFAULT_TIMEZONE: &str = "Australia/Sydney";

/// Default title of every generated event.
pub const DEFAULT_EVENT_TITLE: &str = "Work Shift";

/// Default upload size limit (5 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Engine configuration.
///
/// Every field has a default, so an empty YAML document (or
/// [`EngineConfig::default`]) yields a working configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// IANA timezone the roster times are expressed in.
    pub timezone: String,
    /// Title given to every calendar event.
    pub event_title: String,
    /// Largest accepted upload, in bytes.
    pub max_upload_bytes: usize,
    /// Domain suffix appended to event UIDs.
    pub uid_domain: String,
    /// Reject shifts whose end time is earlier than their start time.
    ///
    /// When false (the default) such shifts keep their negative duration.
    pub reject_negative_durations: bool,
    /// Treat an extraction with no shifts as an error at the outer surfaces.
    pub require_shifts: bool,
    /// Address the HTTP server binds to.
    pub bind_address: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_string(),
            event_title: DEFAULT_EVENT_TITLE.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            uid_domain: "shift-calendar".to_string(),
            reject_negative_durations: false,
            require_shifts: true,
            bind_address: "127.0.0.1:8000".to_string(),
        }
    }
}

impl EngineConfig {
    /// Returns a copy of this configuration using a different timezone.
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    /// Resolves the configured timezone name.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_calendar::config::EngineConfig;
    ///
    /// let tz = EngineConfig::default().tz().unwrap();
    /// assert_eq!(tz, chrono_tz::Australia::Sydney);
    /// ```
    pub fn tz(&self) -> EngineResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| EngineError::InvalidTimezone {
                name: self.timezone.clone(),
            })
    }

    /// Checks that the configuration is usable.
    pub fn validate(&self) -> EngineResult<()> {
        self.tz()?;
        if self.max_upload_bytes == 0 {
            return Err(EngineError::ConfigParseError {
                path: "max_upload_bytes".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
