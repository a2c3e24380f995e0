//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

/// Loads and validates engine configuration.
///
/// # File Format
///
/// ```text
/// timezone: Australia/Sydney
/// event_title: Work Shift
/// max_upload_bytes: 5242880
/// uid_domain: shift-calendar
/// reject_negative_durations: false
/// require_shifts: true
/// bind_address: 127.0.0.1:8000
/// ```
///
/// Any key may be omitted; missing keys take their default value.
///
/// # Example
///
/// ```no_run
/// use shift_calendar::config::ConfigLoader;
///
/// let config = ConfigLoader::load("./config/default.yaml")?;
/// println!("Events are created in {}", config.timezone);
/// # Ok::<(), shift_calendar::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns the configuration on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML or unknown keys
    /// - The configured timezone is unknown
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<EngineConfig> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content, &path_str)?;
        info!(path = %path_str, timezone = %config.timezone, "Loaded configuration");
        Ok(config)
    }

    /// Loads configuration from a file if one is given, otherwise returns defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> EngineResult<EngineConfig> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(EngineConfig::default()),
        }
    }

    /// Parses and validates configuration from YAML text.
    pub fn parse(content: &str, origin: &str) -> EngineResult<EngineConfig> {
        // An empty document deserializes as null rather than an empty mapping.
        let config: EngineConfig = if content.trim().is_empty() {
            EngineConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?
        };

        config.validate()?;
        Ok(config)
    }
}
