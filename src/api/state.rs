//! Application state for the shift calendar API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::extraction::ShiftExtractor;

/// Source of "now" for year inference and event timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    /// The system clock.
    System,
    /// A fixed instant, for reproducible output.
    Fixed(DateTime<Utc>),
}

impl Clock {
    /// Returns the current instant.
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(instant) => *instant,
        }
    }
}

/// Shared application state.
///
/// Holds the extractor (and through it the configuration) plus the clock.
/// Requests share no mutable state.
#[derive(Clone)]
pub struct AppState {
    extractor: Arc<ShiftExtractor>,
    clock: Clock,
}

impl AppState {
    /// Creates application state from a configuration, using the system clock.
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        Ok(Self {
            extractor: Arc::new(ShiftExtractor::new(config)?),
            clock: Clock::System,
        })
    }

    /// Replaces the clock.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Returns a shared handle to the extractor.
    pub fn extractor_handle(&self) -> Arc<ShiftExtractor> {
        Arc::clone(&self.extractor)
    }

    /// Returns the configuration.
    pub fn config(&self) -> &EngineConfig {
        self.extractor.config()
    }

    /// Returns the current instant.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Returns today's date in the configured timezone.
    pub fn today(&self) -> EngineResult<NaiveDate> {
        let tz = self.config().tz()?;
        Ok(self.now().with_timezone(&tz).date_naive())
    }
}
