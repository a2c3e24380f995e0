//! Configuration loading and management for the shift calendar engine.
//!
//! Configuration is an explicit value handed to the extractor, the calendar
//! emitter and the HTTP state. It can be loaded from a YAML file or built
//! from defaults.
//!
//! # Example
//!
//! ```no_run
//! use shift_calendar::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default.yaml").unwrap();
//! println!("Timezone: {}", config.timezone);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_EVENT_TITLE, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_TIMEZONE, EngineConfig};
