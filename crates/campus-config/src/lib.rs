//! # Campus Config
//!
//! Configuration structures loaded from environment variables and files:
//!
//! - [`access`]: Landing page, settings access and permission file location
//! - [`grading`]: Aggregation scheme and CA/final weights
//! - [`logging`]: Log level, format and optional log directory
//! - [`permissions_file`]: TOML overrides for the permission table
//!
//! Every config offers `from_env()` and a `from_lookup()` constructor that
//! reads through a closure, which keeps tests away from process-wide state.
//! Missing or unparseable values fall back to defaults.
//!
//! # Example
//!
//! ```ignore
//! use campus_config::{AccessConfig, GradingConfig, LoggingConfig};
//!
//! let access = AccessConfig::from_env();
//! let grading = GradingConfig::from_env();
//! let logging = LoggingConfig::from_env();
//! ```

pub mod access;
pub mod error;
pub mod grading;
pub mod logging;
pub mod permissions_file;

// Re-export commonly used types at crate root
pub use access::AccessConfig;
pub use error::ConfigError;
pub use grading::{GradingConfig, GradingScheme};
pub use logging::{LogFormat, LoggingConfig};
pub use permissions_file::{PermissionFile, load_permission_file, parse_permission_file};

/// Parses a flag value: `true`/`1`/`yes`/`on` and their negatives.
pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Reads an environment variable, treating blank values as unset.
pub(crate) fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
