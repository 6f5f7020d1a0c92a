//! Campus observability
//!
//! Initializes the global `tracing` subscriber for the campus binaries.
//!
//! # Examples
//!
//! ```no_run
//! use campus_config::LoggingConfig;
//! use campus_observability::init_logging;
//!
//! let _guard = init_logging(&LoggingConfig::from_env());
//! tracing::info!("ready");
//! ```

pub mod logging;

pub use logging::{default_filter_directives, init_logging};
pub use tracing_appender::non_blocking::WorkerGuard;
