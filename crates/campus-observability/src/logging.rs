use campus_config::{LogFormat, LoggingConfig};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Crates whose events are shown at the configured level.
const CAMPUS_TARGETS: [&str; 4] = [
    "campus",
    "campus_core",
    "campus_config",
    "campus_observability",
];

/// Filter directives used when `RUST_LOG` is not set: campus crates at
/// `level`, everything else at `warn`.
pub fn default_filter_directives(level: &str) -> String {
    let mut directives = vec!["warn".to_string()];
    directives.extend(CAMPUS_TARGETS.iter().map(|target| format!("{}={}", target, level)));
    directives.join(",")
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter_directives(level)))
}

fn file_layer(dir: &Path, level: &str) -> std::io::Result<(BoxedLayer, WorkerGuard)> {
    std::fs::create_dir_all(dir)?;

    let appender = tracing_appender::rolling::daily(dir, "campus.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = fmt::layer()
        .json()
        .with_ansi(false)
        .with_writer(writer)
        .with_filter(env_filter(level))
        .boxed();

    Ok((layer, guard))
}

/// Initialize logging for a campus binary.
///
/// # Configuration
///
/// - **Level**: `LOG_LEVEL` for campus crates, `RUST_LOG` overrides the whole filter
/// - **Format**: compact human-readable or JSON lines, written to stderr so
///   command output on stdout stays clean
/// - **Files**: when `LOG_DIR` is set, JSON lines also go to a daily rolling
///   `campus.log` in that directory
///
/// Returns the file writer guard; keep it alive until exit so buffered lines
/// are flushed. Calling this twice leaves the first subscriber in place.
pub fn init_logging(config: &LoggingConfig) -> Option<WorkerGuard> {
    let console: BoxedLayer = match config.format {
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .with_writer(std::io::stderr)
            .with_filter(env_filter(&config.level))
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_filter(env_filter(&config.level))
            .boxed(),
    };

    let mut layers = vec![console];
    let mut guard = None;

    if let Some(dir) = &config.log_dir {
        match file_layer(dir, &config.level) {
            Ok((layer, file_guard)) => {
                layers.push(layer);
                guard = Some(file_guard);
            }
            Err(e) => eprintln!(
                "Failed to open log directory {}: {}. Logging to console only.",
                dir.display(),
                e
            ),
        }
    }

    if tracing_subscriber::registry().with(layers).try_init().is_err() {
        eprintln!("Logging already initialized; keeping the existing subscriber");
    }

    guard
}
