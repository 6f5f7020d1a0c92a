use std::path::PathBuf;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid permissions file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid access configuration: {0}")]
    Invalid(String),
}
