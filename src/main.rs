use anyhow::Result;
use campus::cli::{Cli, run};
use campus_config::{AccessConfig, GradingConfig, LoggingConfig};
use clap::Parser;
use dotenvy::dotenv;
use tracing::info;

fn main() -> Result<()> {
    dotenv().ok();

    let cli = Cli::parse();
    let _log_guard = campus_observability::init_logging(&LoggingConfig::from_env());

    let access = AccessConfig::from_env();
    let grading = GradingConfig::from_env();
    info!(
        landing = %access.default_landing,
        settings_allow_admin = access.settings_allow_admin,
        scheme = %grading.scheme,
        "Configuration loaded"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(cli, access, grading, &mut out)
}
