//! calcroi: bank ROI and interest-rate lookup.

use std::process::ExitCode;

use anyhow::Result;
use calcroi_lib::{app, config};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = config::AppConfig::parse();
    app::run(&config)
}
