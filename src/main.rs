#![forbid(unsafe_code)]

use anyhow::Result;
use tracing::{Level as TraceLevel, info};
use tracing_subscriber::FmtSubscriber;

use kernelstub_config::ConfigStore;

/// Diagnostic entry point: resolve the configuration (optionally from a
/// path given as the first argument) and dump it as indented JSON.
fn main() -> Result<()> {
    let log_level = match std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let store = match std::env::args().nth(1) {
        Some(path) => ConfigStore::at_path(path)?,
        None => ConfigStore::new()?,
    };
    info!(path = %store.path().display(), "configuration resolved");

    println!("{}", store.render()?);
    Ok(())
}
