use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use fanlog::{Config, Level, LogData};

#[derive(Parser)]
#[command(name = "fanlog", about = "Dispatch one log event to the configured sinks")]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/fanlog/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Severity of the event: debug, info, warning or error.
    #[arg(long, short, default_value = "info")]
    level: Level,

    /// Structured data as a JSON object, e.g. '{"request_id":"abc"}'.
    #[arg(long)]
    data: Option<String>,

    /// Print diagnostics about config loading and sink failures to stderr.
    #[arg(long, short)]
    verbose: bool,

    message: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
    }

    let cfg = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load config")?;

    let data: Option<LogData> = cli
        .data
        .as_deref()
        .map(|raw| serde_json::from_str::<LogData>(raw))
        .transpose()
        .context("--data must be a JSON object")?;

    let logger = fanlog::logger_from_config(&cfg);
    logger.log(&cli.message, cli.level, data.as_ref())?;
    Ok(())
}
