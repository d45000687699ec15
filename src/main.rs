use anyhow::{Context, Result};
use clap::Parser;
use movie_catalog::config::{LogFormat, LoggingSettings, Settings};
use movie_catalog::Application;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Interactive reports over a movie review export
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// CSV file to load (overrides catalog.input_path)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Where menu option 9 writes its export (overrides catalog.export_path)
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Log filter, e.g. `debug` (overrides logging.level; RUST_LOG wins over both)
    #[arg(long)]
    log_level: Option<String>,
}

fn init_tracing(logging: &LoggingSettings) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::new().context("Failed to load configuration")?;
    if let Some(input) = cli.input {
        settings.catalog.input_path = input;
    }
    if let Some(export) = cli.export {
        settings.catalog.export_path = export;
    }
    if let Some(level) = cli.log_level {
        settings.logging.level = level;
    }

    init_tracing(&settings.logging);
    info!("Starting Movie Catalog");

    let input_path = settings.catalog.input_path.clone();
    let app = Application::load(settings)
        .with_context(|| format!("Failed to load movies from {}", input_path.display()))?;

    if let Some(warning) = app.skip_warning() {
        println!("{warning}");
    }

    app.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
