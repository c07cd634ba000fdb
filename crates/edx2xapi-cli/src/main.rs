//! edx2xapi entry point: converts edX tracking-log lines read from stdin
//! into xAPI statements written to stdout.

use std::error::Error;
use std::io::{self, BufWriter};

use edx2xapi_cli::config::Settings;
use edx2xapi_cli::pipeline::{default_registry, run};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr; stdout carries statements.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .json()
        .init();

    let settings = Settings::from_env()?;
    tracing::info!(
        platform_url = settings.converter.platform_url(),
        "Starting edX to xAPI conversion"
    );

    let registry = default_registry(&settings.converter);
    let summary = run(
        &settings,
        &registry,
        io::stdin().lock(),
        BufWriter::new(io::stdout().lock()),
    )?;

    tracing::info!(
        converted = summary.converted,
        skipped = summary.skipped,
        failed = summary.failed,
        "Conversion finished"
    );

    Ok(())
}
