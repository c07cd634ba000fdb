//! Line-oriented conversion pipeline.

use std::io::{BufRead, Write};

use edx2xapi_core::batch::convert_batch;
use edx2xapi_core::converter::ConverterConfig;
use edx2xapi_core::registry::ConverterRegistry;
use edx2xapi_navigation::application::converters as navigation;
use edx2xapi_video::application::converters as video;
use tracing::{debug, instrument, warn};

use crate::config::Settings;
use crate::error::AppError;

/// Builds a registry holding every supported converter.
#[must_use]
pub fn default_registry(config: &ConverterConfig) -> ConverterRegistry {
    let registry = video::register(ConverterRegistry::new(), config);
    navigation::register(registry, config)
}

/// Counts of what a run did with its input events.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Statements written.
    pub converted: usize,
    /// Events without a converter that were skipped.
    pub skipped: usize,
    /// Events that failed and were skipped.
    pub failed: usize,
}

/// Converts newline-delimited events from `input` and writes one statement
/// per line to `output`. Blank lines are ignored and do not count as events.
///
/// # Errors
///
/// Returns `AppError::Conversion` for the first failing event unless
/// `settings.ignore_errors` is set (unsupported events only fail when
/// `settings.fail_on_unknown` is set), or `AppError::Io` /
/// `AppError::Serialization` if reading or writing fails.
#[instrument(
    skip_all,
    fields(
        ignore_errors = settings.ignore_errors,
        fail_on_unknown = settings.fail_on_unknown
    )
)]
pub fn run<R: BufRead, W: Write>(
    settings: &Settings,
    registry: &ConverterRegistry,
    input: R,
    mut output: W,
) -> Result<Summary, AppError> {
    let mut summary = Summary::default();
    let mut read_error = None;
    let events = input
        .lines()
        .map_while(|line| line.map_err(|e| read_error = Some(e)).ok())
        .filter(|line| !line.trim().is_empty());

    for result in convert_batch(registry, events) {
        match result {
            Ok(statement) => {
                serde_json::to_writer(&mut output, &statement)?;
                output.write_all(b"\n")?;
                summary.converted += 1;
            }
            Err(err) if err.is_unsupported() && !settings.fail_on_unknown => {
                debug!(index = err.index, error = %err.source, "skipping unsupported event");
                summary.skipped += 1;
            }
            Err(err) if settings.ignore_errors => {
                warn!(
                    index = err.index,
                    converter = err.converter,
                    error = %err.source,
                    "skipping event that failed to convert"
                );
                summary.failed += 1;
            }
            Err(err) => return Err(err.into()),
        }
    }

    if let Some(e) = read_error {
        return Err(e.into());
    }
    output.flush()?;
    Ok(summary)
}
