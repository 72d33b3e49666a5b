//! Logging Infrastructure
//!
//! Console output goes to stderr so it never mixes with the interactive
//! prompt on stdout. File output rotates daily under `<log_dir>/app`.

use std::fs;
use std::path::Path;
use std::sync::Mutex;

use tracing::Subscriber;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Log level or filter directive (e.g., "info", "receipt_app=debug")
/// * `json_format` - JSON console output (production) instead of pretty text
/// * `log_dir` - Optional directory for daily rotating file logs
///
/// `RUST_LOG` takes precedence over `level` when set. The filter applies
/// to console and file output alike.
///
/// # Examples
/// ```no_run
/// use receipt_app::utils::logger::init_logger_with_file;
///
/// // Development setup (console only)
/// init_logger_with_file("debug", false, None)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let app_log = match log_dir {
        Some(dir) => {
            let app_log_dir = dir.join("app");
            fs::create_dir_all(&app_log_dir)?;
            Some(RollingFileAppender::new(
                Rotation::DAILY,
                app_log_dir,
                "receipt",
            ))
        }
        None => None,
    };

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if json_format {
        let console_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_thread_ids(true)
            .with_writer(std::io::stderr);

        subscriber
            .with(console_layer)
            .with(app_log.map(file_layer))
            .try_init()?;
    } else {
        let console_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_writer(std::io::stderr);

        subscriber
            .with(console_layer)
            .with(app_log.map(file_layer))
            .try_init()?;
    }

    Ok(())
}

/// File logs are always JSON, one event per line
fn file_layer<S>(log: RollingFileAppender) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .json()
        .with_ansi(false)
        .with_target(true)
        .with_current_span(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(Mutex::new(log))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_logging_creates_app_dir() {
        let dir = tempfile::tempdir().unwrap();
        init_logger_with_file("debug", true, Some(dir.path())).unwrap();
        tracing::info!("logger ready");

        assert!(dir.path().join("app").is_dir());
        // Only one global subscriber per process
        assert!(init_logger_with_file("info", false, None).is_err());
    }
}
