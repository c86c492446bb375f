//! Tracing subscriber setup.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter directive for a run.
///
/// `verbose` (from `--logs` or `app.debug`) turns on debug output for the
/// gyani crates. Otherwise long-running commands log at `info` and one-shot
/// commands only at `warn`.
pub fn filter_directive(verbose: bool, long_running: bool) -> &'static str {
    match (verbose, long_running) {
        (true, _) => "gyani=debug,info",
        (false, true) => "info",
        (false, false) => "warn",
    }
}

/// Initialize tracing: compact output on stderr, plus an appending non-ANSI
/// copy in `file` when given.
pub fn init_logging(verbose: bool, long_running: bool, file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::new(filter_directive(verbose, long_running));

    let file_layer = match file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create log directory: {}", parent.display())
                })?;
            }
            let sink = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file: {}", path.display()))?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(false)
                    .with_writer(Arc::new(sink)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive(true, true), "gyani=debug,info");
        assert_eq!(filter_directive(true, false), "gyani=debug,info");
        assert_eq!(filter_directive(false, true), "info");
        assert_eq!(filter_directive(false, false), "warn");
    }

    #[test]
    fn test_directives_parse() {
        for (verbose, long_running) in [(true, true), (false, true), (false, false)] {
            assert!(EnvFilter::try_new(filter_directive(verbose, long_running)).is_ok());
        }
    }
}
