//! Diagnostics for the `paye` binary.
//!
//! Stdout carries the estimate, so every log line goes to stderr and,
//! with `--log-file`, to a file as well. Lines are tagged with the
//! workspace crate that emitted them:
//!
//! ```text
//! 14:02:11.418  WARN [core] validation: rejected item amount input="abc"
//! ```

use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

const DEFAULT_FILTER: &str = "warn";

/// Splits an event target such as `paye_core::calculations::engine` into
/// the crate tag (`core`) and the module path inside it.
fn split_target(target: &str) -> (&str, &str) {
    let target = target.strip_prefix("paye_").unwrap_or(target);
    target.split_once("::").unwrap_or((target, ""))
}

struct PayeFormat;

impl<S, N> FormatEvent<S, N> for PayeFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();
        let time = Local::now().format("%H:%M:%S%.3f");
        let level = meta.level();

        if ansi {
            let color = match *level {
                Level::ERROR => "31",
                Level::WARN => "33",
                Level::INFO => "32",
                Level::DEBUG => "34",
                Level::TRACE => "35",
            };
            write!(writer, "\x1b[2m{time}\x1b[0m \x1b[1;{color}m{level:>5}\x1b[0m ")?;
        } else {
            write!(writer, "{time} {level:>5} ")?;
        }

        let (tag, module) = split_target(meta.target());
        if module.is_empty() {
            write!(writer, "[{tag}] ")?;
        } else {
            write!(writer, "[{tag}] {module}: ")?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Builds the active filter. An explicit `--log-level` wins over
/// `RUST_LOG`; with neither, only warnings and errors are shown.
fn build_filter(level: Option<&str>) -> Result<EnvFilter> {
    match level {
        Some(level) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level '{level}'")),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

fn open_log_file(path: &Path) -> Result<File> {
    File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))
}

/// Installs the global subscriber. Call once, after argument parsing.
///
/// `level` accepts a bare level (`debug`) or any `EnvFilter` directive
/// (`paye_core=trace`). `file`, when given, is appended to without colour.
pub fn init_logging(
    level: Option<&str>,
    file: Option<&Path>,
) -> Result<()> {
    let filter = build_filter(level)?;
    let file = file.map(open_log_file).transpose()?;

    let stderr_layer = tracing_subscriber::fmt::layer()
        .event_format(PayeFormat)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal());

    let file_layer = file.map(|file| {
        tracing_subscriber::fmt::layer()
            .event_format(PayeFormat)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("logging already initialized")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn split_target_tags_workspace_crates() {
        assert_eq!(
            split_target("paye_core::calculations::engine"),
            ("core", "calculations::engine")
        );
        assert_eq!(split_target("paye_cli::app"), ("cli", "app"));
    }

    #[test]
    fn split_target_keeps_foreign_targets() {
        assert_eq!(split_target("paye"), ("paye", ""));
        assert_eq!(split_target("csv::reader"), ("csv", "reader"));
    }

    #[test]
    fn build_filter_accepts_level_and_directive() {
        assert!(build_filter(Some("debug")).is_ok());
        assert!(build_filter(Some("warn,paye_core=trace")).is_ok());
    }

    #[test]
    fn build_filter_rejects_unknown_level() {
        let err = build_filter(Some("paye_core=loud")).unwrap_err();

        assert!(err.to_string().contains("paye_core=loud"));
    }

    #[test]
    fn open_log_file_fails_for_missing_directory() {
        let err = open_log_file(Path::new("/nonexistent-dir/paye.log")).unwrap_err();

        assert!(err.to_string().contains("/nonexistent-dir/paye.log"));
    }
}
