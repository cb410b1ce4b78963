//! # Logging
//!
//! slog-based logging. The root logger always carries an async discard drain;
//! terminal, syslog and journald drains are added behind the corresponding
//! feature flags. The global logger is installed via `slog-scope`, and
//! `slog-stdlog` bridges the `log` crate macros into it.

use slog::{Drain, Logger, o};
use slog_scope::GlobalLoggerGuard;

use super::error::{Error, Result};

/// Installs the global logger and the `log` crate bridge.
///
/// The returned guard must stay alive for the duration of the program;
/// dropping it uninstalls the global logger.
pub fn setup_logging() -> Result<GlobalLoggerGuard> {
    let guard = slog_scope::set_global_logger(default_root_logger()?);

    slog_stdlog::init()
        .map_err(|e| Error::new(&format!("cannot register stdlog bridge: {}", e)))?;

    Ok(guard)
}

/// Builds the root logger from the drains enabled at compile time.
pub fn default_root_logger() -> Result<Logger> {
    let drain = slog_async::Async::default(slog::Discard).ignore_res();

    #[cfg(feature = "termlog")]
    let drain = slog::Duplicate(default_term_drain()?.ignore_res(), drain).ignore_res();

    #[cfg(feature = "syslog")]
    let drain = slog::Duplicate(default_syslog_drain()?.ignore_res(), drain).ignore_res();

    #[cfg(all(feature = "journald", target_os = "linux"))]
    let drain = slog::Duplicate(default_journald_drain().ignore_res(), drain).ignore_res();

    let logger = Logger::root(drain, o!("who" => "thermosite"));

    Ok(logger)
}

// Term drain: log to the terminal
#[cfg(feature = "termlog")]
fn default_term_drain() -> Result<slog_async::Async> {
    let decorator = slog_term::TermDecorator::new().build();
    let term = slog_term::FullFormat::new(decorator).build();

    Ok(slog_async::Async::default(term.fuse()))
}

// Syslog drain: log to the local syslog daemon
#[cfg(feature = "syslog")]
fn default_syslog_drain() -> Result<slog_async::Async> {
    let syslog = slog_syslog::unix_3164(slog_syslog::Facility::LOG_USER)
        .map_err(|e| Error::new(&format!("cannot connect to syslog: {}", e)))?;

    Ok(slog_async::Async::default(syslog.fuse()))
}

// Journald drain: log to the systemd journal
#[cfg(all(feature = "journald", target_os = "linux"))]
fn default_journald_drain() -> slog_async::Async {
    slog_async::Async::default(slog_journald::JournaldDrain.ignore_res())
}
