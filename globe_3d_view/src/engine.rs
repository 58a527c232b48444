/// Globe3D Engine - process-wide logging state
///
/// The view core itself is free of globals: every DrawContext owns its frame
/// state. The only shared state is the logger and its severity threshold,
/// kept in thread-safe static storage with RwLock.

use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Entries below this severity are dropped before reaching the logger
static MIN_SEVERITY: OnceLock<RwLock<LogSeverity>> = OnceLock::new();

const DEFAULT_MIN_SEVERITY: LogSeverity = LogSeverity::Info;

fn logger_lock() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

fn threshold_lock() -> &'static RwLock<LogSeverity> {
    MIN_SEVERITY.get_or_init(|| RwLock::new(DEFAULT_MIN_SEVERITY))
}

// ===== PUBLIC API =====

/// Engine-wide logging facade
///
/// # Example
///
/// ```no_run
/// use globe_3d_view::globe3d::{Engine, log::{Logger, LogEntry, LogSeverity}};
///
/// struct HostLogger;
/// impl Logger for HostLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Forward to the host application...
///     }
/// }
///
/// Engine::set_logger(HostLogger);
/// Engine::set_min_severity(LogSeverity::Trace);
/// ```
pub struct Engine;

impl Engine {
    /// Replace the current logger
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = logger_lock().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger) and the threshold to Info
    pub fn reset_logger() {
        if let Ok(mut lock) = logger_lock().write() {
            *lock = Box::new(DefaultLogger);
        }
        Self::set_min_severity(DEFAULT_MIN_SEVERITY);
    }

    /// Set the lowest severity that reaches the logger
    pub fn set_min_severity(severity: LogSeverity) {
        if let Ok(mut lock) = threshold_lock().write() {
            *lock = severity;
        }
    }

    /// Current severity threshold
    pub fn min_severity() -> LogSeverity {
        threshold_lock()
            .read()
            .map(|lock| *lock)
            .unwrap_or(DEFAULT_MIN_SEVERITY)
    }

    /// Whether an entry of this severity would be forwarded
    pub fn is_enabled(severity: LogSeverity) -> bool {
        severity >= Self::min_severity()
    }

    /// Logging entry point for simple logs without file:line
    ///
    /// Used by macros like engine_info!, engine_trace!, etc.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        Self::dispatch(severity, source, message, None, None);
    }

    /// Logging entry point with file:line information (for ERROR logs)
    ///
    /// Used by the engine_error! macro to include source location.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        Self::dispatch(severity, source, message, Some(file), Some(line));
    }

    fn dispatch(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: Option<&'static str>,
        line: Option<u32>,
    ) {
        if !Self::is_enabled(severity) {
            return;
        }
        if let Ok(lock) = logger_lock().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file,
                line,
            });
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
