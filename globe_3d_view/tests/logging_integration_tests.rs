//! Integration tests for the logging a DrawContext emits
//!
//! Every test swaps the global logger, so all of them are #[serial].
//!
//! Run with: cargo test --test logging_integration_tests

use globe_3d_view::globe3d::log::{LogEntry, LogSeverity, Logger};
use globe_3d_view::globe3d::{
    DrawContext, DrawContextConfig, Engine, FixedElevationBounds, Globe, LookAtNavigator, Viewport,
};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn install(min_severity: LogSeverity) -> Arc<Mutex<Vec<LogEntry>>> {
        let entries = Arc::new(Mutex::new(Vec::new()));
        Engine::set_logger(Self { entries: entries.clone() });
        Engine::set_min_severity(min_severity);
        entries
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn globe() -> Globe {
    Globe::wgs84(FixedElevationBounds::new(125.0, 350.0))
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_successful_frame_is_quiet_at_info() {
    let entries = TestLogger::install(LogSeverity::Info);

    let mut dc = DrawContext::new();
    dc.reset(Viewport::from_size(848.0, 848.0), &LookAtNavigator::default(), &globe())
        .unwrap();

    let captured = entries.lock().unwrap().len();
    Engine::reset_logger();
    assert_eq!(captured, 0);
}

#[test]
#[serial]
fn test_integration_frame_trace() {
    let entries = TestLogger::install(LogSeverity::Trace);

    let mut dc = DrawContext::new();
    for _ in 0..3 {
        dc.reset(Viewport::from_size(640.0, 480.0), &LookAtNavigator::default(), &globe())
            .unwrap();
    }

    let captured = entries.lock().unwrap().clone();
    Engine::reset_logger();

    assert_eq!(captured.len(), 3);
    for (i, entry) in captured.iter().enumerate() {
        assert_eq!(entry.severity, LogSeverity::Trace);
        assert_eq!(entry.source, "globe3d::DrawContext");
        assert!(entry.message.starts_with(&format!("Frame {}: 640x480", i + 1)));
        assert_eq!(entry.file, None);
    }
}

#[test]
#[serial]
fn test_integration_failed_reset_logs_error_with_location() {
    let entries = TestLogger::install(LogSeverity::Info);

    let mut dc = DrawContext::new();
    let navigator = LookAtNavigator { range: f64::NAN, ..LookAtNavigator::default() };
    let result = dc.reset(Viewport::from_size(848.0, 848.0), &navigator, &globe());
    assert!(result.is_err());

    let captured = entries.lock().unwrap().clone();
    Engine::reset_logger();

    assert_eq!(captured.len(), 1);
    let entry = &captured[0];
    assert_eq!(entry.severity, LogSeverity::Error);
    assert_eq!(entry.source, "globe3d::DrawContext");
    assert!(entry.message.contains("range"), "{}", entry.message);
    assert!(entry.file.is_some_and(|file| file.ends_with("draw_context.rs")));
    assert!(entry.line.is_some());
}

#[test]
#[serial]
fn test_integration_config_logging() {
    let entries = TestLogger::install(LogSeverity::Debug);

    let accepted = DrawContext::with_config(DrawContextConfig {
        pixel_ratio: 2.0,
        ..Default::default()
    });
    let rejected = DrawContext::with_config(DrawContextConfig {
        pixel_ratio: 0.0,
        ..Default::default()
    });

    let captured = entries.lock().unwrap().clone();
    Engine::reset_logger();

    assert!(accepted.is_ok());
    assert!(rejected.is_err());
    assert_eq!(captured.len(), 2);
    assert_eq!(captured[0].severity, LogSeverity::Debug);
    assert!(captured[0].message.starts_with("Configured:"));
    assert_eq!(captured[1].severity, LogSeverity::Error);
    assert!(captured[1].message.contains("pixel_ratio"));
}

#[test]
#[serial]
fn test_integration_queries_do_not_log() {
    let entries = TestLogger::install(LogSeverity::Trace);

    let dc = DrawContext::new();
    assert!(dc.project(globe_3d_view::glam::DVec3::ZERO).is_err());
    assert!(dc.pixel_size_at_distance(1.0).is_err());

    let captured = entries.lock().unwrap().len();
    Engine::reset_logger();
    assert_eq!(captured, 0);
}

#[test]
#[serial]
fn test_integration_logger_reset() {
    let entries = TestLogger::install(LogSeverity::Info);
    Engine::log(LogSeverity::Info, "test", "Message 1".to_string());
    assert_eq!(entries.lock().unwrap().len(), 1);

    Engine::reset_logger();

    // Goes to the default logger, not captured
    Engine::log(LogSeverity::Info, "test", "Message 2".to_string());
    assert_eq!(entries.lock().unwrap().len(), 1);
    assert_eq!(Engine::min_severity(), LogSeverity::Info);
}
