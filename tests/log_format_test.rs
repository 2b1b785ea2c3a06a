mod common;

use common::CaptureWriter;
use envlog::infrastructure::logging::{build_subscriber, debug, error, info, warn, LineFormat};
use envlog::{LogStream, LoggingConfig};
use tracing::Subscriber;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;

/// Timer that always prints the same instant
struct FixedTime;

impl FormatTime for FixedTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        w.write_str("2024-01-01 00:00:00,000")
    }
}

fn config(level: &str) -> LoggingConfig {
    LoggingConfig {
        level: level.to_string(),
        stream: LogStream::Stdout,
        respect_rust_log: false,
    }
}

/// Unfiltered subscriber with a fixed clock
fn fixed_time_subscriber(writer: CaptureWriter) -> impl Subscriber + Send + Sync {
    tracing_subscriber::registry().with(
        tracing_subscriber::fmt::layer()
            .event_format(LineFormat::with_timer(FixedTime))
            .with_writer(writer)
            .with_ansi(false),
    )
}

fn capture<F: FnOnce()>(f: F) -> String {
    let writer = CaptureWriter::default();
    tracing::subscriber::with_default(fixed_time_subscriber(writer.clone()), f);
    writer.contents()
}

/// Split a line into its four ` - ` separated fields
fn fields(line: &str) -> Vec<&str> {
    line.splitn(4, " - ").collect()
}

#[test]
fn test_line_layout() {
    let out = capture(|| info!(target: "app.service", "This is an info message"));
    assert_eq!(
        out,
        "2024-01-01 00:00:00,000 - app.service - INFO - This is an info message\n"
    );
}

#[test]
fn test_default_target_is_module_path() {
    let out = capture(|| error!("This is an error message"));
    assert_eq!(
        out,
        format!(
            "2024-01-01 00:00:00,000 - {} - ERROR - This is an error message\n",
            module_path!()
        )
    );
}

#[test]
fn test_extra_fields_follow_message() {
    let out = capture(|| warn!(target: "app", attempt = 3, "retrying"));
    assert_eq!(
        out,
        "2024-01-01 00:00:00,000 - app - WARNING - retrying attempt=3\n"
    );
}

#[test]
fn test_embedded_newline_is_written_verbatim() {
    // Only the first line carries the prefix, as with a plain text logger
    let out = capture(|| info!(target: "app", "first\nsecond"));
    assert_eq!(out, "2024-01-01 00:00:00,000 - app - INFO - first\nsecond\n");
}

#[test]
fn test_info_call_produces_one_formatted_line() {
    let writer = CaptureWriter::default();
    let subscriber = build_subscriber(&config("info"), writer.clone()).unwrap();

    tracing::subscriber::with_default(subscriber, || {
        info!(target: "app", "This is an info message");
    });

    let lines = writer.lines();
    assert_eq!(lines.len(), 1);

    let parts = fields(&lines[0]);
    assert_eq!(parts.len(), 4);
    assert_eq!(parts[0].len(), "2024-01-01 00:00:00,000".len());
    assert_eq!(parts[1], "app");
    assert_eq!(parts[2], "INFO");
    assert_eq!(parts[3], "This is an info message");
}

#[test]
fn test_below_threshold_is_silent() {
    let writer = CaptureWriter::default();
    let subscriber = build_subscriber(&config("info"), writer.clone()).unwrap();

    tracing::subscriber::with_default(subscriber, || {
        debug!("not at info");
    });

    assert!(writer.lines().is_empty());
}

#[test]
fn test_error_threshold_drops_info_and_warn() {
    let writer = CaptureWriter::default();
    let subscriber = build_subscriber(&config("error"), writer.clone()).unwrap();

    tracing::subscriber::with_default(subscriber, || {
        info!("hidden");
        warn!("hidden");
        error!("boom");
    });

    let lines = writer.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(" - ERROR - boom"));
}

#[test]
fn test_each_event_is_its_own_line() {
    let writer = CaptureWriter::default();
    let subscriber = build_subscriber(&config("info"), writer.clone()).unwrap();

    tracing::subscriber::with_default(subscriber, || {
        info!("This is an info message");
        error!("This is an error message");
    });

    let lines = writer.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(fields(&lines[0])[1], module_path!());
    assert_eq!(fields(&lines[0])[2], "INFO");
    assert_eq!(fields(&lines[1])[2], "ERROR");
    assert_eq!(fields(&lines[1])[3], "This is an error message");
}

#[test]
fn test_no_ansi_codes() {
    let writer = CaptureWriter::default();
    let subscriber = build_subscriber(&config("info"), writer.clone()).unwrap();

    tracing::subscriber::with_default(subscriber, || info!(count = 2, "plain"));

    assert!(!writer.contents().contains('\u{1b}'));
    assert!(writer.contents().ends_with(" - INFO - plain count=2\n"));
}

#[test]
fn test_rust_log_refines_threshold() {
    temp_env::with_var("RUST_LOG", Some("debug"), || {
        let config = LoggingConfig {
            respect_rust_log: true,
            ..config("info")
        };
        let writer = CaptureWriter::default();
        let subscriber = build_subscriber(&config, writer.clone()).unwrap();

        tracing::subscriber::with_default(subscriber, || debug!("now visible"));

        assert_eq!(writer.lines().len(), 1);
    });
}
