use std::fmt;

use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{self, FormatEvent, FormatFields};
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::registry::LookupSpan;

/// Local time with millisecond precision, e.g. `2024-05-01 13:45:02,118`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Separator between the fields of a log line
pub const SEPARATOR: &str = " - ";

/// Timer writing local time in [`TIMESTAMP_FORMAT`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTimestamp;

impl FormatTime for LocalTimestamp {
    fn format_time(&self, w: &mut format::Writer<'_>) -> fmt::Result {
        write!(w, "{}", Local::now().format(TIMESTAMP_FORMAT))
    }
}

/// Name printed for each level
pub fn level_name(level: &Level) -> &'static str {
    if *level == Level::WARN {
        "WARNING"
    } else {
        level.as_str()
    }
}

/// Event formatter producing one line per event:
///
/// ```text
/// <timestamp> - <logger-name> - <LEVEL> - <message>
/// ```
///
/// The logger name is the event target. Fields other than `message` follow
/// the message as `key=value`.
#[derive(Debug, Clone, Default)]
pub struct LineFormat<T = LocalTimestamp> {
    timer: T,
}

impl LineFormat {
    /// Formatter stamping lines with local time
    pub const fn new() -> Self {
        Self {
            timer: LocalTimestamp,
        }
    }
}

impl<T: FormatTime> LineFormat<T> {
    /// Formatter using a custom timer
    pub const fn with_timer(timer: T) -> Self {
        Self { timer }
    }
}

impl<S, N, T> FormatEvent<S, N> for LineFormat<T>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
    T: FormatTime,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        self.timer.format_time(&mut writer)?;
        write!(
            writer,
            "{SEPARATOR}{}{SEPARATOR}{}{SEPARATOR}",
            meta.target(),
            level_name(meta.level())
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
