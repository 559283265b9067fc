//! Logger for the generator binary.
//!
//! [`ConstsLogger`] implements the `log` crate's `Log` trait and writes one
//! line per record to stderr:
//!
//! ```text
//! 12:04:31 WARN     skipping XKCD_COLORS entry `xkcd:foo` (#203): ...
//! ```

use std::io::Write;
use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use time::{OffsetDateTime, format_description::OwnedFormatItem};

use crate::sync::lock_recover;

type Sink = Box<dyn Write + Send>;

const DEFAULT_TIME_FORMAT: &str = "[hour]:[minute]:[second]";

/// Plain-text logger for the `log` crate.
///
/// # Thread Safety
///
/// The sink is behind a mutex with poison recovery, so concurrent records
/// never interleave within a line.
pub struct ConstsLogger {
    level: LevelFilter,
    show_time: bool,
    show_level: bool,
    show_target: bool,
    time_format: OwnedFormatItem,
    sink: Mutex<Sink>,
}

impl Default for ConstsLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstsLogger {
    /// Create a logger writing to stderr at `Warn` level.
    #[must_use]
    pub fn new() -> Self {
        let time_format = time::format_description::parse_owned::<2>(DEFAULT_TIME_FORMAT)
            .unwrap_or_else(|_| OwnedFormatItem::Compound(Box::new([])));
        Self {
            level: LevelFilter::Warn,
            show_time: true,
            show_level: true,
            show_target: false,
            time_format,
            sink: Mutex::new(Box::new(std::io::stderr())),
        }
    }

    /// Set the minimum log level.
    #[must_use]
    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Enable or disable timestamps.
    #[must_use]
    pub fn show_time(mut self, show: bool) -> Self {
        self.show_time = show;
        self
    }

    /// Enable or disable log levels.
    #[must_use]
    pub fn show_level(mut self, show: bool) -> Self {
        self.show_level = show;
        self
    }

    /// Prefix messages with the record target (module path).
    #[must_use]
    pub fn show_target(mut self, show: bool) -> Self {
        self.show_target = show;
        self
    }

    /// Override time format. Invalid descriptions keep the previous format.
    #[must_use]
    pub fn time_format(mut self, format: &str) -> Self {
        if let Ok(parsed) = time::format_description::parse_owned::<2>(format) {
            self.time_format = parsed;
        }
        self
    }

    /// Write to `sink` instead of stderr.
    #[must_use]
    pub fn writer(mut self, sink: impl Write + Send + 'static) -> Self {
        self.sink = Mutex::new(Box::new(sink));
        self
    }

    /// Install as the global logger.
    ///
    /// # Errors
    ///
    /// Returns `SetLoggerError` if a global logger is already installed.
    pub fn init(self) -> Result<(), SetLoggerError> {
        log::set_max_level(self.level);
        log::set_boxed_logger(Box::new(self))
    }

    fn format_time(&self) -> String {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        now.format(&self.time_format)
            .unwrap_or_else(|_| now.to_string())
    }

    fn format_record(&self, record: &Record<'_>) -> String {
        let mut line = String::new();

        if self.show_time {
            line.push_str(&self.format_time());
            line.push(' ');
        }

        if self.show_level {
            let level_name = record.level().to_string();
            line.push_str(&format!("{level_name:<8} "));
        }

        if self.show_target {
            line.push_str(record.target());
            line.push_str(": ");
        }

        line.push_str(&record.args().to_string());
        line.push('\n');
        line
    }
}

impl Log for ConstsLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = self.format_record(record);
        let mut sink = lock_recover(&self.sink);
        // Nowhere left to report a failing log sink.
        let _ = sink.write_all(line.as_bytes());
    }

    fn flush(&self) {
        let _ = lock_recover(&self.sink).flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn emit(logger: &ConstsLogger, level: log::Level, message: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{message}"))
                .level(level)
                .target("named_color_consts::generator")
                .build(),
        );
    }

    #[test]
    fn test_format_without_time() {
        let buffer = SharedBuffer::default();
        let logger = ConstsLogger::new().show_time(false).writer(buffer.clone());
        emit(&logger, log::Level::Warn, "skipping entry");
        assert_eq!(buffer.contents(), "WARN     skipping entry\n");
    }

    #[test]
    fn test_level_filtering() {
        let buffer = SharedBuffer::default();
        let logger = ConstsLogger::new()
            .level(LevelFilter::Warn)
            .show_time(false)
            .writer(buffer.clone());
        emit(&logger, log::Level::Info, "hidden");
        emit(&logger, log::Level::Error, "shown");
        assert_eq!(buffer.contents(), "ERROR    shown\n");
    }

    #[test]
    fn test_show_target_and_hide_level() {
        let buffer = SharedBuffer::default();
        let logger = ConstsLogger::new()
            .level(LevelFilter::Debug)
            .show_time(false)
            .show_level(false)
            .show_target(true)
            .writer(buffer.clone());
        emit(&logger, log::Level::Debug, "rendering CSS4_COLORS");
        assert_eq!(
            buffer.contents(),
            "named_color_consts::generator: rendering CSS4_COLORS\n"
        );
    }

    #[test]
    fn test_time_prefix_uses_format() {
        let buffer = SharedBuffer::default();
        let logger = ConstsLogger::new()
            .time_format("[year]")
            .writer(buffer.clone());
        emit(&logger, log::Level::Error, "boom");
        let contents = buffer.contents();
        let (year, rest) = contents.split_once(' ').unwrap();
        assert_eq!(year.len(), 4);
        assert!(year.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(rest, "ERROR    boom\n");
    }

    #[test]
    fn test_invalid_time_format_is_ignored() {
        let logger = ConstsLogger::new().time_format("[not a component]");
        assert!(!logger.format_time().is_empty());
    }

    #[test]
    fn test_default_time_format_is_clock_time() {
        let time = ConstsLogger::new().format_time();
        let parts: Vec<&str> = time.split(':').collect();
        assert_eq!(parts.len(), 3, "{time}");
        assert!(
            parts
                .iter()
                .all(|p| p.len() == 2 && p.chars().all(|c| c.is_ascii_digit()))
        );
    }
}
