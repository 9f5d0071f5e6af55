//! Console Logger
//!
//! `log` backend for the browser. Lines go to `console.*` on wasm32 (stderr
//! elsewhere) and the most recent ones are kept in a circular buffer so they
//! can be shown or attached to a bug report.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use chrono::Utc;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of lines retained by the ring buffer
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Logger writing to the console and to a bounded in-memory history
pub struct ConsoleLogger {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            lines: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Snapshot of the retained lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    /// Retained lines as one block, for a panic report
    pub fn report(&self) -> String {
        let lines = self.recent();
        format!("last {} log lines:\n{}", lines.len(), lines.join("\n"))
    }

    fn remember(&self, line: String) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }
}

/// Format a record the same way for the console and the history
pub fn format_line(record: &Record) -> String {
    format!(
        "{} {:<5} {}: {}",
        Utc::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record);
        emit(record.level(), &line);
        self.remember(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global logger. Later calls return the already installed one.
pub fn init(level: LevelFilter) -> Result<&'static ConsoleLogger, SetLoggerError> {
    init_with_capacity(level, DEFAULT_CAPACITY)
}

pub fn init_with_capacity(
    level: LevelFilter,
    capacity: usize,
) -> Result<&'static ConsoleLogger, SetLoggerError> {
    if let Some(existing) = LOGGER.get() {
        return Ok(existing);
    }
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

/// The installed logger, if `init` has run
pub fn global() -> Option<&'static ConsoleLogger> {
    LOGGER.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_line(logger: &ConsoleLogger, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("billed")
                .args(format_args!("{}", msg))
                .build(),
        );
    }

    #[test]
    fn test_keeps_only_latest_lines() {
        let logger = ConsoleLogger::new(LevelFilter::Trace, 2);
        record_line(&logger, Level::Info, "first");
        record_line(&logger, Level::Info, "second");
        record_line(&logger, Level::Info, "third");

        let lines = logger.recent();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("billed: second"));
        assert!(lines[1].ends_with("billed: third"));
    }

    #[test]
    fn test_filters_below_level() {
        let logger = ConsoleLogger::new(LevelFilter::Warn, 10);
        record_line(&logger, Level::Debug, "noise");
        record_line(&logger, Level::Error, "boom");

        let lines = logger.recent();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("ERROR"));
    }

    #[test]
    fn test_report_lists_retained_lines() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 2);
        record_line(&logger, Level::Info, "loaded 4 bills");
        record_line(&logger, Level::Warn, "no receipt");
        record_line(&logger, Level::Error, "upload failed");

        let report = logger.report();
        assert!(report.starts_with("last 2 log lines:\n"));
        assert!(!report.contains("loaded 4 bills"));
        assert!(report.ends_with("billed: upload failed"));
    }

    #[test]
    fn test_zero_capacity_still_keeps_one() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 0);
        record_line(&logger, Level::Info, "a");
        record_line(&logger, Level::Info, "b");
        assert_eq!(logger.recent().len(), 1);
    }
}
