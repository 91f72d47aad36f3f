//! Logging collaborator injected into the delegation tools.

use std::fmt;

use chrono::Local;
use log::Level;
use serde::{Deserialize, Serialize};

use crate::utilities::printer::{Printer, PrinterColor};

/// `log` target used for every record emitted by the delegation tools.
pub const LOG_TARGET: &str = "crewai_delegation::agent_tools";

/// Destination for the log lines emitted while resolving co-workers.
pub trait LogSink: Send + Sync + fmt::Debug {
    /// Record `message` at `level`.
    fn log(&self, level: Level, message: &str);
}

/// Default sink: forwards to the `log` facade and optionally echoes to the
/// console with timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    /// Enables console output with timestamps.
    pub verbose: bool,
    /// Color for informational messages.
    #[serde(default = "default_color")]
    pub default_color: PrinterColor,
    /// Internal printer (not serialized).
    #[serde(skip)]
    printer: Printer,
}

fn default_color() -> PrinterColor {
    PrinterColor::BoldYellow
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Logger {
    /// Create a new `Logger`.
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            default_color: default_color(),
            printer: Printer::default(),
        }
    }

    fn color_for(&self, level: Level) -> PrinterColor {
        match level {
            Level::Error => PrinterColor::BoldRed,
            Level::Warn => PrinterColor::Yellow,
            Level::Info => self.default_color,
            Level::Debug | Level::Trace => PrinterColor::Cyan,
        }
    }

    /// Format a console line: `[timestamp][LEVEL]: message`.
    fn format_line(level: Level, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        format!("\n[{}][{}]: {}", timestamp, level.as_str(), message)
    }
}

impl LogSink for Logger {
    fn log(&self, level: Level, message: &str) {
        log::log!(target: LOG_TARGET, level, "{}", message);
        if self.verbose {
            self.printer
                .print(&Self::format_line(level, message), self.color_for(level));
        }
    }
}

/// Sink that keeps every record in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    records: std::sync::Mutex<Vec<(Level, String)>>,
}

#[cfg(test)]
impl RecordingSink {
    pub(crate) fn records(&self) -> Vec<(Level, String)> {
        self.records.lock().unwrap().clone()
    }

    pub(crate) fn messages_at(&self, level: Level) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }
}

#[cfg(test)]
impl LogSink for RecordingSink {
    fn log(&self, level: Level, message: &str) {
        self.records.lock().unwrap().push((level, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_has_level() {
        let line = Logger::format_line(Level::Error, "boom");
        assert!(line.starts_with("\n["));
        assert!(line.ends_with("][ERROR]: boom"));
    }

    #[test]
    fn test_colors_by_level() {
        let logger = Logger::new(true);
        assert_eq!(logger.color_for(Level::Error), PrinterColor::BoldRed);
        assert_eq!(logger.color_for(Level::Info), PrinterColor::BoldYellow);
        assert_eq!(logger.color_for(Level::Debug), PrinterColor::Cyan);
    }

    #[test]
    fn test_logger_forwards_without_panicking() {
        let _ = env_logger::builder().is_test(true).try_init();
        Logger::new(true).log(Level::Info, "Searching for co-worker : [writer]");
        Logger::default().log(Level::Error, "not found");
    }

    #[test]
    fn test_recording_sink() {
        let sink = RecordingSink::default();
        sink.log(Level::Info, "one");
        sink.log(Level::Error, "two");
        assert_eq!(sink.messages_at(Level::Error), vec!["two".to_string()]);
        assert_eq!(sink.records().len(), 2);
    }
}
