//! Console Logger
//!
//! `log` backend that forwards records to the browser devtools console.
//! Each level goes to the matching `console.*` method so devtools filtering works.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Logger writing to `console.error` / `warn` / `info` / `debug` / `log`
pub struct ConsoleLogger;

/// Install the console logger as the global `log` backend
///
/// Fails if another logger was already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// Format a record the way it appears in the console, e.g. `[INFO todo_client::app] ready`
pub fn format_line(level: Level, target: &str, message: &str) -> String {
    format!("[{} {}] {}", level, target, message)
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), record.target(), &record.args().to_string());
        let value = JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&value),
            Level::Warn => web_sys::console::warn_1(&value),
            Level::Info => web_sys::console::info_1(&value),
            Level::Debug => web_sys::console::debug_1(&value),
            Level::Trace => web_sys::console::log_1(&value),
        }
    }

    fn flush(&self) {}
}
