//! Logger module
//!
//! Provides logging utilities for the responder including:
//! - Startup and setup failure logging
//! - Leveled warning/debug messages
//! - The per-run exchange record
//! - File-based logging support

mod format;
pub mod writer;

pub use format::ExchangeRecord;

use crate::config::{Config, LogLevel};
use crate::error::SetupError;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.level,
        config.logging.info_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

fn enabled(level: LogLevel) -> bool {
    let current = writer::get().map_or(LogLevel::Info, writer::LogWriter::level);
    level <= current
}

/// Write to info log
fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

pub fn log_listening(port: u16) {
    if enabled(LogLevel::Info) {
        write_info(&format!("Listening on port {port}..."));
    }
}

/// Setup failures are always reported, whatever the level
pub fn log_setup_failure(err: &SetupError) {
    write_error(&err.to_string());
}

pub fn log_accept_failed(err: &std::io::Error) {
    write_error(&format!("accept() failed: {}", crate::error::describe(err)));
}

pub fn log_warning(message: &str) {
    if enabled(LogLevel::Warn) {
        write_error(&format!("[WARN] {message}"));
    }
}

pub fn log_debug(message: &str) {
    if enabled(LogLevel::Debug) {
        write_info(&format!("[DEBUG] {message}"));
    }
}

/// Log the summary line of the exchange
pub fn log_exchange(record: &ExchangeRecord) {
    if enabled(LogLevel::Info) {
        write_info(&record.format());
    }
}
