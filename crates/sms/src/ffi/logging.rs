//! FFI logging backend that routes logs to the host via callback
//!
//! Provides a `log` backend that forwards log records to a UniFFI callback,
//! so gateway logs land in the host's unified logging facility.

use std::sync::{Arc, OnceLock, RwLock};

use log::{Level, Log, Metadata, Record, SetLoggerError};

use super::types::{FfiLogLevel, LogCallback};

/// Global storage for the FFI logger
static FFI_LOGGER: OnceLock<FfiLogger> = OnceLock::new();

/// Logger that forwards to a host callback when one is set
struct FfiLogger {
    callback: RwLock<Option<Arc<dyn LogCallback>>>,
    max_level: RwLock<Level>,
}

impl FfiLogger {
    fn new(max_level: Level) -> Self {
        Self {
            callback: RwLock::new(None),
            max_level: RwLock::new(max_level),
        }
    }

    fn get_max_level(&self) -> Level {
        self.max_level.read().map(|l| *l).unwrap_or(Level::Info)
    }
}

impl Log for FfiLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.get_max_level()
            && self
                .callback
                .read()
                .ok()
                .is_some_and(|cb| cb.is_some())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        if let Ok(guard) = self.callback.read() {
            if let Some(ref callback) = *guard {
                callback.on_log(
                    FfiLogLevel::from(record.level()),
                    record.target().to_string(),
                    format!("{}", record.args()),
                );
            }
        }
    }

    fn flush(&self) {}
}

/// Install the FFI logger as the global `log` backend
///
/// Call once at startup; without a callback set, records are dropped.
/// Fails when another logger is already installed.
pub fn init_ffi_logger(max_level: Level) -> Result<(), SetLoggerError> {
    let logger = FFI_LOGGER.get_or_init(|| FfiLogger::new(max_level));
    log::set_logger(logger)?;
    log::set_max_level(max_level.to_level_filter());
    Ok(())
}

/// Set the callback that receives log records
///
/// Thread-safe; pass `None` to drop records again.
pub fn set_log_callback(callback: Option<Arc<dyn LogCallback>>) {
    if let Some(logger) = FFI_LOGGER.get() {
        if let Ok(mut guard) = logger.callback.write() {
            *guard = callback;
        }
    }
}

/// Update the maximum forwarded log level
pub fn set_log_level(level: Level) {
    if let Some(logger) = FFI_LOGGER.get() {
        if let Ok(mut guard) = logger.max_level.write() {
            *guard = level;
        }
        log::set_max_level(level.to_level_filter());
    }
}
