//! Console logging. Outside the browser every call is a no-op, which lets
//! views render natively (server-side rendering in tests).

use crate::config;

#[derive(Clone, Copy)]
enum Level {
    Debug,
    Info,
    Warn,
}

/// Only emitted when `debug_logs` is set in the app config.
pub fn debug(message: &str) {
    if config::get().debug_logs {
        emit(Level::Debug, message);
    }
}

pub fn info(message: &str) {
    emit(Level::Info, message);
}

pub fn warn(message: &str) {
    emit(Level::Warn, message);
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, message: &str) {
    let line = format!("[worblehat] {message}");
    match level {
        Level::Debug => gloo::console::debug!(line),
        Level::Info => gloo::console::info!(line),
        Level::Warn => gloo::console::warn!(line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, _message: &str) {}
