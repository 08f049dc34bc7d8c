use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};

pub const RED: &str = "\x1B[1;31m";
pub const GRN: &str = "\x1B[1;32m";
pub const YEL: &str = "\x1B[1;33m";
pub const GRY: &str = "\x1B[1;30m";
pub const RESET: &str = "\x1B[0m";

static DEBUG: AtomicBool = AtomicBool::new(false);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Level {
    Error,
    Warn,
    Info,
    Debug,
}

impl Level {
    fn color(self) -> &'static str {
        match self {
            Level::Error => RED,
            Level::Warn  => YEL,
            Level::Info  => GRN,
            Level::Debug => GRY,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warn  => "warning",
            Level::Info  => "info",
            Level::Debug => "DEBUG",
        }
    }
}

/// turn `debug` lines on or off for the whole process
#[allow(dead_code)]
pub fn set_debug(enabled: bool) {
    DEBUG.store(enabled, Ordering::Relaxed);
}

#[allow(dead_code)]
pub fn debug_enabled() -> bool {
    DEBUG.load(Ordering::Relaxed)
}

/// write one colored, prefixed line to stderr
pub fn emit<S: Display>(level: Level, msg: S) {
    if level == Level::Debug && !debug_enabled() {
        return;
    }

    eprintln!("[eva] {}{}:{} {}", level.color(), level.label(), RESET, msg);
}

#[allow(dead_code)]
pub fn error<S: Display>(msg: S) {
    emit(Level::Error, msg);
}

#[allow(dead_code)]
pub fn warn<S: Display>(msg: S) {
    emit(Level::Warn, msg);
}

#[allow(dead_code)]
pub fn info<S: Display>(msg: S) {
    emit(Level::Info, msg);
}

#[allow(dead_code)]
pub fn debug<S: Display>(msg: S) {
    emit(Level::Debug, msg);
}
