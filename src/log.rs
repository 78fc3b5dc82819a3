// src/log.rs
//
// Append-only debug log under `.store/`. Logging never fails the caller:
// if the directory or file can't be opened the line is dropped.
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use crate::config::consts::{LOG_FILE, STORE_DIR};

static LOG_LOCK: Mutex<()> = Mutex::new(());
static START: OnceLock<Instant> = OnceLock::new();
static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn log_path() -> &'static PathBuf {
    LOG_PATH.get_or_init(|| {
        let dir = PathBuf::from(STORE_DIR);
        let _ = fs::create_dir_all(&dir);
        dir.join(LOG_FILE)
    })
}

// hh:mm:ss.mmm since the first log line
fn fmt_elapsed(ms: u128) -> String {
    let ms = ms as u64;
    format!("{:02}:{:02}:{:02}.{:03}", ms / 3_600_000, ms / 60_000 % 60, ms / 1_000 % 60, ms % 1_000)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
    Debug,
}

impl Level {
    pub fn tag(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Debug => "DEBUG",
        }
    }
}

fn format_line(elapsed_ms: u128, level: Level, msg: &str) -> String {
    format!("[{}][{}] {msg}\n", fmt_elapsed(elapsed_ms), level.tag())
}

pub fn write_log(level: Level, msg: &str) {
    let line = format_line(start().elapsed().as_millis(), level, msg);
    let Ok(_guard) = LOG_LOCK.lock() else { return };
    let file = OpenOptions::new().create(true).append(true).open(log_path());
    if let Ok(mut file) = file {
        let _ = file.write_all(line.as_bytes());
    }
}

#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => { $crate::log::write_log($crate::log::Level::Info, &format!($($arg)*)) };
}

#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => { $crate::log::write_log($crate::log::Level::Warn, &format!($($arg)*)) };
}

#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => { $crate::log::write_log($crate::log::Level::Error, &format!($($arg)*)) };
}

#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => { $crate::log::write_log($crate::log::Level::Debug, &format!($($arg)*)) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_zero_padded() {
        assert_eq!(fmt_elapsed(0), "00:00:00.000");
        assert_eq!(fmt_elapsed(3_723_004), "01:02:03.004");
    }

    #[test]
    fn line_has_stamp_and_level() {
        assert_eq!(format_line(61_250, Level::Warn, "a1-001 unresolved"), "[00:01:01.250][WARN] a1-001 unresolved\n");
    }
}
