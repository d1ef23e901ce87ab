use std::{
    io::{self, Write as _},
    sync::{OnceLock, PoisonError, RwLock},
};

use log::{Log, Metadata, Record};

static LOGGER: OnceLock<BookLogger> = OnceLock::new();

pub fn get_logger() -> &'static BookLogger {
    // default configuration
    let level = log::Level::Info;

    LOGGER.get_or_init(|| BookLogger::new(level))
}

/// Installs the stderr logger. Calling it again is a no-op.
pub fn init() {
    if log::set_logger(get_logger()).is_ok() {
        log::set_max_level(log::LevelFilter::Trace);
    }
}

/// Writes `LEVEL source -> message` lines to stderr.
pub struct BookLogger {
    min_level: RwLock<log::Level>,
}

impl BookLogger {
    fn new(min_level: log::Level) -> Self {
        Self {
            min_level: RwLock::new(min_level),
        }
    }

    pub fn min_level(&self) -> log::Level {
        *self.min_level.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_min_level(&self, level: log::Level) {
        *self.min_level.write().unwrap_or_else(PoisonError::into_inner) = level;
    }

    fn format(record: &Record) -> String {
        format!(
            "{:<5} {} -> {}",
            record.level(),
            record.module_path().unwrap_or("unknown"),
            record.args()
        )
    }
}

impl Log for BookLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // nowhere left to report a failed write to stderr
            let _ = writeln!(io::stderr().lock(), "{}", Self::format(record));
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}
