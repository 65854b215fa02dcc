// src/utils/logger.rs

use log::{Level, Metadata, Record, SetLoggerError};

static LOGGER: ConsoleLogger = ConsoleLogger;

struct ConsoleLogger;

pub fn init() -> Result<(), SetLoggerError> {
  log::set_logger(&LOGGER).map(|()| log::set_max_level(log::LevelFilter::Debug))
}

impl log::Log for ConsoleLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= Level::Debug
  }

  fn log(&self, record: &Record) {
    if self.enabled(record.metadata()) {
      // ANSI color per level, reset after the tag
      let (color, tag) = match record.level() {
        Level::Error => ("\x1b[31m", "ERROR"), // Red
        Level::Warn => ("\x1b[33m", "WARN "),  // Orange-ish
        Level::Info => ("\x1b[36m", "INFO "),  // Cyan
        Level::Debug => ("\x1b[90m", "DEBUG"), // Gray
        Level::Trace => ("\x1b[90m", "TRACE"),
      };

      // Format: "INFO   Config loaded from ..."
      eprintln!("{}{}\x1b[0m  {}", color, tag, record.args());
    }
  }

  fn flush(&self) {}
}
