use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;

pub const LOG_ENV: &str = "SMBIOS_DUMP_LOG";

/// Writes `<LEVEL>: <message>` lines to stderr.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(std::io::stderr(), "{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Installs the stderr logger. A level named by `SMBIOS_DUMP_LOG` wins over
/// `level`.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|v| env_level(&v))
        .unwrap_or(level);

    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

fn env_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse().ok()
}
