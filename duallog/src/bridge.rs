use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use duallog_core::Logger;

use crate::registry::get_logger;

/// Routes `log` records to the logger tagged with the record target.
struct LogBridge;

impl Log for LogBridge {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let logger = get_logger(record.target());
        let severity = record.level().into();
        match record.args().as_str() {
            Some(message) => Logger::log(&*logger, severity, message),
            None => Logger::log(&*logger, severity, &record.args().to_string()),
        }
    }

    fn flush(&self) {}
}

/// Installs duallog as the `log` crate logger.
///
/// `log::trace!` maps to verbose, other levels map to the severity of the same name.
pub fn init_log_bridge(max_level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(LogBridge))?;
    log::set_max_level(max_level);
    Ok(())
}
