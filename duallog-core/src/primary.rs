use std::{
    error::Error,
    io::{self, Write},
};

use colored::Colorize;

use crate::{config::DUALLOG_CONFIG, format::write_cause, severity::Severity};

/// The host's leveled text logging facility.
///
/// Treated as infallible and non-blocking: implementations swallow their own errors.
pub trait PrimarySink: Send + Sync {
    fn write(&self, severity: Severity, process_tag: &str, message: &str);

    /// Writes a message along with its cause.
    ///
    /// The default rendering appends the cause chain on the lines following the message.
    fn write_with_cause(
        &self,
        severity: Severity,
        process_tag: &str,
        message: &str,
        cause: &(dyn Error + 'static),
    ) {
        let mut full = String::with_capacity(message.len() + 64);
        full.push_str(message);
        full.push('\n');
        write_cause(&mut full, cause);
        self.write(severity, process_tag, &full);
    }
}

/// Primary sink printing `S/process_tag: message` lines to stderr.
#[derive(Debug, Clone)]
pub struct StderrSink {
    color: bool,
}

impl Default for StderrSink {
    fn default() -> Self {
        Self {
            color: DUALLOG_CONFIG.COLOR,
        }
    }
}

impl StderrSink {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl PrimarySink for StderrSink {
    fn write(&self, severity: Severity, process_tag: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        if self.color {
            let level = match severity {
                Severity::Verbose => "V".purple(),
                Severity::Debug => "D".blue(),
                Severity::Info => "I".green(),
                Severity::Warn => "W".yellow(),
                Severity::Error => "E".red(),
            };
            writeln!(stderr, "{level}/{process_tag}: {message}").ok();
        } else {
            writeln!(stderr, "{severity}/{process_tag}: {message}").ok();
        }
    }
}
