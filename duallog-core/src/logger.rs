use std::error::Error;

use crate::severity::Severity;

/// Logging capability shared by every build variant.
///
/// Like the platform logging APIs it stands in for, there are no format-string
/// overloads: callers build the message with `format!` only when it is logged.
pub trait Logger {
    fn log(&self, severity: Severity, msg: &str);

    fn error_with_cause(&self, msg: &str, cause: &(dyn Error + 'static));

    fn verbose(&self, msg: &str) {
        self.log(Severity::Verbose, msg)
    }

    fn debug(&self, msg: &str) {
        self.log(Severity::Debug, msg)
    }

    fn info(&self, msg: &str) {
        self.log(Severity::Info, msg)
    }

    fn warn(&self, msg: &str) {
        self.log(Severity::Warn, msg)
    }

    fn error(&self, msg: &str) {
        self.log(Severity::Error, msg)
    }
}
