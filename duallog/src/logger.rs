use std::error::Error;

use duallog_core::{Logger, Severity};

use crate::sink_writer;

/// Logger bound to one tag. Obtained through `get_logger`.
#[derive(Debug, PartialEq, Eq)]
pub struct DualSinkLogger {
    tag_prefix: String,
}

impl DualSinkLogger {
    pub(crate) fn new(tag_prefix: String) -> Self {
        Self { tag_prefix }
    }

    /// The `"[tag] "` prefix put in front of every message.
    pub fn tag_prefix(&self) -> &str {
        &self.tag_prefix
    }
}

impl Logger for DualSinkLogger {
    fn log(&self, severity: Severity, msg: &str) {
        sink_writer().emit(severity, &self.tag_prefix, msg, None);
    }

    fn error_with_cause(&self, msg: &str, cause: &(dyn Error + 'static)) {
        sink_writer().emit(Severity::Error, &self.tag_prefix, msg, Some(cause));
    }
}
