use std::{error::Error, fmt::Write};

use chrono::{Datelike, Timelike};

use crate::severity::Severity;

/// Length of `MM-DD HH:MM:SS:mmm ` including the trailing space.
pub const TIMESTAMP_LEN: usize = 19;

/// Minimum width reserved for the process tag, as logcat does.
pub const MIN_PROCESS_TAG_WIDTH: usize = 8;

/// Upper-bound estimate of `pid tid S ` plus the `: ` delimiter.
const THREAD_INFO_LEN: usize = 28;

/// Fixed-width timestamp rewritten in place on every record.
///
/// Delimiters are written once at construction, later updates only touch digits.
#[derive(Debug, Clone)]
pub struct Timestamp {
    buf: [u8; TIMESTAMP_LEN],
}

impl Default for Timestamp {
    fn default() -> Self {
        let mut buf = [b'0'; TIMESTAMP_LEN];
        buf[2] = b'-';
        buf[5] = b' ';
        buf[8] = b':';
        buf[11] = b':';
        buf[14] = b':';
        buf[18] = b' ';
        Self { buf }
    }
}

impl Timestamp {
    pub fn set<T: Datelike + Timelike>(&mut self, time: &T) {
        write_last_digits(time.month0() + 1, &mut self.buf[0..2]);
        write_last_digits(time.day(), &mut self.buf[3..5]);
        write_last_digits(time.hour(), &mut self.buf[6..8]);
        write_last_digits(time.minute(), &mut self.buf[9..11]);
        write_last_digits(time.second(), &mut self.buf[12..14]);
        // leap seconds are reported as nanosecond >= 1_000_000_000
        write_last_digits(time.nanosecond() / 1_000_000 % 1_000, &mut self.buf[15..18]);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn as_str(&self) -> &str {
        // only ASCII digits and delimiters are ever written
        std::str::from_utf8(&self.buf).unwrap_or_default()
    }
}

/// Writes the last `dst.len()` decimal digits of `number`, zero-padded.
fn write_last_digits(mut number: u32, dst: &mut [u8]) {
    for digit in dst.iter_mut().rev() {
        *digit = b'0' + (number % 10) as u8;
        number /= 10;
    }
}

/// Returns the braced prefix `"[tag] "` put in front of every message of a logger.
pub fn braced_tag(tag: &str) -> String {
    let mut prefix = String::with_capacity(tag.len() + 3);
    prefix.push('[');
    prefix.push_str(tag);
    prefix.push_str("] ");
    prefix
}

/// Simple name of a type: last path segment without generic arguments.
pub fn type_tag<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Appends `tag_prefix + text`, the message handed to the primary sink.
pub fn write_primary_message(out: &mut String, tag_prefix: &str, text: &str) {
    out.reserve(tag_prefix.len() + text.len());
    out.push_str(tag_prefix);
    out.push_str(text);
}

/// Appends `pid tid S process_tag<padding>: `.
pub fn write_thread_info(
    out: &mut String,
    pid: u32,
    tid: u64,
    severity: Severity,
    process_tag: &str,
) {
    out.reserve(THREAD_INFO_LEN + process_tag.len().max(MIN_PROCESS_TAG_WIDTH));
    let _ = write!(out, "{pid} {tid} {} {process_tag}", severity.as_char());
    for _ in process_tag.chars().count()..MIN_PROCESS_TAG_WIDTH {
        out.push(' ');
    }
    out.push_str(": ");
}

/// Appends the rendered cause: its message, then one `Caused by:` line per source.
pub fn write_cause(out: &mut String, cause: &(dyn Error + 'static)) {
    let _ = write!(out, "{cause}");
    let mut source = cause.source();
    while let Some(err) = source {
        let _ = write!(out, "\nCaused by: {err}");
        source = err.source();
    }
}

/// Appends everything of a secondary sink record that follows the timestamp.
///
/// `message` is the primary message, i.e. it already starts with the tag prefix.
/// The rendered cause, if any, goes on its own line(s) after the message line.
pub fn write_record_tail(
    out: &mut String,
    pid: u32,
    tid: u64,
    severity: Severity,
    process_tag: &str,
    message: &str,
    cause: Option<&(dyn Error + 'static)>,
) {
    write_thread_info(out, pid, tid, severity, process_tag);
    out.push_str(message);
    out.push('\n');
    if let Some(cause) = cause {
        write_cause(out, cause);
        out.push('\n');
    }
}

/// Formats a complete secondary sink line for a given clock value.
pub fn format_secondary_line<T: Datelike + Timelike>(
    time: &T,
    pid: u32,
    tid: u64,
    severity: Severity,
    process_tag: &str,
    tag_prefix: &str,
    text: &str,
) -> String {
    let mut timestamp = Timestamp::default();
    timestamp.set(time);
    let mut message = String::new();
    write_primary_message(&mut message, tag_prefix, text);
    let mut line = String::with_capacity(TIMESTAMP_LEN + THREAD_INFO_LEN + message.len() + 16);
    line.push_str(timestamp.as_str());
    write_record_tail(&mut line, pid, tid, severity, process_tag, &message, None);
    line
}
