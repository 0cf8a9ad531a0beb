#![allow(dead_code)]

use std::{
    io::{self, Write},
    sync::{Arc, Mutex},
};

use duallog::{PrimarySink, Severity};

/// Primary sink keeping every record in memory.
#[derive(Clone, Default)]
pub struct CaptureSink(Arc<Mutex<Vec<(Severity, String, String)>>>);

impl PrimarySink for CaptureSink {
    fn write(&self, severity: Severity, process_tag: &str, message: &str) {
        self.0
            .lock()
            .unwrap()
            .push((severity, process_tag.into(), message.into()));
    }
}

impl CaptureSink {
    pub fn records(&self) -> Vec<(Severity, String, String)> {
        self.0.lock().unwrap().clone()
    }

    /// Messages starting with `tag_prefix`, prefix removed.
    pub fn messages_with_prefix(&self, tag_prefix: &str) -> Vec<String> {
        self.records()
            .into_iter()
            .filter_map(|(_, _, m)| m.strip_prefix(tag_prefix).map(String::from))
            .collect()
    }
}

/// Secondary sink writing to a shared in-memory buffer.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    /// Text following `tag_prefix` on every line containing it.
    pub fn messages_with_prefix(&self, tag_prefix: &str) -> Vec<String> {
        self.contents()
            .lines()
            .filter_map(|line| line.split_once(tag_prefix).map(|(_, m)| m.to_string()))
            .collect()
    }
}
