use std::{
    fmt,
    fs::File,
    io::Write,
    path::Path,
    sync::Arc,
};

use crate::{
    config::DUALLOG_CONFIG,
    error::InitError,
    primary::{PrimarySink, StderrSink},
    sink_writer::{Route, SecondarySink, SinkWriter},
};

/// Builder for the process-wide logging configuration.
pub struct ConfigBuilder {
    process_tag: String,
    primary: Option<Arc<dyn PrimarySink>>,
    secondary: Option<Box<dyn Write + Send>>,
}

impl ConfigBuilder {
    pub fn process_tag(&self) -> &str {
        &self.process_tag
    }

    pub fn has_secondary_sink(&self) -> bool {
        self.secondary.is_some()
    }

    /// Mirrors every record to `sink`.
    pub fn with_secondary_sink<W: Write + Send + 'static>(self, sink: W) -> Self {
        Self {
            secondary: Some(Box::new(sink)),
            ..self
        }
    }

    /// Mirrors every record to a log file.
    /// The file is created if it does not exist and appended to if it does.
    /// It is opened right away, even if `init` later rejects the configuration.
    pub fn with_log_file<P: AsRef<Path>>(self, path: P) -> Result<Self, std::io::Error> {
        let file = File::options().create(true).append(true).open(path)?;
        Ok(self.with_secondary_sink(file))
    }

    /// Maybe mirrors every record to a log file.
    pub fn maybe_with_log_file<P: AsRef<Path>>(
        self,
        path: Option<P>,
    ) -> Result<Self, std::io::Error> {
        match path {
            Some(path) => self.with_log_file(path),
            None => Ok(self),
        }
    }

    /// Replaces the default stderr primary sink.
    pub fn with_primary_sink<S: PrimarySink + 'static>(self, sink: S) -> Self {
        Self {
            primary: Some(Arc::new(sink)),
            ..self
        }
    }

    pub fn build(self) -> Result<SinkWriter, InitError> {
        let Self {
            process_tag,
            primary,
            secondary,
        } = self;
        if process_tag.is_empty() {
            return Err(InitError::EmptyProcessTag);
        }
        let primary = primary.unwrap_or_else(|| Arc::new(StderrSink::default()));
        let route = match secondary {
            Some(sink) => Route::DualSink(SecondarySink::new(sink, DUALLOG_CONFIG.WRITE_BUFFER_SIZE)),
            None => Route::PrimaryOnly,
        };
        Ok(SinkWriter::new(process_tag, primary, route))
    }
}

impl fmt::Debug for ConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigBuilder")
            .field("process_tag", &self.process_tag)
            .field("custom_primary_sink", &self.primary.is_some())
            .field("secondary_sink", &self.secondary.is_some())
            .finish()
    }
}

/// Returns a ConfigBuilder for the process identified by `process_tag`.
pub fn logger_config(process_tag: &str) -> ConfigBuilder {
    ConfigBuilder {
        process_tag: process_tag.into(),
        primary: None,
        secondary: None,
    }
}
