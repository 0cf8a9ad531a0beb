//! # duallog-noop
//! Drop-in replacement for `duallog` in release builds: same functions, no
//! formatting and no I/O.
//!
//! ## Usage
//! ```toml
//! // Cargo.toml
//! ...
//! [dependencies]
//! duallog = { version = "0.1.0", package = "duallog-noop" }
//! ```
//!
//! Mirroring to a file is forbidden in release builds. Note that
//! `ConfigBuilder::with_log_file` opens the file when called, before `init`
//! gets to reject the configuration; prefer `maybe_with_log_file(None)` in
//! release code paths.
//!
//! ```rust
//! use duallog_noop::{InitError, Logger, get_logger, logger_config};
//!
//! let config = logger_config("MyApp").with_secondary_sink(Vec::<u8>::new());
//! assert_eq!(duallog_noop::init(config), Err(InitError::SecondarySinkUnsupported));
//!
//! duallog_noop::init(logger_config("MyApp")).unwrap();
//! get_logger("Main").info("never printed");
//! ```

use std::{
    error::Error,
    sync::{
        Arc, LazyLock,
        atomic::{AtomicBool, Ordering},
    },
};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

pub use duallog_core::{
    ConfigBuilder, InitError, Logger, PrimarySink, Severity, StderrSink, logger_config,
};

static INITIALIZED: AtomicBool = AtomicBool::new(false);

static LOGGER: LazyLock<Arc<NoopLogger>> = LazyLock::new(|| Arc::new(NoopLogger));

/// Handle returned by the registry.
pub type LoggerHandle = Arc<NoopLogger>;

/// Name of the logger type in the debug variant.
pub type DualSinkLogger = NoopLogger;

/// Logger discarding everything.
#[derive(Debug, PartialEq, Eq)]
pub struct NoopLogger;

impl NoopLogger {
    /// Always empty, the tag is not kept.
    pub fn tag_prefix(&self) -> &str {
        ""
    }
}

impl Logger for NoopLogger {
    #[inline(always)]
    fn log(&self, _: Severity, _: &str) {}

    #[inline(always)]
    fn error_with_cause(&self, _: &str, _: &(dyn Error + 'static)) {}

    #[inline(always)]
    fn verbose(&self, _: &str) {}

    #[inline(always)]
    fn debug(&self, _: &str) {}

    #[inline(always)]
    fn info(&self, _: &str) {}

    #[inline(always)]
    fn warn(&self, _: &str) {}

    #[inline(always)]
    fn error(&self, _: &str) {}
}

/// Validates the configuration and marks the process as initialized.
///
/// # Errors
/// `InitError::AlreadyInitialized` on any call after the first successful one,
/// `InitError::SecondarySinkUnsupported` if a secondary sink is configured and
/// `InitError::EmptyProcessTag` for an empty process tag.
pub fn init(config: ConfigBuilder) -> Result<(), InitError> {
    if is_initialized() {
        return Err(InitError::AlreadyInitialized);
    }
    if config.has_secondary_sink() {
        return Err(InitError::SecondarySinkUnsupported);
    }
    if config.process_tag().is_empty() {
        return Err(InitError::EmptyProcessTag);
    }
    if INITIALIZED.swap(true, Ordering::AcqRel) {
        return Err(InitError::AlreadyInitialized);
    }
    Ok(())
}

pub fn is_initialized() -> bool {
    INITIALIZED.load(Ordering::Acquire)
}

#[inline(always)]
pub fn get_logger(_: &str) -> LoggerHandle {
    Arc::clone(&LOGGER)
}

#[inline(always)]
pub fn get_logger_for<T: ?Sized>() -> LoggerHandle {
    Arc::clone(&LOGGER)
}

/// `log` logger discarding every record.
struct NoopLog;

impl Log for NoopLog {
    fn enabled(&self, _: &Metadata) -> bool {
        false
    }

    fn log(&self, _: &Record) {}

    fn flush(&self) {}
}

/// Installs a `log` crate logger that discards everything.
///
/// `max_level` is ignored, the maximum level is set to `Off` so `log` macros
/// skip formatting altogether.
pub fn init_log_bridge(_max_level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(NoopLog))?;
    log::set_max_level(LevelFilter::Off);
    Ok(())
}
