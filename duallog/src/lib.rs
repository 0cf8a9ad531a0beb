//! # duallog
//! Process-wide logger writing every message to the platform log and, optionally,
//! mirroring it to a file in exactly the same order.
//!
//! ## Usage
//! ```toml
//! // Cargo.toml
//! ...
//! [dependencies]
//! duallog = "0.1.0"
//! ```
//!
//! ```rust
//! use duallog::{Logger, get_logger, logger_config};
//!
//! duallog::init(logger_config("MyApp")).expect("logger initialized twice");
//! let log = get_logger("Main");
//! log.info("Hello, world!");
//! ```
//!
//! ## Mirroring to a file
//! Records are written to the primary sink and to the file under a single lock,
//! so both show the same order across all threads and tags.
//!
//! ```rust,no_run
//! use duallog::{Logger, get_logger_for, logger_config};
//!
//! struct Downloader;
//!
//! duallog::init(
//!     logger_config("MyApp")
//!         .with_log_file("/tmp/duallog_doc.log")
//!         .expect("Unable to create log file"),
//! )
//! .unwrap();
//!
//! let log = get_logger_for::<Downloader>();
//! log.debug("started");
//! assert!(std::fs::read_to_string("/tmp/duallog_doc.log")
//!     .unwrap()
//!     .ends_with("[Downloader] started\n"));
//! ```
//!
//! ## Release builds
//! `duallog-noop` exposes the same functions and does nothing. Pick the variant in
//! `Cargo.toml`, e.g. `duallog = { package = "duallog-noop", ... }` for release.

mod bridge;
mod logger;
mod registry;

use std::sync::{LazyLock, OnceLock};

pub use bridge::init_log_bridge;
pub use duallog_core::{
    ConfigBuilder, InitError, Logger, PrimarySink, Severity, StderrSink, logger_config,
};
pub use logger::DualSinkLogger;
pub use registry::{get_logger, get_logger_for};

use duallog_core::SinkWriter;

/// Handle returned by the registry.
pub type LoggerHandle = std::sync::Arc<DualSinkLogger>;

/// Configuration installed by `init`. Never replaced.
static SINK_WRITER: OnceLock<SinkWriter> = OnceLock::new();

/// Used by records emitted before `init`: primary sink only, empty process tag.
static FALLBACK: LazyLock<SinkWriter> = LazyLock::new(SinkWriter::fallback);

/// Initializes the logger for the whole process.
///
/// Should be invoked before the first record is logged; earlier records only
/// reach stderr, with an empty process tag.
///
/// # Errors
/// `InitError::AlreadyInitialized` on any call after the first successful one,
/// whatever the new configuration; the first configuration stays in effect.
/// `InitError::EmptyProcessTag` if the process tag is empty.
pub fn init(config: ConfigBuilder) -> Result<(), InitError> {
    if is_initialized() {
        return Err(InitError::AlreadyInitialized);
    }
    let writer = config.build()?;
    SINK_WRITER
        .set(writer)
        .map_err(|_| InitError::AlreadyInitialized)
}

/// Whether `init` has completed.
pub fn is_initialized() -> bool {
    SINK_WRITER.get().is_some()
}

pub(crate) fn sink_writer() -> &'static SinkWriter {
    SINK_WRITER.get().unwrap_or_else(|| &*FALLBACK)
}
