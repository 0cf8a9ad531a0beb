//! # duallog-core
//! Core of duallog - shared by the debug and the no-op build variants.

mod builder;
mod config;
mod error;
pub mod format;
mod logger;
mod primary;
mod scratch;
mod severity;
mod sink_writer;

pub use builder::{ConfigBuilder, logger_config};
pub use config::{DUALLOG_CONFIG, DualLogConfig};
pub use error::InitError;
pub use logger::Logger;
pub use primary::{PrimarySink, StderrSink};
pub use scratch::ScratchState;
pub use severity::Severity;
pub use sink_writer::{Route, SecondarySink, SinkWriter};
