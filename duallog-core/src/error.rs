use thiserror::Error;

/// Errors reported by `init`. All of them are programmer errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InitError {
    #[error("logger is already initialized, init should be invoked once per process")]
    AlreadyInitialized,
    #[error("logging to a secondary sink is not supported by this build")]
    SecondarySinkUnsupported,
    #[error("process tag must not be empty")]
    EmptyProcessTag,
}
