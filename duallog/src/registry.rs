use std::{
    collections::HashMap,
    sync::{Arc, LazyLock, PoisonError, RwLock},
};

use duallog_core::format::{braced_tag, type_tag};

use crate::logger::DualSinkLogger;

/// Loggers by braced tag. Entries are never removed.
static LOGGERS: LazyLock<RwLock<HashMap<String, Arc<DualSinkLogger>>>> =
    LazyLock::new(|| RwLock::new(HashMap::with_capacity(128)));

/// Returns the logger for `tag`, creating it on first use.
///
/// Every call with the same tag returns the same instance, whichever thread asks first.
pub fn get_logger(tag: &str) -> Arc<DualSinkLogger> {
    let tag_prefix = braced_tag(tag);
    if let Some(logger) = LOGGERS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&tag_prefix)
    {
        return Arc::clone(logger);
    }
    let mut loggers = LOGGERS.write().unwrap_or_else(PoisonError::into_inner);
    let logger = loggers
        .entry(tag_prefix)
        .or_insert_with_key(|tag_prefix| Arc::new(DualSinkLogger::new(tag_prefix.clone())));
    Arc::clone(logger)
}

/// Returns the logger tagged with the simple name of `T`.
pub fn get_logger_for<T: ?Sized>() -> Arc<DualSinkLogger> {
    get_logger(type_tag::<T>())
}
