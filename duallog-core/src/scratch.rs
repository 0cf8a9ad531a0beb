use std::cell::Cell;

use crate::format::Timestamp;

thread_local! {
    /// Scratch state of the current thread, taken out while in use.
    static SCRATCH: Cell<Option<ScratchState>> = const { Cell::new(None) };
    static THREAD_ID: u64 = current_thread_id();
}

/// Per-thread reusable state, so that a log call does not allocate once warmed up.
#[derive(Debug)]
pub struct ScratchState {
    /// Timestamp accumulator, only its digits change between records.
    pub timestamp: Timestamp,
    /// Identifier of the owning thread, computed once.
    pub thread_id: u64,
    /// Primary message buffer.
    pub message: String,
    /// Secondary sink line buffer, everything after the timestamp.
    pub line: String,
}

impl ScratchState {
    fn new() -> Self {
        Self {
            timestamp: Timestamp::default(),
            thread_id: THREAD_ID.try_with(|id| *id).unwrap_or_else(|_| current_thread_id()),
            message: String::with_capacity(128),
            line: String::with_capacity(256),
        }
    }

    /// Runs `f` with the calling thread's scratch state, creating it on first use.
    ///
    /// A nested call on the same thread (a primary sink that logs itself) or a call
    /// during thread teardown gets a temporary state instead.
    pub fn with_current<R>(f: impl FnOnce(&mut ScratchState) -> R) -> R {
        let mut state = SCRATCH
            .try_with(Cell::take)
            .ok()
            .flatten()
            .unwrap_or_else(ScratchState::new);
        let result = f(&mut state);
        let _ = SCRATCH.try_with(|cell| cell.set(Some(state)));
        result
    }
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn current_thread_id() -> u64 {
    // SAFETY: gettid has no preconditions and cannot fail.
    let tid = unsafe { libc::gettid() };
    tid as u64
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
fn current_thread_id() -> u64 {
    use std::sync::atomic::{AtomicU64, Ordering};

    static NEXT_THREAD_ID: AtomicU64 = AtomicU64::new(1);
    NEXT_THREAD_ID.fetch_add(1, Ordering::Relaxed)
}
