use std::{
    cell::Cell,
    error::Error,
    fmt,
    io::{BufWriter, Write},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use chrono::Local;

use crate::{
    format::{write_primary_message, write_record_tail},
    primary::{PrimarySink, StderrSink},
    scratch::ScratchState,
    severity::Severity,
};

type SecondaryWriter = BufWriter<Box<dyn Write + Send>>;

thread_local! {
    /// Set while the current thread holds the secondary sink lock.
    static EMITTING: Cell<bool> = const { Cell::new(false) };
}

/// Marks the current thread as emitting to both sinks until dropped.
struct EmitGuard;

impl EmitGuard {
    /// Returns `None` if the thread is already emitting, i.e. a primary sink
    /// is logging through duallog from inside the lock.
    fn enter() -> Option<Self> {
        let entered = EMITTING
            .try_with(|emitting| !emitting.replace(true))
            .unwrap_or(false);
        entered.then_some(EmitGuard)
    }
}

impl Drop for EmitGuard {
    fn drop(&mut self) {
        let _ = EMITTING.try_with(|emitting| emitting.set(false));
    }
}

/// Secondary sink guarded by the single lock that keeps both sinks in the same order.
///
/// Once a write fails the writer is dropped and every later record skips it.
pub struct SecondarySink {
    writer: Mutex<Option<SecondaryWriter>>,
}

impl SecondarySink {
    pub fn new(sink: Box<dyn Write + Send>, buffer_size: usize) -> Self {
        Self {
            writer: Mutex::new(Some(BufWriter::with_capacity(buffer_size, sink))),
        }
    }

    /// A panic in a primary sink must not disable logging, so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, Option<SecondaryWriter>> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether records are still mirrored, i.e. no write has failed so far.
    pub fn is_active(&self) -> bool {
        self.lock().is_some()
    }
}

impl fmt::Debug for SecondarySink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecondarySink")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Emission mode, chosen once when the configuration is built.
#[derive(Debug)]
pub enum Route {
    PrimaryOnly,
    DualSink(SecondarySink),
}

/// The installed configuration: process tag, primary sink and route.
///
/// Immutable once built; all mutable state lives in the per-thread scratch
/// state or behind the secondary sink lock.
pub struct SinkWriter {
    process_tag: String,
    pid: u32,
    primary: Arc<dyn PrimarySink>,
    route: Route,
}

impl SinkWriter {
    pub fn new(process_tag: String, primary: Arc<dyn PrimarySink>, route: Route) -> Self {
        Self {
            process_tag,
            pid: std::process::id(),
            primary,
            route,
        }
    }

    /// Primary-only writer to stderr with an empty process tag, used before `init`.
    pub fn fallback() -> Self {
        Self::new(String::new(), Arc::new(StderrSink::default()), Route::PrimaryOnly)
    }

    pub fn process_tag(&self) -> &str {
        &self.process_tag
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Emits one record to the primary sink and, if configured, to the secondary sink.
    ///
    /// Without a secondary sink no lock is taken. With one, everything not depending
    /// on the clock is formatted first, then the primary write, the timestamp and the
    /// secondary write all happen under the same lock. A record logged by the primary
    /// sink itself while the lock is held goes to the primary sink only.
    pub fn emit(
        &self,
        severity: Severity,
        tag_prefix: &str,
        text: &str,
        cause: Option<&(dyn Error + 'static)>,
    ) {
        ScratchState::with_current(|scratch| {
            scratch.message.clear();
            write_primary_message(&mut scratch.message, tag_prefix, text);
            let secondary = match &self.route {
                Route::PrimaryOnly => {
                    self.write_primary(severity, &scratch.message, cause);
                    return;
                }
                Route::DualSink(secondary) => secondary,
            };
            // nested records only reach the primary sink, the lock is not reentrant
            let Some(_emitting) = EmitGuard::enter() else {
                self.write_primary(severity, &scratch.message, cause);
                return;
            };

            scratch.line.clear();
            write_record_tail(
                &mut scratch.line,
                self.pid,
                scratch.thread_id,
                severity,
                &self.process_tag,
                &scratch.message,
                cause,
            );

            let failure = {
                let mut writer = secondary.lock();
                self.write_primary(severity, &scratch.message, cause);
                let Some(out) = writer.as_mut() else {
                    return;
                };
                scratch.timestamp.set(&Local::now());
                let written = out
                    .write_all(scratch.timestamp.as_bytes())
                    .and_then(|()| out.write_all(scratch.line.as_bytes()))
                    .and_then(|()| out.flush());
                match written {
                    Ok(()) => return,
                    Err(err) => {
                        *writer = None;
                        err
                    }
                }
            };
            self.primary.write(
                Severity::Error,
                &self.process_tag,
                &format!("[duallog] secondary sink write failed, mirroring disabled: {failure}"),
            );
        })
    }

    fn write_primary(
        &self,
        severity: Severity,
        message: &str,
        cause: Option<&(dyn Error + 'static)>,
    ) {
        match cause {
            Some(cause) => self
                .primary
                .write_with_cause(severity, &self.process_tag, message, cause),
            None => self.primary.write(severity, &self.process_tag, message),
        }
    }
}

impl fmt::Debug for SinkWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkWriter")
            .field("process_tag", &self.process_tag)
            .field("pid", &self.pid)
            .field("route", &self.route)
            .finish_non_exhaustive()
    }
}
