//! Periodic background timer
//!
//! A [`PeriodicTimer`] runs one repeating task on its own thread: wait one
//! interval, run the task, repeat. Cancellation is cooperative. Dropping the
//! stop token wakes the runner out of its wait, but a task that is already
//! executing always runs to completion before the runner exits.
//!
//! # Example
//!
//! ```
//! use hplog::PeriodicTimer;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let ticks = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&ticks);
//!
//! let timer = PeriodicTimer::named("ticker");
//! timer
//!     .start(Duration::from_millis(10), move || {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!     })
//!     .unwrap();
//!
//! std::thread::sleep(Duration::from_millis(50));
//! timer.stop();
//! assert!(ticks.load(Ordering::SeqCst) > 0);
//! assert!(!timer.is_running());
//! ```

use super::error::{LoggerError, Result};
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender, TryRecvError};
use parking_lot::Mutex;
use std::thread::{self, JoinHandle, ThreadId};
use std::time::Duration;

/// Handle on one runner thread
struct Worker {
    /// Dropping this sender is the stop request
    stop_tx: Option<Sender<()>>,
    /// Disconnects when the runner exits, whatever the reason
    done_rx: Receiver<()>,
    /// Taken by the first `stop` caller, which joins it
    handle: Option<JoinHandle<()>>,
    runner: ThreadId,
}

impl Worker {
    fn is_alive(&self) -> bool {
        !matches!(self.done_rx.try_recv(), Err(TryRecvError::Disconnected))
    }
}

/// Runs a single task repeatedly at a fixed interval on a dedicated thread.
///
/// Guarantees:
/// - at most one invocation of the task is in flight at any instant
/// - [`start`](Self::start) while running is a no-op
/// - [`stop`](Self::stop) is idempotent and returns only once the runner has
///   exited, including when several threads call it at the same time
///
/// The timer is deliberately not `Clone`: the running thread belongs to
/// exactly one handle.
///
/// The task owns its own failures. If it panics the runner thread ends, the
/// timer reports itself as not running and `stop` still returns.
pub struct PeriodicTimer {
    name: String,
    worker: Mutex<Option<Worker>>,
}

impl PeriodicTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::named("periodic-timer")
    }

    /// Create a timer whose runner thread carries `name`
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            worker: Mutex::new(None),
        }
    }

    /// Start running `task` every `interval`.
    ///
    /// Returns `Ok(false)` without touching the current runner if the timer
    /// is already running (or still draining a stop).
    pub fn start<F>(&self, interval: Duration, task: F) -> Result<bool>
    where
        F: FnMut() + Send + 'static,
    {
        let mut slot = self.worker.lock();
        if slot.as_ref().is_some_and(Worker::is_alive) {
            return Ok(false);
        }

        // Reap a runner that ended on its own
        if let Some(Worker {
            handle: Some(handle),
            ..
        }) = slot.take()
        {
            let _ = handle.join();
        }

        let (stop_tx, stop_rx) = bounded::<()>(0);
        let (done_tx, done_rx) = bounded::<()>(0);
        let mut task = task;

        let handle = thread::Builder::new()
            .name(self.name.clone())
            .spawn(move || {
                let _done = done_tx;
                while let Err(RecvTimeoutError::Timeout) = stop_rx.recv_timeout(interval) {
                    task();
                }
            })
            .map_err(|e| {
                LoggerError::io_operation(
                    "starting periodic timer",
                    format!("cannot spawn thread '{}'", self.name),
                    e,
                )
            })?;

        *slot = Some(Worker {
            stop_tx: Some(stop_tx),
            done_rx,
            runner: handle.thread().id(),
            handle: Some(handle),
        });
        Ok(true)
    }

    /// Request the runner to exit and wait until it has.
    ///
    /// A no-op when the timer is not running. When called from inside the
    /// task itself the request is recorded and the call returns at once; the
    /// runner exits as soon as the current invocation finishes.
    pub fn stop(&self) {
        let (handle, done_rx, runner) = {
            let mut slot = self.worker.lock();
            let Some(worker) = slot.as_mut() else {
                return;
            };
            drop(worker.stop_tx.take());
            (worker.handle.take(), worker.done_rx.clone(), worker.runner)
        };

        if runner == thread::current().id() {
            return;
        }

        match handle {
            Some(handle) => {
                if handle.join().is_err() {
                    eprintln!(
                        "[LOGGER ERROR] Task of periodic timer '{}' panicked",
                        self.name
                    );
                }
            }
            // Another caller owns the join; wait for the runner to exit
            None => {
                let _ = done_rx.recv();
            }
        }

        let mut slot = self.worker.lock();
        if slot.as_ref().is_some_and(|w| w.runner == runner) {
            *slot = None;
        }
    }

    pub fn is_running(&self) -> bool {
        self.worker.lock().as_ref().is_some_and(Worker::is_alive)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for PeriodicTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PeriodicTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for PeriodicTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PeriodicTimer")
            .field("name", &self.name)
            .field("running", &self.is_running())
            .finish()
    }
}
