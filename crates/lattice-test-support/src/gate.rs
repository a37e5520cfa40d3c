//! Ready gate — cross-thread one-shot readiness signal for tests.

use std::sync::{Condvar, Mutex};

/// A one-shot cross-thread readiness signal that re-arms itself.
///
/// A consumer thread blocks in [`wait_ready`](Self::wait_ready) until a
/// producer thread calls [`set_ready`](Self::set_ready). Observing readiness
/// resets the gate, so the same instance carries an unbounded number of
/// producer/consumer rounds without explicit re-initialization.
///
/// Usage contract (documented, not enforced by the type): exactly one
/// `set_ready` call between consecutive `wait_ready` calls, and at most one
/// thread waiting at a time. A second `set_ready` in the same round is
/// benign — the flag is already true and the extra wake has no observable
/// effect. A missing `set_ready` shows up as a hung test; there is
/// deliberately no timeout to mask that signal.
///
/// Everything the producer wrote before `set_ready` is visible to the
/// consumer after `wait_ready` returns, by the mutex/condvar acquire-release
/// discipline. The internal mutex guards only the readiness flag and is
/// never held while caller code runs.
#[derive(Debug, Default)]
pub struct ReadyGate {
    ready: Mutex<bool>,
    cond: Condvar,
}

impl ReadyGate {
    /// Creates a gate in the not-ready state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the gate ready and wakes the waiter, if one is blocked.
    ///
    /// Never blocks beyond the brief internal lock acquisition.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned. A poisoned lock means a
    /// test thread already panicked mid-signal; that failure is fatal and
    /// is not translated into a recoverable error.
    pub fn set_ready(&self) {
        let mut ready = self.ready.lock().expect("ready gate mutex poisoned");
        *ready = true;
        self.cond.notify_one();
    }

    /// Blocks until the gate is ready, then re-arms it.
    ///
    /// Returns immediately if [`set_ready`](Self::set_ready) has already
    /// been called this round. The wait loops on the readiness flag, so a
    /// spurious condvar wake never releases the caller early. On return the
    /// flag has been reset to false and the gate is ready for the next
    /// round.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned (see
    /// [`set_ready`](Self::set_ready)).
    pub fn wait_ready(&self) {
        let mut ready = self.ready.lock().expect("ready gate mutex poisoned");
        while !*ready {
            ready = self.cond.wait(ready).expect("ready gate mutex poisoned");
        }
        *ready = false;
    }
}
