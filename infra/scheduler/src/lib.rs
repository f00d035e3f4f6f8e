//! # Scheduler
//!
//! A single-pending-timer delay primitive built on Tokio timers.
//!
//! Interaction-driven triggers (hover, focus, mount) must not accumulate
//! parallel timers or fire stale callbacks after the user has moved on.
//! [`Scheduler`] guarantees at most one pending invocation per instance:
//! [`Scheduler::schedule`] replaces any pending timer, and
//! [`Scheduler::cancel`] drops it without firing.
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use waypoint_scheduler::Scheduler;
//!
//! # #[tokio::main(flavor = "current_thread", start_paused = true)]
//! # async fn main() {
//! let scheduler = Scheduler::new(Duration::from_millis(225));
//! scheduler.schedule(|| { /* trigger the prefetch */ });
//! scheduler.cancel(); // nothing fires
//! # }
//! ```

use parking_lot::Mutex;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::trace;

/// A debounced trigger with at most one pending timer.
///
/// `schedule` always cancels the previous pending timer before arming a
/// new one, so rapid repeated calls collapse into a single delayed
/// invocation timed from the last call. Dropping the scheduler cancels
/// any pending invocation.
#[derive(Debug)]
pub struct Scheduler {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Scheduler {
    /// Creates a scheduler that fires callbacks after `delay`.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay, pending: Mutex::new(None) }
    }

    /// The configured delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Arms the timer to invoke `callback` after the delay, replacing any
    /// pending invocation.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn schedule<F>(&self, callback: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let delay = self.delay;
        let mut pending = self.pending.lock();
        if let Some(previous) = pending.take() {
            previous.abort();
            trace!("pending timer replaced");
        }
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        }));
    }

    /// Stops the pending timer without invoking its callback.
    ///
    /// A no-op when nothing is pending.
    pub fn cancel(&self) {
        if let Some(pending) = self.pending.lock().take() {
            pending.abort();
            trace!("pending timer canceled");
        }
    }

    /// Whether a timer is armed and has not fired yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.lock().as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
