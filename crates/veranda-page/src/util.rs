//! Utilities

use veranda_runtime::{TimerHandle, TimerQueue};

/// Trailing-edge debouncer over a timer queue. Each trigger cancels the
/// previously scheduled action and re-arms the delay, so only the last
/// action of a burst fires.
///
/// No installed behavior uses this yet; it is the throttling hook for
/// scroll-heavy handlers.
#[derive(Debug)]
pub struct Debouncer {
    delay_ms: u64,
    pending: Option<TimerHandle>,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self { delay_ms, pending: None }
    }

    /// Arm (or re-arm) the debounced action.
    pub fn trigger<A>(&mut self, timers: &mut TimerQueue<A>, action: A) -> TimerHandle {
        if let Some(handle) = self.pending.take() {
            timers.cancel(handle);
        }
        let handle = timers.schedule(self.delay_ms, action);
        self.pending = Some(handle);
        handle
    }

    /// Cancel the armed action, if any.
    pub fn cancel<A>(&mut self, timers: &mut TimerQueue<A>) {
        if let Some(handle) = self.pending.take() {
            timers.cancel(handle);
        }
    }

    /// Whether an action is still armed.
    pub fn is_armed<A>(&self, timers: &TimerQueue<A>) -> bool {
        self.pending.is_some_and(|handle| timers.is_scheduled(handle))
    }
}
