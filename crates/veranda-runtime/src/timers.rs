//! Timers
//!
//! Cancellable one-shot timers on a logical millisecond clock. The clock
//! only moves when the harness advances it, so firing order is
//! deterministic.

/// Handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u32);

#[derive(Debug)]
struct Entry<A> {
    handle: TimerHandle,
    fire_at: u64,
    action: A,
}

/// Queue of scheduled one-shot timers.
#[derive(Debug)]
pub struct TimerQueue<A> {
    now_ms: u64,
    next_id: u32,
    entries: Vec<Entry<A>>,
}

impl<A> TimerQueue<A> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_id: 1,
            entries: Vec::new(),
        }
    }

    /// Current logical time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of timers waiting to fire.
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Schedule an action `delay_ms` from now.
    pub fn schedule(&mut self, delay_ms: u64, action: A) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            handle,
            fire_at: self.now_ms + delay_ms,
            action,
        });
        tracing::trace!(target: "veranda::timers", ?handle, delay_ms, "schedule");
        handle
    }

    /// Cancel a pending timer. Returns whether it was still pending.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        self.entries.len() != before
    }

    /// Whether a handle still refers to a pending timer.
    pub fn is_scheduled(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    /// Advance the clock and collect the actions of every timer that came
    /// due, in firing order (ties break by scheduling order).
    pub fn advance(&mut self, ms: u64) -> Vec<A> {
        self.now_ms += ms;
        let now = self.now_ms;

        let mut due: Vec<Entry<A>> = Vec::new();
        let mut rest: Vec<Entry<A>> = Vec::new();
        for entry in self.entries.drain(..) {
            if entry.fire_at <= now {
                due.push(entry);
            } else {
                rest.push(entry);
            }
        }
        self.entries = rest;

        due.sort_by_key(|e| (e.fire_at, e.handle.0));
        due.into_iter().map(|e| e.action).collect()
    }
}

impl<A> Default for TimerQueue<A> {
    fn default() -> Self {
        Self::new()
    }
}
