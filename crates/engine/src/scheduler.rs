//! Tick scheduler - a repeating timer that re-arms on reconfiguration.
//!
//! The scheduler never sleeps. The loop asks [`TickScheduler::poll`] how
//! many ticks are due and uses [`TickScheduler::time_until_next`] as its
//! event-poll timeout.
//!
//! | Event | Effect |
//! |-------|--------|
//! | period or enabled flag changes | partial period dropped, timer re-armed from `now` |
//! | `restart(now)` | pending tick cancelled, timer re-armed from `now` |
//! | `stop()` | disabled, `poll` returns 0 until re-enabled |

use std::time::Instant;

/// Ticks delivered by one `poll` after a stall; older backlog is dropped.
pub const MAX_CATCH_UP_TICKS: u32 = 4;

/// Monotonic milliseconds since construction.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    start: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TickScheduler {
    period_ms: u32,
    enabled: bool,
    next_due_ms: Option<u64>,
}

impl TickScheduler {
    /// A stopped scheduler; call [`sync`](Self::sync) to arm it.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn next_due_ms(&self) -> Option<u64> {
        self.next_due_ms
    }

    /// Bring the timer in line with the current period and run state.
    ///
    /// Returns true when the timer was re-armed or stopped.
    pub fn sync(&mut self, period_ms: u32, enabled: bool, now_ms: u64) -> bool {
        let period_ms = period_ms.max(1);
        if self.period_ms == period_ms && self.enabled == enabled {
            return false;
        }
        self.period_ms = period_ms;
        self.enabled = enabled;
        self.next_due_ms = enabled.then(|| now_ms + period_ms as u64);
        true
    }

    /// Cancel the pending tick and wait a full period from `now_ms`.
    pub fn restart(&mut self, now_ms: u64) {
        if self.enabled {
            self.next_due_ms = Some(now_ms + self.period_ms as u64);
        }
    }

    pub fn stop(&mut self) {
        self.enabled = false;
        self.next_due_ms = None;
    }

    /// Number of ticks due at `now_ms`, advancing the deadline past them.
    pub fn poll(&mut self, now_ms: u64) -> u32 {
        let Some(due) = self.next_due_ms else {
            return 0;
        };
        if now_ms < due {
            return 0;
        }

        let period = self.period_ms as u64;
        let behind = (now_ms - due) / period + 1;
        if behind > MAX_CATCH_UP_TICKS as u64 {
            log::debug!(
                "tick scheduler {}ms behind; dropping {} ticks",
                now_ms - due,
                behind - MAX_CATCH_UP_TICKS as u64
            );
            self.next_due_ms = Some(now_ms + period);
            MAX_CATCH_UP_TICKS
        } else {
            self.next_due_ms = Some(due + behind * period);
            behind as u32
        }
    }

    /// Milliseconds until the next tick, or `None` while stopped.
    pub fn time_until_next(&self, now_ms: u64) -> Option<u64> {
        self.next_due_ms.map(|due| due.saturating_sub(now_ms))
    }
}
