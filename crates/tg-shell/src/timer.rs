//! Passive decay scheduling.

use std::time::{Duration, Instant};

/// A cancellable fixed-period schedule.
///
/// The timer does not sleep or spawn anything. The owner asks it how many
/// periods have passed with [`DecayTimer::poll`], and uses
/// [`DecayTimer::time_until_due`] to size its own wait.
#[derive(Debug, Clone)]
pub struct DecayTimer {
    period: Duration,
    next_due: Option<Instant>,
}

impl DecayTimer {
    /// Create an idle timer. It does nothing until [`DecayTimer::start`].
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    /// The tick period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Arm the timer; the first tick is due one period after `now`.
    ///
    /// A zero period never arms.
    pub fn start(&mut self, now: Instant) {
        if self.period.is_zero() {
            return;
        }
        self.next_due = now.checked_add(self.period);
    }

    /// Whether ticks can still fire.
    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    /// Stop the timer for good (until started again).
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Number of periods that have come due by `now`.
    ///
    /// Each due tick is reported exactly once: the next due time moves past
    /// `now` before returning.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(due) = self.next_due else {
            return 0;
        };
        if now < due {
            return 0;
        }

        // Whole periods since the due time, plus the due tick itself.
        let missed = now.duration_since(due).as_nanos() / self.period.as_nanos() + 1;
        let fired = u32::try_from(missed).unwrap_or(u32::MAX);
        self.next_due = self
            .period
            .checked_mul(fired)
            .and_then(|step| due.checked_add(step))
            .or_else(|| now.checked_add(self.period));
        fired
    }

    /// Time left until the next tick, or `None` when inactive. Zero when a
    /// tick is already due.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}
