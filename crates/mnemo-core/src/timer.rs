//! Cooperative countdown clock.
//!
//! The timer owns only the countdown *state*; the 1-second cadence is a
//! scheduled action executed by the driver. Each delivered tick decrements by
//! one, and at zero the timer stops itself so a burst of queued ticks can
//! never expire twice.

use std::time::Duration;

/// Interval between countdown ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Derive the time budget in seconds from the pair count.
///
/// Unlisted deck sizes fall back to 90 seconds.
pub const fn budget_for(pair_count: usize) -> u32 {
    match pair_count {
        5 => 30,
        10 => 45,
        15 => 60,
        20 => 80,
        _ => 90,
    }
}

/// Result of applying one countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTick {
    /// The timer was not running; nothing changed.
    Ignored,
    /// The countdown decremented and keeps running.
    Running {
        /// Seconds left after the decrement.
        remaining: u32,
    },
    /// The countdown reached zero and stopped itself.
    Expired,
}

/// Countdown state for one round.
#[derive(Debug, Clone, Default)]
pub struct CountdownTimer {
    remaining: u32,
    running: bool,
}

impl CountdownTimer {
    /// A stopped timer with no budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset any running countdown and start again from `budget_secs`.
    pub fn start(&mut self, budget_secs: u32) {
        self.remaining = budget_secs;
        self.running = true;
    }

    /// Stop the countdown. Idempotent; safe to call when not running.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Whether a countdown is in progress.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Seconds left on the clock.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Apply one tick.
    ///
    /// Expiry is reported exactly once: the expiring tick flips the timer to
    /// stopped, and every later tick returns [`TimerTick::Ignored`].
    pub fn tick(&mut self) -> TimerTick {
        if !self.running {
            return TimerTick::Ignored;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            TimerTick::Expired
        } else {
            TimerTick::Running { remaining: self.remaining }
        }
    }
}
