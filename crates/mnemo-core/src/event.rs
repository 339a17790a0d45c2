//! Events fed into the session and actions it returns.
//!
//! The engine follows an action-based design: it performs no I/O and holds no
//! timers. Drivers execute the returned actions, typically by spawning a
//! one-shot sleep that feeds the corresponding elapsed event back in, and
//! the generation tag lets the engine discard anything that outlived its
//! round.

use std::time::Duration;

use crate::session::Outcome;

/// Monotonically increasing round counter.
///
/// Every scheduled action carries the generation that created it; a new game
/// bumps the counter, so events from cancelled rounds are inert on arrival.
pub type Generation = u64;

/// A delayed state transition staged by the match evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Hide the duplicate-clicked card again and clear the buffer.
    HideSingle {
        /// The card to flip back.
        index: u32,
    },
    /// Hide a mismatched pair, clear the buffer, release the lock.
    HideBoth {
        /// First selection of the pair.
        first: u32,
        /// Second selection of the pair.
        second: u32,
    },
    /// Flip the outcome to [`Outcome::Won`].
    AnnounceWin,
}

/// Events fed into [`crate::GameSession::handle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The player revealed the card at `index`.
    Reveal {
        /// Deck position to flip face up.
        index: u32,
    },
    /// A scheduled countdown tick elapsed.
    TickElapsed {
        /// Round the tick was scheduled for.
        generation: Generation,
    },
    /// A scheduled resolution delay elapsed.
    ResolutionElapsed {
        /// Round the resolution was scheduled for.
        generation: Generation,
    },
}

/// Actions returned by the session for the driver to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// Deliver [`SessionEvent::TickElapsed`] after `after`.
    ScheduleTick {
        /// Round the tick belongs to.
        generation: Generation,
        /// Delay before delivery.
        after: Duration,
    },
    /// Deliver [`SessionEvent::ResolutionElapsed`] after `after`.
    ScheduleResolution {
        /// Round the resolution belongs to.
        generation: Generation,
        /// Delay before delivery.
        after: Duration,
    },
    /// The displayed time changed.
    TimeChanged {
        /// Seconds left on the clock.
        remaining: u32,
    },
    /// The round reached a terminal outcome. Emitted exactly once per round.
    OutcomeReached {
        /// The terminal outcome.
        outcome: Outcome,
    },
}
