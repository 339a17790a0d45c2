//! Match evaluation: classify a completed pair and stage its resolution.
//!
//! Classification is pure and always precedes scheduling: the session first
//! asks [`classify`] what the pair is, then stages the matching immediate or
//! delayed transition. The delays model player-visible pacing; they never
//! block the countdown.

use std::time::Duration;

use crate::deck::Card;

/// Delay before a duplicate-click selection is hidden again.
pub const DUPLICATE_HIDE_DELAY: Duration = Duration::from_millis(150);

/// Delay before a mismatched pair is hidden and the board unlocked.
pub const MISMATCH_HIDE_DELAY: Duration = Duration::from_millis(900);

/// Delay between the final match and the win announcement.
pub const WIN_ANNOUNCE_DELAY: Duration = Duration::from_millis(500);

/// Classification of two buffered selections. Mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The same physical card was selected twice. Reveal guards normally
    /// prevent this; the evaluator re-checks defensively.
    Duplicate,
    /// Equal tokens on distinct positions.
    Matched,
    /// Tokens differ.
    Mismatched,
}

/// Classify a completed pair, comparing `index` before `token`.
pub fn classify(first: &Card, second: &Card) -> MatchOutcome {
    if first.index() == second.index() {
        MatchOutcome::Duplicate
    } else if first.token() == second.token() {
        MatchOutcome::Matched
    } else {
        MatchOutcome::Mismatched
    }
}
