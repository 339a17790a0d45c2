//! Renderer-facing read model.
//!
//! Renderers consume these views and forward player clicks back as
//! [`crate::SessionEvent::Reveal`]; the engine knows nothing about them
//! beyond this surface.

use serde::Serialize;

use crate::{
    deck::{CardState, Mode, Token},
    session::Outcome,
};

/// Per-card display state.
///
/// `token` is present only while the face is visible; a hidden card never
/// leaks its identity to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    /// Stable deck position.
    pub index: u32,
    /// Current visibility.
    pub state: CardState,
    /// Face value, when visible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<Token>,
}

/// Session-level display state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionView {
    /// Difficulty of the current round.
    pub mode: Mode,
    /// Seconds left on the clock.
    pub time_remaining: u32,
    /// In-progress or terminal result.
    pub outcome: Outcome,
    /// Pairs resolved so far.
    pub matched_pairs: usize,
    /// Total pairs in the deck.
    pub pair_count: usize,
    /// Whether reveals are currently being rejected by the mismatch lock.
    pub locked: bool,
}
