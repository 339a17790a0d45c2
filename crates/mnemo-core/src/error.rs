//! Engine error taxonomy.

use crate::deck::Token;

/// Deck precondition violations.
///
/// A malformed deck is fatal for the start attempt: [`crate::Deck::deal`]
/// rejects it before any session state is touched, so the previous round (if
/// any) survives intact.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    /// The source supplied no tokens at all.
    #[error("deck is empty")]
    Empty,

    /// The token list cannot split into pairs.
    #[error("deck has odd length: {0}")]
    OddLength(usize),

    /// A token must appear on exactly two cards.
    #[error("token {token} appears {count} times, expected exactly 2")]
    UnpairedToken {
        /// The offending face value.
        token: Token,
        /// How often it actually appeared.
        count: usize,
    },
}
