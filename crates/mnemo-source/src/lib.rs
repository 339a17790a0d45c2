//! Deck supply contract and implementations.
//!
//! The engine consumes an ordered, already-shuffled token list; this crate
//! defines where such lists come from. Sources are the only suspending
//! collaborators in the system: a round does not exist until the fetch has
//! completed, and a failed fetch never touches session state.
//!
//! # Implementations
//!
//! - [`ShuffledSource`]: local generator (`char_1` … `char_n` faces,
//!   duplicated and shuffled)
//! - [`FileSource`]: JSON deck files in the `{"deck": [...], "mode": "..."}`
//!   wire shape
//! - [`FlakySource`]: deterministic failure injection for tests

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod file;
mod flaky;
mod local;

use async_trait::async_trait;
use mnemo_core::{Mode, Token};
use serde::{Deserialize, Serialize};

pub use file::FileSource;
pub use flaky::FlakySource;
pub use local::ShuffledSource;

/// A dealt deck as supplied over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckResponse {
    /// Ordered, already-shuffled token list; every token appears twice.
    pub deck: Vec<Token>,
    /// The mode the deck was dealt for.
    pub mode: Mode,
}

/// Errors a deck source can surface.
///
/// All of them leave the caller's session in its prior state; retrying is
/// the caller's choice, never automatic.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The source could not be reached.
    #[error("deck source unavailable: {reason}")]
    Unavailable {
        /// Human-readable failure description.
        reason: String,
    },

    /// Reading from the source failed.
    #[error("deck source I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The source responded with an undecodable payload.
    #[error("malformed deck payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Supplies shuffled decks for new rounds.
#[async_trait]
pub trait DeckSource: Send + Sync {
    /// Fetch a deck for `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the deck cannot be produced; the caller
    /// surfaces this as a start failure without mutating any round state.
    async fn fetch(&self, mode: Mode) -> Result<DeckResponse, SourceError>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn deck_response_wire_shape() {
        let response = DeckResponse {
            deck: vec![Token::from("char_1"), Token::from("char_1")],
            mode: Mode::Easy,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"deck":["char_1","char_1"],"mode":"easy"}"#);

        let decoded: DeckResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, response);
    }

    #[test]
    fn deck_response_rejects_unknown_mode() {
        let err = serde_json::from_str::<DeckResponse>(r#"{"deck":[],"mode":"extreme"}"#);
        assert!(err.is_err());
    }
}
