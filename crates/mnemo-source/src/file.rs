//! JSON file deck source.
//!
//! Loads a deck from disk in the wire shape `{"deck": [...], "mode": "..."}`.
//! Useful for scripted or recorded games, and the honest way to exercise the
//! malformed-payload path end to end.

use std::path::PathBuf;

use async_trait::async_trait;
use mnemo_core::Mode;

use crate::{DeckResponse, DeckSource, SourceError};

/// Reads decks from a JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// A source backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DeckSource for FileSource {
    async fn fetch(&self, mode: Mode) -> Result<DeckResponse, SourceError> {
        // Deck files are a handful of tokens; a synchronous read is fine.
        let bytes = std::fs::read(&self.path)?;
        let response: DeckResponse = serde_json::from_slice(&bytes)?;

        if response.mode != mode {
            tracing::warn!(
                requested = %mode,
                loaded = %response.mode,
                path = %self.path.display(),
                "deck file mode differs from requested mode; using the file's"
            );
        }

        Ok(response)
    }
}
