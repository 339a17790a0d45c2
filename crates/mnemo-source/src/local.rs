//! Local deck generator.
//!
//! Deals `char_1` … `char_n` faces for the mode's pair count, duplicated and
//! shuffled. Seeding comes from the driver's environment (or a fixed seed
//! under test), so a game can be replayed deck-for-deck.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use mnemo_core::{Environment, Mode, Token};
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::{DeckResponse, DeckSource, SourceError};

/// Generates and shuffles decks locally.
#[derive(Debug)]
pub struct ShuffledSource {
    rng: Mutex<StdRng>,
}

impl ShuffledSource {
    /// A source with a fixed seed; the same seed deals the same decks in the
    /// same order.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: Mutex::new(StdRng::seed_from_u64(seed)) }
    }

    /// A source seeded from the environment's entropy.
    pub fn from_env<E: Environment>(env: &E) -> Self {
        Self::seeded(env.random_u64())
    }

    /// The distinct faces dealt for `mode`, in face order.
    fn faces(mode: Mode) -> Vec<Token> {
        (1..=mode.pair_count()).map(|i| Token::new(format!("char_{i}"))).collect()
    }
}

#[async_trait]
impl DeckSource for ShuffledSource {
    async fn fetch(&self, mode: Mode) -> Result<DeckResponse, SourceError> {
        let mut deck = Self::faces(mode);
        deck.extend(Self::faces(mode));

        {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            deck.shuffle(&mut *rng);
        }

        tracing::debug!(%mode, cards = deck.len(), "dealt local deck");
        Ok(DeckResponse { deck, mode })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use mnemo_core::Deck;

    use super::*;

    #[tokio::test]
    async fn deals_a_valid_deck_for_every_mode() {
        let source = ShuffledSource::seeded(7);

        for mode in [Mode::Easy, Mode::Medium, Mode::Hard, Mode::Expert] {
            let response = source.fetch(mode).await.unwrap();
            assert_eq!(response.mode, mode);
            assert_eq!(response.deck.len(), mode.card_count());

            // Every face appears exactly twice; Deck::deal agrees.
            let mut counts: HashMap<&Token, usize> = HashMap::new();
            for token in &response.deck {
                *counts.entry(token).or_default() += 1;
            }
            assert!(counts.values().all(|&c| c == 2));
            assert!(Deck::deal(response.deck).is_ok());
        }
    }

    #[tokio::test]
    async fn same_seed_same_decks() {
        let a = ShuffledSource::seeded(42);
        let b = ShuffledSource::seeded(42);

        let first = a.fetch(Mode::Medium).await.unwrap();
        let second = b.fetch(Mode::Medium).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn consecutive_fetches_differ() {
        let source = ShuffledSource::seeded(42);
        let first = source.fetch(Mode::Expert).await.unwrap();
        let second = source.fetch(Mode::Expert).await.unwrap();
        // Astronomically unlikely to collide for 40 cards.
        assert_ne!(first.deck, second.deck);
    }
}
