//! Deck data model: tokens, cards, difficulty modes, and the validated deal.
//!
//! A [`Deck`] can only be constructed through [`Deck::deal`], which enforces
//! the pairing invariant (even length, every token on exactly two cards).
//! Anything that fails the check is rejected before a round exists.

use std::{collections::HashMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::DeckError;

/// Opaque face-value identity shared by exactly two cards.
///
/// The engine never inspects the content: `char_3`, an emoji, or an asset
/// path are all equally valid faces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Create a token from any string-like face name.
    pub fn new(face: impl Into<String>) -> Self {
        Self(face.into())
    }

    /// The face name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Token {
    fn from(face: &str) -> Self {
        Self::new(face)
    }
}

/// Visibility state of one deck position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardState {
    /// Face down; the token is not exposed to the renderer.
    Hidden,
    /// Face up but not yet resolved into a pair.
    Revealed,
    /// Resolved as part of a matched pair. Inert to further reveals.
    Matched,
}

/// One deck position: a stable index, its token, and its visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    index: u32,
    token: Token,
    state: CardState,
}

impl Card {
    /// Stable position id within the deck.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// The face value of this position.
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Current visibility state.
    pub fn state(&self) -> CardState {
        self.state
    }
}

/// Ordered sequence of cards with the pairing invariant enforced at deal
/// time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Deal a deck from an ordered, already-shuffled token list.
    ///
    /// Card indices follow list order; all cards start `Hidden`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] for a zero-length list,
    /// [`DeckError::OddLength`] when the list cannot split into pairs, and
    /// [`DeckError::UnpairedToken`] when any token does not appear exactly
    /// twice.
    pub fn deal(tokens: Vec<Token>) -> Result<Self, DeckError> {
        if tokens.is_empty() {
            return Err(DeckError::Empty);
        }
        if tokens.len() % 2 != 0 {
            return Err(DeckError::OddLength(tokens.len()));
        }

        let mut counts: HashMap<&Token, usize> = HashMap::new();
        for token in &tokens {
            *counts.entry(token).or_default() += 1;
        }
        // Report the first offender in deck order, not map order.
        if let Some(token) = tokens.iter().find(|t| counts.get(t) != Some(&2)) {
            let count = counts.get(token).copied().unwrap_or(0);
            return Err(DeckError::UnpairedToken { token: token.clone(), count });
        }

        let cards = tokens
            .into_iter()
            .enumerate()
            .map(|(i, token)| Card { index: i as u32, token, state: CardState::Hidden })
            .collect();

        Ok(Self { cards })
    }

    /// Number of cards in the deck. Always even and non-zero.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// A dealt deck is never empty; provided for completeness.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of matchable pairs (`len / 2`).
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Card at `index`, if in range.
    pub fn card(&self, index: u32) -> Option<&Card> {
        self.cards.get(index as usize)
    }

    /// All cards in deal order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Transition the card at `index` to `state`. Out-of-range is a no-op;
    /// callers have already validated the index.
    pub(crate) fn set_state(&mut self, index: u32, state: CardState) {
        if let Some(card) = self.cards.get_mut(index as usize) {
            card.state = state;
        }
    }
}

/// Difficulty mode, determining deck size (and through it the timer budget).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// 10 cards, 5 pairs.
    Easy,
    /// 20 cards, 10 pairs.
    #[default]
    Medium,
    /// 30 cards, 15 pairs.
    Hard,
    /// 40 cards, 20 pairs.
    Expert,
}

impl Mode {
    /// Number of cards dealt for this mode.
    pub const fn card_count(self) -> usize {
        match self {
            Self::Easy => 10,
            Self::Medium => 20,
            Self::Hard => 30,
            Self::Expert => 40,
        }
    }

    /// Number of pairs dealt for this mode.
    pub const fn pair_count(self) -> usize {
        self.card_count() / 2
    }

    /// Canonical lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = std::convert::Infallible;

    /// Unknown mode names fall back to the default ([`Mode::Medium`]).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "easy" => Self::Easy,
            "medium" => Self::Medium,
            "hard" => Self::Hard,
            "expert" => Self::Expert,
            _ => Self::default(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn tokens(faces: &[&str]) -> Vec<Token> {
        faces.iter().copied().map(Token::from).collect()
    }

    #[test]
    fn deal_accepts_valid_deck() {
        let deck = Deck::deal(tokens(&["a", "b", "a", "b"])).unwrap();
        assert_eq!(deck.len(), 4);
        assert_eq!(deck.pair_count(), 2);
        assert!(deck.cards().iter().all(|c| c.state() == CardState::Hidden));
    }

    #[test]
    fn deal_assigns_indices_in_order() {
        let deck = Deck::deal(tokens(&["a", "b", "b", "a"])).unwrap();
        let indices: Vec<u32> = deck.cards().iter().map(Card::index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert_eq!(deck.card(3).unwrap().token().as_str(), "a");
    }

    #[test]
    fn deal_rejects_empty_deck() {
        assert_eq!(Deck::deal(vec![]), Err(DeckError::Empty));
    }

    #[test]
    fn deal_rejects_odd_length() {
        let result = Deck::deal(tokens(&["a", "a", "b"]));
        assert_eq!(result, Err(DeckError::OddLength(3)));
    }

    #[test]
    fn deal_rejects_unpaired_token() {
        let result = Deck::deal(tokens(&["a", "b", "b", "b"]));
        assert_eq!(
            result,
            Err(DeckError::UnpairedToken { token: Token::from("a"), count: 1 })
        );
    }

    #[test]
    fn deal_rejects_triple_token() {
        let result = Deck::deal(tokens(&["a", "a", "a", "a", "b", "b"]));
        assert!(matches!(result, Err(DeckError::UnpairedToken { count: 4, .. })));
    }

    #[test]
    fn card_out_of_range_is_none() {
        let deck = Deck::deal(tokens(&["a", "a"])).unwrap();
        assert!(deck.card(2).is_none());
    }

    #[test]
    fn mode_card_counts() {
        assert_eq!(Mode::Easy.card_count(), 10);
        assert_eq!(Mode::Medium.card_count(), 20);
        assert_eq!(Mode::Hard.card_count(), 30);
        assert_eq!(Mode::Expert.card_count(), 40);
    }

    #[test]
    fn mode_parse_round_trips() {
        for mode in [Mode::Easy, Mode::Medium, Mode::Hard, Mode::Expert] {
            assert_eq!(mode.as_str().parse::<Mode>().unwrap(), mode);
        }
    }

    #[test]
    fn unknown_mode_falls_back_to_default() {
        assert_eq!("nightmare".parse::<Mode>().unwrap(), Mode::Medium);
        assert_eq!("".parse::<Mode>().unwrap(), Mode::Medium);
    }

    #[test]
    fn mode_parse_is_case_insensitive() {
        assert_eq!("EASY".parse::<Mode>().unwrap(), Mode::Easy);
        assert_eq!("Hard".parse::<Mode>().unwrap(), Mode::Hard);
    }
}
