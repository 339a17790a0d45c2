//! Fuzz target for [`Deck::deal`]
//!
//! # Invariants
//!
//! - NEVER panic on any token list
//! - Accept exactly the valid shapes: non-empty, even length, every token on
//!   exactly two cards
//! - Dealt decks report `pair_count == len / 2` and start fully hidden

#![no_main]

use std::collections::HashMap;

use libfuzzer_sys::fuzz_target;
use mnemo_core::{CardState, Deck, Token};

fuzz_target!(|faces: Vec<String>| {
    let tokens: Vec<Token> = faces.into_iter().map(Token::new).collect();

    let mut counts: HashMap<&Token, usize> = HashMap::new();
    for token in &tokens {
        *counts.entry(token).or_default() += 1;
    }
    let valid = !tokens.is_empty()
        && tokens.len() % 2 == 0
        && counts.values().all(|&count| count == 2);

    match Deck::deal(tokens.clone()) {
        Ok(deck) => {
            assert!(valid, "malformed deck accepted");
            assert_eq!(deck.len(), tokens.len());
            assert_eq!(deck.pair_count(), tokens.len() / 2);
            assert!(deck.cards().iter().all(|c| c.state() == CardState::Hidden));
        },
        Err(_) => assert!(!valid, "valid deck rejected"),
    }
});
