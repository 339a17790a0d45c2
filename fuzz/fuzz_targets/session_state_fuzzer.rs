//! Fuzz target for the [`GameSession`] state machine
//!
//! Prevent invariant breakage via arbitrary event interleavings
//!
//! # Strategy
//!
//! - Event sequences: arbitrary mixes of reveals, ticks, resolutions, and
//!   restarts
//! - Index probing: out-of-range reveals alongside valid ones
//! - Generation probing: events tagged with stale and future generations
//!
//! # Invariants
//!
//! - NEVER panic on any event
//! - Selection buffer length ≤ 2
//! - `matched_pairs` ≤ `pair_count`
//! - Terminal outcomes are stable: no event moves a round out of Won/Lost
//! - Stale-generation events leave observable state untouched

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mnemo_core::{GameSession, Mode, Outcome, SessionEvent, Token};

#[derive(Debug, Clone, Arbitrary)]
enum FuzzEvent {
    Reveal { index: u32 },
    Tick { generation_offset: u8 },
    Resolution { generation_offset: u8 },
    NewGame { pairs: u8 },
}

fn paired_tokens(pairs: usize) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(pairs * 2);
    for i in 0..pairs {
        let token = Token::new(format!("f{i}"));
        tokens.push(token.clone());
        tokens.push(token);
    }
    tokens
}

fuzz_target!(|events: Vec<FuzzEvent>| {
    let mut session = GameSession::new();
    let _ = session.start_new_game(paired_tokens(4), Mode::Easy);

    for event in events {
        let generation = session.generation();
        let was_terminal = matches!(session.outcome(), Some(Outcome::Won | Outcome::Lost));
        let outcome_before = session.outcome();

        match event {
            FuzzEvent::Reveal { index } => {
                let _ = session.handle(SessionEvent::Reveal { index });
            },

            FuzzEvent::Tick { generation_offset } => {
                // Offsets probe stale (and never-issued future) generations.
                let tagged = generation.saturating_sub(u64::from(generation_offset % 3));
                let observable = (session.matched_pairs(), session.time_remaining());
                let _ = session.handle(SessionEvent::TickElapsed { generation: tagged });

                if tagged != generation {
                    assert_eq!(
                        (session.matched_pairs(), session.time_remaining()),
                        observable,
                        "stale tick mutated the round"
                    );
                }
            },

            FuzzEvent::Resolution { generation_offset } => {
                let tagged = generation.saturating_sub(u64::from(generation_offset % 3));
                let locked_before = session.is_locked();
                let _ = session.handle(SessionEvent::ResolutionElapsed { generation: tagged });

                if tagged != generation {
                    assert_eq!(session.is_locked(), locked_before, "stale resolution fired");
                }
            },

            FuzzEvent::NewGame { pairs } => {
                let pairs = usize::from(pairs % 6);
                let result = session.start_new_game(paired_tokens(pairs), Mode::Easy);
                // Zero pairs is the only malformed shape this builder makes.
                assert_eq!(result.is_err(), pairs == 0);
                if result.is_ok() {
                    assert!(session.generation() > generation);
                    assert_eq!(session.outcome(), Some(Outcome::InProgress));
                }
            },
        }

        assert!(session.selected().len() <= 2);
        assert!(session.matched_pairs() <= session.pair_count());

        if was_terminal && session.generation() == generation {
            assert_eq!(session.outcome(), outcome_before, "terminal outcome changed");
        }
    }
});
