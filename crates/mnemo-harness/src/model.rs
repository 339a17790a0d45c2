//! Reference model for model-based testing.
//!
//! A simplified implementation of the game rules that serves as the oracle
//! against which the real engine is verified. Delays collapse to explicit
//! `Resolve` operations and there is no generation bookkeeping; the model
//! plays a single round, obviously correctly.
//!
//! # Design Principles
//!
//! - Simplicity: the model should be obviously correct
//! - Intent, not machinery: captures WHAT happens, not HOW it is scheduled
//! - Deterministic: same operations, same state

use mnemo_core::{CardState, GameSession, Outcome, Token};

/// Operations applied to both the model and the real engine.
///
/// Scheduling collapses into the operation stream: `Tick` is an elapsed
/// countdown second, `Resolve` is an elapsed resolution delay. Feeding both
/// sides the same stream makes their observable state comparable step by
/// step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Player reveals the card at `index`.
    Reveal {
        /// Deck position to flip.
        index: u32,
    },
    /// One countdown second elapses.
    Tick,
    /// The pending resolution delay (if any) elapses.
    Resolve,
}

/// Observable state compared between model and engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservableState {
    /// Visibility of every card, in deck order.
    pub card_states: Vec<CardState>,
    /// Buffered selections, in selection order.
    pub selected: Vec<u32>,
    /// Pairs resolved so far.
    pub matched_pairs: usize,
    /// Whether the mismatch lock is engaged.
    pub locked: bool,
    /// Seconds left on the clock.
    pub time_remaining: u32,
    /// In-progress or terminal result.
    pub outcome: Outcome,
}

/// Extract the engine's observable state for oracle comparison.
pub fn observe(session: &GameSession) -> ObservableState {
    ObservableState {
        card_states: session.cards().iter().map(|c| c.state).collect(),
        selected: session.selected().to_vec(),
        matched_pairs: session.matched_pairs(),
        locked: session.is_locked(),
        time_remaining: session.time_remaining(),
        outcome: session.outcome().unwrap_or_default(),
    }
}

/// A staged delayed transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingReset {
    HideOne(u32),
    HideTwo(u32, u32),
    Win,
}

/// Reference implementation of one round.
#[derive(Debug, Clone)]
pub struct ModelGame {
    tokens: Vec<Token>,
    states: Vec<CardState>,
    flipped: Vec<u32>,
    matched_pairs: usize,
    locked: bool,
    timer_running: bool,
    time_remaining: u32,
    outcome: Outcome,
    pending: Option<PendingReset>,
}

impl ModelGame {
    /// A round over `tokens` (assumed valid) with `budget` seconds on the
    /// clock.
    pub fn new(tokens: Vec<Token>, budget: u32) -> Self {
        let states = vec![CardState::Hidden; tokens.len()];
        Self {
            tokens,
            states,
            flipped: Vec::new(),
            matched_pairs: 0,
            locked: false,
            timer_running: true,
            time_remaining: budget,
            outcome: Outcome::InProgress,
            pending: None,
        }
    }

    /// Total pairs on the board.
    pub fn pair_count(&self) -> usize {
        self.tokens.len() / 2
    }

    /// Apply one operation.
    pub fn apply(&mut self, op: Operation) {
        match op {
            Operation::Reveal { index } => self.apply_reveal(index),
            Operation::Tick => self.apply_tick(),
            Operation::Resolve => self.apply_resolve(),
        }
    }

    /// Observable state for oracle comparison.
    pub fn observable(&self) -> ObservableState {
        ObservableState {
            card_states: self.states.clone(),
            selected: self.flipped.clone(),
            matched_pairs: self.matched_pairs,
            locked: self.locked,
            time_remaining: self.time_remaining,
            outcome: self.outcome,
        }
    }

    fn apply_reveal(&mut self, index: u32) {
        if self.outcome != Outcome::InProgress || self.locked || self.pending.is_some() {
            return;
        }
        let Some(state) = self.states.get(index as usize) else {
            return;
        };
        if *state != CardState::Hidden {
            return;
        }

        self.states[index as usize] = CardState::Revealed;
        self.flipped.push(index);

        if let [first, second] = *self.flipped.as_slice() {
            if first == second {
                self.pending = Some(PendingReset::HideOne(second));
            } else if self.tokens[first as usize] == self.tokens[second as usize] {
                self.states[first as usize] = CardState::Matched;
                self.states[second as usize] = CardState::Matched;
                self.flipped.clear();
                self.matched_pairs += 1;
                if self.matched_pairs == self.pair_count() {
                    self.timer_running = false;
                    self.pending = Some(PendingReset::Win);
                }
            } else {
                self.locked = true;
                self.pending = Some(PendingReset::HideTwo(first, second));
            }
        }
    }

    fn apply_tick(&mut self) {
        if self.outcome != Outcome::InProgress || !self.timer_running {
            return;
        }
        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            self.timer_running = false;
            self.outcome = Outcome::Lost;
            self.pending = None;
            self.flipped.clear();
            self.locked = false;
        }
    }

    fn apply_resolve(&mut self) {
        if self.outcome != Outcome::InProgress {
            return;
        }
        match self.pending.take() {
            Some(PendingReset::HideOne(index)) => {
                self.states[index as usize] = CardState::Hidden;
                self.flipped.clear();
            },
            Some(PendingReset::HideTwo(first, second)) => {
                self.states[first as usize] = CardState::Hidden;
                self.states[second as usize] = CardState::Hidden;
                self.flipped.clear();
                self.locked = false;
            },
            Some(PendingReset::Win) => {
                self.outcome = Outcome::Won;
            },
            None => {},
        }
    }
}

#[cfg(test)]
mod tests {
    use mnemo_core::Token;

    use super::*;

    fn game() -> ModelGame {
        let tokens = ["a", "b", "a", "b"].into_iter().map(Token::from).collect();
        ModelGame::new(tokens, 30)
    }

    #[test]
    fn model_matches_pair() {
        let mut model = game();
        model.apply(Operation::Reveal { index: 0 });
        model.apply(Operation::Reveal { index: 2 });
        assert_eq!(model.observable().matched_pairs, 1);
        assert_eq!(model.observable().card_states[0], CardState::Matched);
    }

    #[test]
    fn model_mismatch_locks_until_resolve() {
        let mut model = game();
        model.apply(Operation::Reveal { index: 0 });
        model.apply(Operation::Reveal { index: 1 });
        assert!(model.observable().locked);

        model.apply(Operation::Reveal { index: 2 });
        assert_eq!(model.observable().card_states[2], CardState::Hidden);

        model.apply(Operation::Resolve);
        assert!(!model.observable().locked);
        assert_eq!(model.observable().card_states[0], CardState::Hidden);
    }

    #[test]
    fn model_wins_after_resolve() {
        let mut model = game();
        for index in [0, 2, 1, 3] {
            model.apply(Operation::Reveal { index });
        }
        assert_eq!(model.observable().outcome, Outcome::InProgress);
        model.apply(Operation::Resolve);
        assert_eq!(model.observable().outcome, Outcome::Won);
    }

    #[test]
    fn model_loses_on_expiry() {
        let mut model = game();
        for _ in 0..30 {
            model.apply(Operation::Tick);
        }
        assert_eq!(model.observable().outcome, Outcome::Lost);
        model.apply(Operation::Tick);
        assert_eq!(model.observable().time_remaining, 0);
    }
}
