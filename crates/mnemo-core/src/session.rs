//! Game session: the top-level orchestrator.
//!
//! ## Responsibilities
//!
//! - Round lifecycle: validate and deal a deck, reset counters, start the
//!   countdown
//! - Reveal handling: guard, flip, buffer, and hand completed pairs to the
//!   evaluator
//! - Terminal transitions: Won (all pairs matched) and Lost (countdown
//!   expired), each reported exactly once
//! - Cancellation: a new game bumps the generation so every in-flight tick
//!   and resolution becomes inert
//!
//! ## Design
//!
//! - Action-based: all methods return actions, no direct I/O
//! - Single owned state: no module-level globals; independent sessions (and
//!   tests) coexist freely

use serde::Serialize;

use crate::{
    buffer::{BufferPush, SelectionBuffer},
    deck::{CardState, Deck, Mode, Token},
    error::DeckError,
    evaluator::{
        self, DUPLICATE_HIDE_DELAY, MISMATCH_HIDE_DELAY, MatchOutcome, WIN_ANNOUNCE_DELAY,
    },
    event::{Generation, Resolution, SessionAction, SessionEvent},
    timer::{CountdownTimer, TICK_INTERVAL, TimerTick, budget_for},
    view::{CardView, SessionView},
};

/// In-progress or terminal result of a round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The round is still being played.
    #[default]
    InProgress,
    /// Every pair was matched before the countdown expired.
    Won,
    /// The countdown expired with pairs left on the board.
    Lost,
}

/// One dealt round.
#[derive(Debug)]
struct Round {
    deck: Deck,
    mode: Mode,
    buffer: SelectionBuffer,
    matched_pairs: usize,
    locked: bool,
    timer: CountdownTimer,
    outcome: Outcome,
    pending: Option<Resolution>,
}

/// Top-level orchestrator composing the deck, selection buffer, match
/// evaluator, and countdown timer.
///
/// The session outlives individual rounds: [`GameSession::start_new_game`]
/// replaces the round state and bumps the generation counter that keeps
/// stale scheduled events from corrupting a fresh deal.
#[derive(Debug, Default)]
pub struct GameSession {
    round: Option<Round>,
    generation: Generation,
}

impl GameSession {
    /// A session with no round dealt yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current round generation. Bumped by every successful
    /// [`GameSession::start_new_game`].
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Validate `tokens`, deal a fresh round, and start the countdown.
    ///
    /// Validation happens before any state is touched: on error the previous
    /// round (if any) survives intact, including its scheduled events.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError`] when the token list is empty, odd-length, or
    /// contains a token that does not appear exactly twice.
    pub fn start_new_game(
        &mut self,
        tokens: Vec<Token>,
        mode: Mode,
    ) -> Result<Vec<SessionAction>, DeckError> {
        let deck = Deck::deal(tokens)?;

        self.generation += 1;
        let budget = budget_for(deck.pair_count());
        let mut timer = CountdownTimer::new();
        timer.start(budget);

        tracing::info!(
            generation = self.generation,
            %mode,
            pairs = deck.pair_count(),
            budget,
            "new game started"
        );

        self.round = Some(Round {
            deck,
            mode,
            buffer: SelectionBuffer::new(),
            matched_pairs: 0,
            locked: false,
            timer,
            outcome: Outcome::InProgress,
            pending: None,
        });

        Ok(vec![
            SessionAction::TimeChanged { remaining: budget },
            SessionAction::ScheduleTick { generation: self.generation, after: TICK_INTERVAL },
        ])
    }

    /// Process one event and return the resulting actions.
    ///
    /// Rejected reveals and stale scheduled events are silent no-ops (empty
    /// action list); they are expected under normal races between the
    /// presentation layer and pending timers.
    pub fn handle(&mut self, event: SessionEvent) -> Vec<SessionAction> {
        match event {
            SessionEvent::Reveal { index } => self.handle_reveal(index),
            SessionEvent::TickElapsed { generation } => self.handle_tick(generation),
            SessionEvent::ResolutionElapsed { generation } => self.handle_resolution(generation),
        }
    }

    /// Handle a player reveal.
    fn handle_reveal(&mut self, index: u32) -> Vec<SessionAction> {
        let generation = self.generation;
        let Some(round) = self.round.as_mut() else {
            tracing::trace!(index, "reveal before any round; ignored");
            return vec![];
        };

        if round.outcome != Outcome::InProgress {
            tracing::trace!(index, outcome = ?round.outcome, "reveal after terminal outcome; ignored");
            return vec![];
        }
        if round.locked || round.pending.is_some() {
            tracing::trace!(index, "reveal during resolution window; ignored");
            return vec![];
        }
        let Some(card) = round.deck.card(index) else {
            tracing::trace!(index, "reveal out of range; ignored");
            return vec![];
        };
        if card.state() != CardState::Hidden {
            tracing::trace!(index, state = ?card.state(), "reveal on visible card; ignored");
            return vec![];
        }

        round.deck.set_state(index, CardState::Revealed);
        match round.buffer.push(index) {
            Some(BufferPush::Pair { first, second }) => {
                Self::evaluate(round, generation, first, second)
            },
            // First of a pair, or (unreachable behind the pending guard) a
            // full buffer.
            _ => vec![],
        }
    }

    /// Classify a completed pair and stage its resolution.
    ///
    /// Classification always comes first; the resulting transition is either
    /// applied immediately (match) or scheduled (duplicate, mismatch, win
    /// announcement).
    fn evaluate(
        round: &mut Round,
        generation: Generation,
        first: u32,
        second: u32,
    ) -> Vec<SessionAction> {
        let outcome = match (round.deck.card(first), round.deck.card(second)) {
            (Some(a), Some(b)) => evaluator::classify(a, b),
            _ => {
                round.buffer.clear();
                return vec![];
            },
        };

        match outcome {
            MatchOutcome::Duplicate => {
                round.pending = Some(Resolution::HideSingle { index: second });
                tracing::debug!(index = second, "duplicate selection; scheduling hide");
                vec![SessionAction::ScheduleResolution {
                    generation,
                    after: DUPLICATE_HIDE_DELAY,
                }]
            },

            MatchOutcome::Matched => {
                round.deck.set_state(first, CardState::Matched);
                round.deck.set_state(second, CardState::Matched);
                round.buffer.clear();
                round.matched_pairs += 1;
                tracing::debug!(first, second, matched = round.matched_pairs, "pair matched");

                if round.matched_pairs == round.deck.pair_count() {
                    round.timer.stop();
                    round.pending = Some(Resolution::AnnounceWin);
                    vec![SessionAction::ScheduleResolution {
                        generation,
                        after: WIN_ANNOUNCE_DELAY,
                    }]
                } else {
                    vec![]
                }
            },

            MatchOutcome::Mismatched => {
                round.locked = true;
                round.pending = Some(Resolution::HideBoth { first, second });
                tracing::debug!(first, second, "mismatch; board locked");
                vec![SessionAction::ScheduleResolution {
                    generation,
                    after: MISMATCH_HIDE_DELAY,
                }]
            },
        }
    }

    /// Handle an elapsed countdown tick.
    fn handle_tick(&mut self, generation: Generation) -> Vec<SessionAction> {
        if generation != self.generation {
            tracing::trace!(generation, current = self.generation, "stale tick; ignored");
            return vec![];
        }
        let Some(round) = self.round.as_mut() else {
            return vec![];
        };
        if round.outcome != Outcome::InProgress {
            return vec![];
        }

        match round.timer.tick() {
            TimerTick::Ignored => vec![],
            TimerTick::Running { remaining } => vec![
                SessionAction::TimeChanged { remaining },
                SessionAction::ScheduleTick { generation, after: TICK_INTERVAL },
            ],
            TimerTick::Expired => {
                round.outcome = Outcome::Lost;
                // The board freezes as displayed; any in-flight resolution is
                // dropped rather than mutating a finished round.
                round.pending = None;
                round.buffer.clear();
                round.locked = false;
                tracing::info!("countdown expired; round lost");
                vec![
                    SessionAction::TimeChanged { remaining: 0 },
                    SessionAction::OutcomeReached { outcome: Outcome::Lost },
                ]
            },
        }
    }

    /// Handle an elapsed resolution delay.
    fn handle_resolution(&mut self, generation: Generation) -> Vec<SessionAction> {
        if generation != self.generation {
            tracing::trace!(generation, current = self.generation, "stale resolution; ignored");
            return vec![];
        }
        let Some(round) = self.round.as_mut() else {
            return vec![];
        };
        if round.outcome != Outcome::InProgress {
            return vec![];
        }
        let Some(resolution) = round.pending.take() else {
            return vec![];
        };

        match resolution {
            Resolution::HideSingle { index } => {
                round.deck.set_state(index, CardState::Hidden);
                round.buffer.clear();
                tracing::trace!(index, "duplicate selection hidden");
                vec![]
            },

            Resolution::HideBoth { first, second } => {
                round.deck.set_state(first, CardState::Hidden);
                round.deck.set_state(second, CardState::Hidden);
                round.buffer.clear();
                round.locked = false;
                tracing::trace!(first, second, "mismatched pair hidden; board unlocked");
                vec![]
            },

            Resolution::AnnounceWin => {
                round.outcome = Outcome::Won;
                round.timer.stop();
                tracing::info!(pairs = round.matched_pairs, "all pairs matched; round won");
                vec![SessionAction::OutcomeReached { outcome: Outcome::Won }]
            },
        }
    }

    /// Session-level display state, when a round has been dealt.
    pub fn view(&self) -> Option<SessionView> {
        self.round.as_ref().map(|round| SessionView {
            mode: round.mode,
            time_remaining: round.timer.remaining(),
            outcome: round.outcome,
            matched_pairs: round.matched_pairs,
            pair_count: round.deck.pair_count(),
            locked: round.locked,
        })
    }

    /// Per-card display state in deal order. Hidden cards do not expose
    /// their token.
    pub fn cards(&self) -> Vec<CardView> {
        self.round.as_ref().map_or_else(Vec::new, |round| {
            round
                .deck
                .cards()
                .iter()
                .map(|card| CardView {
                    index: card.index(),
                    state: card.state(),
                    token: (card.state() != CardState::Hidden).then(|| card.token().clone()),
                })
                .collect()
        })
    }

    /// Indices of the currently revealed, unresolved selections, in
    /// selection order. Renderers may use this to highlight the active pick.
    pub fn selected(&self) -> &[u32] {
        self.round.as_ref().map_or(&[], |round| round.buffer.indices())
    }

    /// Outcome of the current round, if one was dealt.
    pub fn outcome(&self) -> Option<Outcome> {
        self.round.as_ref().map(|round| round.outcome)
    }

    /// Whether the mismatch lock is currently rejecting reveals.
    pub fn is_locked(&self) -> bool {
        self.round.as_ref().is_some_and(|round| round.locked)
    }

    /// Pairs resolved so far in the current round.
    pub fn matched_pairs(&self) -> usize {
        self.round.as_ref().map_or(0, |round| round.matched_pairs)
    }

    /// Total pairs in the current round's deck.
    pub fn pair_count(&self) -> usize {
        self.round.as_ref().map_or(0, |round| round.deck.pair_count())
    }

    /// Seconds left on the clock.
    pub fn time_remaining(&self) -> u32 {
        self.round.as_ref().map_or(0, |round| round.timer.remaining())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn tokens(faces: &[&str]) -> Vec<Token> {
        faces.iter().copied().map(Token::from).collect()
    }

    /// Ten cards, pairs at (0,2) (1,5) (3,6) (4,7) (8,9).
    fn easy_tokens() -> Vec<Token> {
        tokens(&["A", "B", "A", "C", "D", "B", "C", "D", "E", "E"])
    }

    fn started(faces: &[&str]) -> GameSession {
        let mut session = GameSession::new();
        session.start_new_game(tokens(faces), Mode::Easy).unwrap();
        session
    }

    fn reveal(session: &mut GameSession, index: u32) -> Vec<SessionAction> {
        session.handle(SessionEvent::Reveal { index })
    }

    fn resolve(session: &mut GameSession) -> Vec<SessionAction> {
        let generation = session.generation();
        session.handle(SessionEvent::ResolutionElapsed { generation })
    }

    fn tick(session: &mut GameSession) -> Vec<SessionAction> {
        let generation = session.generation();
        session.handle(SessionEvent::TickElapsed { generation })
    }

    fn card_state(session: &GameSession, index: u32) -> CardState {
        session.cards()[index as usize].state
    }

    #[test]
    fn start_emits_budget_and_first_tick() {
        let mut session = GameSession::new();
        let actions = session.start_new_game(easy_tokens(), Mode::Easy).unwrap();
        assert_eq!(actions[0], SessionAction::TimeChanged { remaining: 30 });
        assert_eq!(
            actions[1],
            SessionAction::ScheduleTick { generation: 1, after: TICK_INTERVAL }
        );
        assert_eq!(session.time_remaining(), 30);
        assert_eq!(session.pair_count(), 5);
    }

    #[test]
    fn malformed_deck_keeps_prior_round() {
        let mut session = started(&["a", "a", "b", "b"]);
        let _ = reveal(&mut session, 0);
        let generation = session.generation();

        let result = session.start_new_game(tokens(&["x", "x", "y"]), Mode::Easy);
        assert_eq!(result, Err(DeckError::OddLength(3)));

        // Previous round untouched, generation not bumped.
        assert_eq!(session.generation(), generation);
        assert_eq!(card_state(&session, 0), CardState::Revealed);
    }

    #[test]
    fn reveal_before_any_round_is_ignored() {
        let mut session = GameSession::new();
        assert!(reveal(&mut session, 0).is_empty());
        assert!(session.view().is_none());
    }

    #[test]
    fn reveal_flips_and_buffers() {
        let mut session = started(&["a", "b", "a", "b"]);
        assert!(reveal(&mut session, 1).is_empty());
        assert_eq!(card_state(&session, 1), CardState::Revealed);
    }

    #[test]
    fn reveal_on_visible_card_is_ignored() {
        let mut session = started(&["a", "b", "a", "b"]);
        let _ = reveal(&mut session, 1);
        // Second reveal of the same card is rejected, so no pair forms.
        assert!(reveal(&mut session, 1).is_empty());
        assert_eq!(card_state(&session, 1), CardState::Revealed);
        assert_eq!(session.matched_pairs(), 0);
    }

    #[test]
    fn reveal_out_of_range_is_ignored() {
        let mut session = started(&["a", "b", "a", "b"]);
        assert!(reveal(&mut session, 99).is_empty());
    }

    #[test]
    fn match_is_atomic_and_counts() {
        let mut session = started(&["a", "b", "a", "b"]);
        let _ = reveal(&mut session, 0);
        let actions = reveal(&mut session, 2);

        // Non-final match: both cards flip to Matched in the same step, no
        // delayed transition, no lock.
        assert!(actions.is_empty());
        assert_eq!(card_state(&session, 0), CardState::Matched);
        assert_eq!(card_state(&session, 2), CardState::Matched);
        assert_eq!(session.matched_pairs(), 1);
        assert!(!session.is_locked());
    }

    #[test]
    fn matched_cards_are_inert() {
        let mut session = started(&["a", "b", "a", "b"]);
        let _ = reveal(&mut session, 0);
        let _ = reveal(&mut session, 2);
        assert!(reveal(&mut session, 0).is_empty());
        assert_eq!(card_state(&session, 0), CardState::Matched);
    }

    #[test]
    fn mismatch_locks_until_resolution() {
        let mut session = started(&["a", "b", "a", "b"]);
        let _ = reveal(&mut session, 0);
        let actions = reveal(&mut session, 1);

        assert_eq!(
            actions,
            vec![SessionAction::ScheduleResolution {
                generation: 1,
                after: MISMATCH_HIDE_DELAY
            }]
        );
        assert!(session.is_locked());

        // No reveal is accepted while locked.
        assert!(reveal(&mut session, 2).is_empty());
        assert_eq!(card_state(&session, 2), CardState::Hidden);

        let _ = resolve(&mut session);
        assert!(!session.is_locked());
        assert_eq!(card_state(&session, 0), CardState::Hidden);
        assert_eq!(card_state(&session, 1), CardState::Hidden);

        // The board accepts reveals again.
        assert!(reveal(&mut session, 2).is_empty());
        assert_eq!(card_state(&session, 2), CardState::Revealed);
    }

    #[test]
    fn duplicate_selection_hides_after_resolution() {
        // Reveal guards keep a duplicate from forming through the public
        // API; craft the buffered state directly to exercise the defensive
        // re-check.
        let mut session = started(&["a", "b", "a", "b"]);
        let _ = reveal(&mut session, 0);

        let generation = session.generation();
        let round = session.round.as_mut().unwrap();
        let _ = round.buffer.push(0);
        let actions = GameSession::evaluate(round, generation, 0, 0);

        assert_eq!(
            actions,
            vec![SessionAction::ScheduleResolution { generation, after: DUPLICATE_HIDE_DELAY }]
        );
        // No lock, no pair counted.
        assert!(!session.is_locked());
        assert_eq!(session.matched_pairs(), 0);

        let _ = resolve(&mut session);
        assert_eq!(card_state(&session, 0), CardState::Hidden);
        assert_eq!(session.round.as_ref().unwrap().buffer.len(), 0);
    }

    #[test]
    fn win_announced_after_final_match() {
        let mut session = started(&["a", "b", "a", "b"]);
        let _ = reveal(&mut session, 0);
        let _ = reveal(&mut session, 2);
        let _ = reveal(&mut session, 1);
        let actions = reveal(&mut session, 3);

        assert_eq!(
            actions,
            vec![SessionAction::ScheduleResolution { generation: 1, after: WIN_ANNOUNCE_DELAY }]
        );
        // Timer already stopped: queued ticks must not alter the clock.
        let before = session.time_remaining();
        assert!(tick(&mut session).is_empty());
        assert_eq!(session.time_remaining(), before);
        assert_eq!(session.outcome(), Some(Outcome::InProgress));

        let actions = resolve(&mut session);
        assert_eq!(actions, vec![SessionAction::OutcomeReached { outcome: Outcome::Won }]);
        assert_eq!(session.outcome(), Some(Outcome::Won));

        // Terminal: ticks and reveals are inert.
        assert!(tick(&mut session).is_empty());
        assert!(reveal(&mut session, 0).is_empty());
        assert_eq!(session.time_remaining(), before);
    }

    #[test]
    fn lose_on_expiry_exactly_once() {
        let mut session = started(&["a", "b", "a", "b"]);
        let budget = session.time_remaining();

        let mut lost = 0;
        for _ in 0..budget + 3 {
            let actions = tick(&mut session);
            lost += actions
                .iter()
                .filter(|a| {
                    matches!(a, SessionAction::OutcomeReached { outcome: Outcome::Lost })
                })
                .count();
        }

        assert_eq!(lost, 1);
        assert_eq!(session.outcome(), Some(Outcome::Lost));
        assert_eq!(session.time_remaining(), 0);
        assert!(reveal(&mut session, 0).is_empty());
    }

    #[test]
    fn expiry_during_mismatch_drops_pending_resolution() {
        let mut session = started(&["a", "b", "a", "b"]);
        let _ = reveal(&mut session, 0);
        let _ = reveal(&mut session, 1);
        assert!(session.is_locked());

        let budget = session.time_remaining();
        for _ in 0..budget {
            let _ = tick(&mut session);
        }
        assert_eq!(session.outcome(), Some(Outcome::Lost));

        // The mismatch delay elapses after the loss: the frozen board must
        // not change.
        assert!(resolve(&mut session).is_empty());
        assert_eq!(card_state(&session, 0), CardState::Revealed);
        assert_eq!(card_state(&session, 1), CardState::Revealed);
    }

    #[test]
    fn tick_keeps_running_during_mismatch_delay() {
        let mut session = started(&["a", "b", "a", "b"]);
        let _ = reveal(&mut session, 0);
        let _ = reveal(&mut session, 1);
        assert!(session.is_locked());

        let before = session.time_remaining();
        let actions = tick(&mut session);
        assert_eq!(actions[0], SessionAction::TimeChanged { remaining: before - 1 });
        assert!(matches!(actions[1], SessionAction::ScheduleTick { .. }));
    }

    #[test]
    fn stale_generation_events_are_ignored() {
        let mut session = started(&["a", "b", "a", "b"]);
        let _ = reveal(&mut session, 0);
        let _ = reveal(&mut session, 1);
        let stale = session.generation();

        // A fresh deal while the mismatch reset is still in flight.
        session.start_new_game(tokens(&["x", "y", "x", "y"]), Mode::Easy).unwrap();

        let before = session.time_remaining();
        assert!(session.handle(SessionEvent::TickElapsed { generation: stale }).is_empty());
        assert!(
            session
                .handle(SessionEvent::ResolutionElapsed { generation: stale })
                .is_empty()
        );

        // The stale mismatch reset fired against nothing: the fresh deck is
        // untouched and still fully hidden.
        assert_eq!(session.time_remaining(), before);
        assert!(!session.is_locked());
        assert!(session.cards().iter().all(|c| c.state == CardState::Hidden));
    }

    #[test]
    fn hidden_cards_do_not_expose_tokens() {
        let mut session = started(&["a", "b", "a", "b"]);
        let _ = reveal(&mut session, 0);

        let cards = session.cards();
        assert_eq!(cards[0].token.as_ref().map(Token::as_str), Some("a"));
        assert!(cards[1].token.is_none());
        assert!(cards[2].token.is_none());
    }

    #[test]
    fn session_view_reflects_round() {
        let mut session = started(&["a", "b", "a", "b"]);
        let _ = reveal(&mut session, 0);
        let _ = reveal(&mut session, 2);

        let view = session.view().unwrap();
        assert_eq!(view.mode, Mode::Easy);
        assert_eq!(view.matched_pairs, 1);
        assert_eq!(view.pair_count, 2);
        assert_eq!(view.outcome, Outcome::InProgress);
        assert!(!view.locked);
    }

    #[test]
    fn full_easy_scenario() {
        // Deck [A,B,A,C,D,B,C,D,E,E]: budget 30s, a match, a mismatch with a
        // lock window, then play out to a win.
        let mut session = GameSession::new();
        let actions = session.start_new_game(easy_tokens(), Mode::Easy).unwrap();
        assert_eq!(actions[0], SessionAction::TimeChanged { remaining: 30 });

        let _ = reveal(&mut session, 0);
        let _ = reveal(&mut session, 2);
        assert_eq!(session.matched_pairs(), 1);

        let _ = reveal(&mut session, 1);
        let _ = reveal(&mut session, 4);
        assert!(session.is_locked());
        let _ = resolve(&mut session);
        assert!(!session.is_locked());

        for (first, second) in [(1, 5), (3, 6), (4, 7)] {
            let _ = reveal(&mut session, first);
            let _ = reveal(&mut session, second);
        }
        assert_eq!(session.matched_pairs(), 4);

        let _ = reveal(&mut session, 8);
        let _ = reveal(&mut session, 9);
        let actions = resolve(&mut session);
        assert_eq!(actions, vec![SessionAction::OutcomeReached { outcome: Outcome::Won }]);
        assert_eq!(session.matched_pairs(), 5);
    }

    proptest! {
        /// Any interleaving of reveals, ticks, and resolutions keeps the
        /// structural invariants intact.
        #[test]
        fn prop_invariants_hold(ops in prop::collection::vec((0u8..3, 0u32..12), 0..200)) {
            let mut session = started(&["a", "b", "c", "a", "b", "c"]);

            for (kind, index) in ops {
                let generation = session.generation();
                let event = match kind {
                    0 => SessionEvent::Reveal { index },
                    1 => SessionEvent::TickElapsed { generation },
                    _ => SessionEvent::ResolutionElapsed { generation },
                };
                let _ = session.handle(event);

                let round = session.round.as_ref().unwrap();
                prop_assert!(round.buffer.len() <= 2);
                prop_assert!(round.matched_pairs <= round.deck.pair_count());
                // A buffered card is revealed, never matched.
                for &i in round.buffer.indices() {
                    prop_assert_eq!(
                        round.deck.card(i).map(|c| c.state()),
                        Some(CardState::Revealed)
                    );
                }
            }
        }

        /// Terminal outcomes are stable: once lost, always lost.
        #[test]
        fn prop_lost_is_terminal(extra in 0u32..50) {
            let mut session = started(&["a", "b", "a", "b"]);
            for _ in 0..session.time_remaining() {
                let _ = tick(&mut session);
            }
            prop_assert_eq!(session.outcome(), Some(Outcome::Lost));

            for i in 0..extra {
                let _ = tick(&mut session);
                let _ = reveal(&mut session, i % 4);
            }
            prop_assert_eq!(session.outcome(), Some(Outcome::Lost));
            prop_assert_eq!(session.matched_pairs(), 0);
        }
    }
}
