//! Driver: executes engine actions against real (or paused) time.
//!
//! The driver owns the session and the sending half of one event channel.
//! `Schedule*` actions become spawned one-shot sleeps that feed the elapsed
//! event back through the channel; the caller owns the receiving half and
//! pumps delivered events back in with [`GameDriver::apply`]. Stale sleeps
//! complete harmlessly; the engine discards events whose generation has
//! moved on, so nothing is ever aborted.

use std::time::Duration;

use mnemo_core::{
    DeckError, Environment, GameSession, Mode, Outcome, SessionAction, SessionEvent,
};
use mnemo_source::{DeckSource, SourceError};
use tokio::sync::mpsc;

/// User-facing notifications distilled from session actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverNotice {
    /// Remaining time changed.
    TimeChanged {
        /// Seconds left on the clock.
        remaining: u32,
    },
    /// The round ended.
    OutcomeReached {
        /// The terminal outcome.
        outcome: Outcome,
    },
}

/// Why a new game could not start.
///
/// Either way the session keeps its prior state; the player may simply try
/// again.
#[derive(Debug, thiserror::Error)]
pub enum StartError {
    /// The deck source failed.
    #[error("deck source failed: {0}")]
    Source(#[from] SourceError),

    /// The source produced a deck the engine refuses to play.
    #[error("deck rejected: {0}")]
    Deck(#[from] DeckError),
}

/// Drives a [`GameSession`] with a [`DeckSource`] and an [`Environment`].
pub struct GameDriver<E, S> {
    session: GameSession,
    env: E,
    source: S,
    events_tx: mpsc::UnboundedSender<SessionEvent>,
}

impl<E, S> GameDriver<E, S>
where
    E: Environment,
    S: DeckSource,
{
    /// Create a driver and the event stream the caller must pump.
    ///
    /// Every event received from the stream belongs in
    /// [`GameDriver::apply`]; dropping the stream stops the game clock.
    pub fn new(env: E, source: S) -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let driver = Self { session: GameSession::new(), env, source, events_tx };
        (driver, events_rx)
    }

    /// Fetch a deck and deal a new round.
    ///
    /// # Errors
    ///
    /// Returns [`StartError`] when the fetch or the deal fails; the previous
    /// round (if any) survives intact.
    pub async fn start_new_game(&mut self, mode: Mode) -> Result<Vec<DriverNotice>, StartError> {
        let response = self.source.fetch(mode).await?;
        let actions = self.session.start_new_game(response.deck, response.mode)?;
        Ok(self.execute(actions))
    }

    /// Forward a player reveal.
    pub fn reveal(&mut self, index: u32) -> Vec<DriverNotice> {
        let actions = self.session.handle(SessionEvent::Reveal { index });
        self.execute(actions)
    }

    /// Apply an event delivered by the event stream.
    pub fn apply(&mut self, event: SessionEvent) -> Vec<DriverNotice> {
        let actions = self.session.handle(event);
        self.execute(actions)
    }

    /// The underlying session, for rendering.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Execute engine actions: spawn scheduled events, distill the rest into
    /// notices.
    fn execute(&mut self, actions: Vec<SessionAction>) -> Vec<DriverNotice> {
        let mut notices = Vec::new();
        for action in actions {
            match action {
                SessionAction::ScheduleTick { generation, after } => {
                    self.schedule(SessionEvent::TickElapsed { generation }, after);
                },
                SessionAction::ScheduleResolution { generation, after } => {
                    self.schedule(SessionEvent::ResolutionElapsed { generation }, after);
                },
                SessionAction::TimeChanged { remaining } => {
                    notices.push(DriverNotice::TimeChanged { remaining });
                },
                SessionAction::OutcomeReached { outcome } => {
                    notices.push(DriverNotice::OutcomeReached { outcome });
                },
            }
        }
        notices
    }

    /// Deliver `event` after `after` has elapsed.
    fn schedule(&self, event: SessionEvent, after: Duration) {
        let env = self.env.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            env.sleep(after).await;
            // A dropped receiver means the caller is gone; nothing to do.
            let _ = tx.send(event);
        });
    }
}
