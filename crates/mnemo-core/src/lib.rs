//! Sans-IO memory-matching ("concentration") game engine.
//!
//! The engine is a pure state machine: callers feed [`SessionEvent`]s into
//! [`GameSession::handle`] and execute the returned [`SessionAction`]s.
//! All timing lives outside the engine: a driver turns `Schedule*` actions
//! into one-shot sleeps that feed `TickElapsed` / `ResolutionElapsed` events
//! back in. Every scheduled action carries the generation that created it,
//! and the engine discards events whose generation is stale, so starting a
//! new game cancels pending work without cancelling tasks.
//!
//! # Components
//!
//! - [`GameSession`]: top-level orchestrator (round lifecycle, win/lose)
//! - [`Deck`]: validated card storage with the pairing invariant
//! - [`SelectionBuffer`]: the 0–2 currently revealed, unresolved cards
//! - [`evaluator`]: pair classification and resolution delays
//! - [`CountdownTimer`]: the cooperative countdown clock
//! - [`Environment`]: time/randomness seam implemented by drivers

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buffer;
mod deck;
pub mod env;
mod error;
pub mod evaluator;
mod event;
mod session;
mod timer;
mod view;

pub use buffer::{BufferPush, SelectionBuffer};
pub use deck::{Card, CardState, Deck, Mode, Token};
pub use env::Environment;
pub use error::DeckError;
pub use event::{Generation, Resolution, SessionAction, SessionEvent};
pub use session::{GameSession, Outcome};
pub use timer::{CountdownTimer, TICK_INTERVAL, TimerTick, budget_for};
pub use view::{CardView, SessionView};
