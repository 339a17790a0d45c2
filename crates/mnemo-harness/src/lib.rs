//! Deterministic test harness for the mnemo engine.
//!
//! Provides the pieces the integration and property tests share:
//!
//! - [`TestEnv`]: an [`mnemo_core::Environment`] with an immediate sleep and
//!   seeded randomness, for tests that never want to wait
//! - [`decks`]: fixed deck builders for scenario tests
//! - [`model`]: a reference implementation of the game rules used as the
//!   oracle in model-based tests

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod decks;
pub mod model;
mod test_env;

pub use model::{ModelGame, ObservableState, Operation, observe};
pub use test_env::TestEnv;
