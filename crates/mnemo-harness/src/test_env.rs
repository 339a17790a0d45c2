//! Environment implementation for tests.

use std::{
    sync::{Arc, Mutex, PoisonError},
    time::{Duration, Instant},
};

use mnemo_core::Environment;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic environment: a frozen clock, zero-cost sleeps, and seeded
/// randomness.
///
/// Sleeps complete immediately; tests drive delayed transitions by feeding
/// the elapsed events themselves, so there is nothing to actually wait for.
#[derive(Clone)]
pub struct TestEnv {
    origin: Instant,
    rng: Arc<Mutex<ChaCha8Rng>>,
}

impl TestEnv {
    /// Environment with seed 0.
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    /// Environment with a specific entropy seed; the same seed yields the
    /// same byte sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            origin: Instant::now(),
            rng: Arc::new(Mutex::new(ChaCha8Rng::seed_from_u64(seed))),
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for TestEnv {
    fn now(&self) -> Instant {
        self.origin
    }

    fn sleep(&self, _duration: Duration) -> impl std::future::Future<Output = ()> + Send {
        std::future::ready(())
    }

    fn random_bytes(&self, buffer: &mut [u8]) {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner).fill_bytes(buffer);
    }
}
