//! Environment abstraction for deterministic drivers.
//!
//! The engine state machine never reads the clock; delays arrive as already
//! elapsed events. Drivers use an [`Environment`] to execute `Schedule*`
//! actions against real or virtual time, and deck sources use its entropy
//! for seeding. Keeping the seam here means the whole stack runs headless
//! and repeatable under test.
//!
//! # Invariants
//!
//! - Monotonicity: `now()` never goes backwards within one execution context
//! - Determinism: test implementations produce the same sleep/entropy
//!   sequence for the same seed
//! - Isolation: implementations must not share global state

use std::time::{Duration, Instant};

/// Abstract environment providing time, sleeping, and randomness.
pub trait Environment: Clone + Send + Sync + 'static {
    /// Returns the current time. Must never decrease between calls.
    fn now(&self) -> Instant;

    /// Sleeps for the specified duration.
    ///
    /// The only async method in the trait; only driver code awaits it.
    fn sleep(&self, duration: Duration) -> impl std::future::Future<Output = ()> + Send;

    /// Fills the provided buffer with random bytes.
    fn random_bytes(&self, buffer: &mut [u8]);

    /// Generates a random `u64`, convenient for seeding deck shufflers.
    fn random_u64(&self) -> u64 {
        let mut bytes = [0u8; 8];
        self.random_bytes(&mut bytes);
        u64::from_be_bytes(bytes)
    }
}
