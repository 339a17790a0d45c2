//! Production Environment implementation using system time and RNG.

use std::time::Duration;

use mnemo_core::Environment;

/// Production environment.
///
/// - `std::time::Instant::now()` for time
/// - `tokio::time::sleep()` for async sleeping (which also means the paused
///   tokio clock drives it deterministically under test)
/// - `getrandom` for deck-seeding entropy
#[derive(Clone, Default)]
pub struct SystemEnv;

impl SystemEnv {
    /// Create a new system environment.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Environment for SystemEnv {
    fn now(&self) -> std::time::Instant {
        std::time::Instant::now()
    }

    fn sleep(&self, duration: Duration) -> impl std::future::Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }

    fn random_bytes(&self, buffer: &mut [u8]) {
        getrandom::fill(buffer).unwrap_or_else(|e| {
            // Should never fail on supported platforms; a zeroed seed only
            // costs deck variety, so do not panic.
            tracing::error!("getrandom failed: {}", e);
            buffer.fill(0);
        });
    }
}
