//! Deterministic failure injection.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use mnemo_core::Mode;

use crate::{DeckResponse, DeckSource, SourceError};

/// Wraps a source and fails every `period`-th fetch.
///
/// With `period = 1` every fetch fails; with `period = 0` none do. Failures
/// are [`SourceError::Unavailable`], the same shape a dead upstream would
/// produce.
#[derive(Debug)]
pub struct FlakySource<S> {
    inner: S,
    period: u64,
    calls: AtomicU64,
}

impl<S> FlakySource<S> {
    /// Wrap `inner`, failing every `period`-th fetch.
    pub fn new(inner: S, period: u64) -> Self {
        Self { inner, period, calls: AtomicU64::new(0) }
    }

    /// Total fetch attempts so far, including injected failures.
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl<S: DeckSource> DeckSource for FlakySource<S> {
    async fn fetch(&self, mode: Mode) -> Result<DeckResponse, SourceError> {
        let call = self.calls.fetch_add(1, Ordering::Relaxed) + 1;
        if self.period > 0 && call % self.period == 0 {
            tracing::debug!(call, "injecting deck source failure");
            return Err(SourceError::Unavailable {
                reason: format!("injected failure on fetch {call}"),
            });
        }
        self.inner.fetch(mode).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ShuffledSource;

    #[tokio::test]
    async fn fails_on_schedule() {
        let source = FlakySource::new(ShuffledSource::seeded(1), 2);

        assert!(source.fetch(Mode::Easy).await.is_ok());
        assert!(matches!(
            source.fetch(Mode::Easy).await,
            Err(SourceError::Unavailable { .. })
        ));
        assert!(source.fetch(Mode::Easy).await.is_ok());
        assert_eq!(source.calls(), 3);
    }

    #[tokio::test]
    async fn period_zero_never_fails() {
        let source = FlakySource::new(ShuffledSource::seeded(1), 0);
        for _ in 0..5 {
            assert!(source.fetch(Mode::Easy).await.is_ok());
        }
    }
}
