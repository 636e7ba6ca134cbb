//! Simulated Latency

use std::time::Duration;

use tokio::time::sleep;

/// Fixed artificial delay applied before catalog and cart operations, so the
/// demo storefront behaves like it is talking to a remote backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulatedLatency(Duration);

impl SimulatedLatency {
    /// No delay.
    pub const NONE: Self = Self(Duration::ZERO);

    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self(delay)
    }

    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    #[must_use]
    pub const fn delay(self) -> Duration {
        self.0
    }

    /// Sleep for the configured delay, returning immediately when it is zero.
    pub async fn pause(self) {
        if !self.0.is_zero() {
            sleep(self.0).await;
        }
    }
}
