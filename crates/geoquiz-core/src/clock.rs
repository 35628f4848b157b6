//! Clock abstraction for determinism.
//!
//! Camera animations and the surface settle delay are modelled as waits on
//! this clock, so tests can run whole reveal sequences without real time
//! passing.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Abstraction over system time and waiting.
#[async_trait]
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;

    /// Suspends the caller until `duration` has elapsed.
    async fn sleep(&self, duration: Duration);
}

/// Production clock that delegates to the system clock and the tokio timer.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
