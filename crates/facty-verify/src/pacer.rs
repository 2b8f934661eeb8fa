//! Pacing of successive per-claim calls.

use std::future::Future;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio::time::Instant;

/// Gate awaited before each per-claim service call.
pub trait Pacer: Send + Sync {
    fn pace(&self) -> impl Future<Output = ()> + Send;
}

/// Spaces calls at least `interval` apart. The first call passes at once.
#[derive(Debug)]
pub struct FixedInterval {
    interval: Duration,
    next_slot: Mutex<Option<Instant>>,
}

impl FixedInterval {
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_slot: Mutex::new(None),
        }
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Reserve the next slot and return when it opens.
    fn reserve(&self) -> Instant {
        let mut next_slot = self.next_slot.lock().unwrap_or_else(PoisonError::into_inner);
        let now = Instant::now();
        let slot = next_slot.map_or(now, |slot| slot.max(now));
        *next_slot = Some(slot + self.interval);
        slot
    }
}

impl Pacer for FixedInterval {
    async fn pace(&self) {
        let slot = self.reserve();
        if slot > Instant::now() {
            tokio::time::sleep_until(slot).await;
        }
    }
}

/// No spacing at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unpaced;

impl Pacer for Unpaced {
    async fn pace(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn first_call_passes_immediately() {
        let pacer = FixedInterval::new(Duration::from_millis(300));
        let start = Instant::now();
        pacer.pace().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn later_calls_wait_for_the_interval() {
        let pacer = FixedInterval::new(Duration::from_millis(300));
        let start = Instant::now();
        pacer.pace().await;
        pacer.pace().await;
        pacer.pace().await;
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(600), "{elapsed:?}");
        assert!(elapsed < Duration::from_millis(650), "{elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn elapsed_work_counts_toward_the_interval() {
        let pacer = FixedInterval::new(Duration::from_millis(300));
        let start = Instant::now();
        pacer.pace().await;
        tokio::time::sleep(Duration::from_millis(500)).await;
        let before = start.elapsed();
        pacer.pace().await;
        assert_eq!(start.elapsed(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn unpaced_never_waits() {
        let start = Instant::now();
        for _ in 0..5 {
            Unpaced.pace().await;
        }
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
