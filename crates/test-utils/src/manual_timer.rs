use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use graphwalk::walk::Timer;
use tokio::time::Instant;

/// A timer whose clock only moves when the walker sleeps.
///
/// Every `sleep(Some(d))` advances the clock by exactly `d` and returns
/// immediately; `sleep(None)` leaves it where it is. Walks driven by this
/// timer are fully deterministic and run instantly.
#[derive(Debug, Clone)]
pub struct ManualTimer {
    start: Instant,
    now: Instant,
    sleeps: usize,
}

impl ManualTimer {
    pub fn new() -> Self {
        let start = Instant::now();
        Self {
            start,
            now: start,
            sleeps: 0,
        }
    }

    /// Virtual time elapsed since construction.
    pub fn elapsed(&self) -> Duration {
        self.now - self.start
    }

    /// Number of times the walker suspended.
    pub fn sleeps(&self) -> usize {
        self.sleeps
    }
}

impl Default for ManualTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer for ManualTimer {
    fn now(&self) -> Instant {
        self.now
    }

    fn sleep(
        &mut self,
        duration: Option<Duration>,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        self.sleeps += 1;
        if let Some(duration) = duration {
            self.now += duration;
        }
        Box::pin(std::future::ready(()))
    }
}
