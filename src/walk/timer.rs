// src/walk/timer.rs

//! Clock and suspension abstraction.
//!
//! The walker reads "now" and suspends only through a [`Timer`]. Production
//! code uses [`TokioTimer`]; tests can use it under a paused Tokio clock, or
//! provide their own implementation with a fully manual clock.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use tokio::time::Instant;

/// Source of the current instant plus the walker's only suspension point.
pub trait Timer: Send {
    fn now(&self) -> Instant;

    /// Suspend for `duration`, or just yield once when it is `None`.
    fn sleep(
        &mut self,
        duration: Option<Duration>,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + '_>>;
}

/// Timer backed by `tokio::time`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

impl Timer for TokioTimer {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(
        &mut self,
        duration: Option<Duration>,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin(async move {
            match duration {
                Some(duration) if !duration.is_zero() => tokio::time::sleep(duration).await,
                _ => tokio::task::yield_now().await,
            }
        })
    }
}

/// How long the walker suspends after postponing a visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Suspend until the earliest pending visit is due; yield without
    /// sleeping if one already is.
    NextDeadline,
    /// Suspend one fixed tick per postponement.
    Tick(Duration),
}

impl Default for Pacing {
    fn default() -> Self {
        Pacing::NextDeadline
    }
}

impl Pacing {
    /// Duration to hand to [`Timer::sleep`] after a postponement at `now`.
    pub fn suspension(&self, now: Instant, next_deadline: Instant) -> Option<Duration> {
        match self {
            Pacing::NextDeadline => {
                let wait = next_deadline.saturating_duration_since(now);
                (!wait.is_zero()).then_some(wait)
            }
            Pacing::Tick(tick) => Some(*tick),
        }
    }
}
