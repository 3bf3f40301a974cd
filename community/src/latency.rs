//! Simulated request latency.
//!
//! Every "network" operation in the app is a fixed delay followed by a local
//! state change. The delay is injected so native tests can resolve instantly.

#[cfg(test)]
#[path = "latency_test.rs"]
mod latency_test;

use std::time::Duration;

use futures::future::{self, LocalBoxFuture};

pub const LOGIN_LATENCY: Duration = Duration::from_millis(1000);
pub const REGISTER_LATENCY: Duration = Duration::from_millis(1000);
pub const PROFILE_LATENCY: Duration = Duration::from_millis(1000);
pub const COMMENT_LATENCY: Duration = Duration::from_millis(1000);
pub const DONATION_LATENCY: Duration = Duration::from_millis(1500);
pub const SUPPORT_REQUEST_LATENCY: Duration = Duration::from_millis(1500);
pub const FORUM_TOPIC_LATENCY: Duration = Duration::from_millis(1500);

/// Timer effect. Browser builds sleep on the JS event loop.
pub trait Delay {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

/// Resolves immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay;

impl Delay for NoDelay {
    fn sleep(&self, _duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(future::ready(()))
    }
}

/// Wait out `latency`, then run `op`.
pub async fn simulate<D, T, F>(delay: &D, latency: Duration, op: F) -> T
where
    D: Delay + ?Sized,
    F: FnOnce() -> T,
{
    delay.sleep(latency).await;
    op()
}
