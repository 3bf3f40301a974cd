//! Browser timer for simulated request latency.

use std::time::Duration;

use community::Delay;
use futures::future::LocalBoxFuture;

/// Sleeps on the JS event loop via `gloo-timers`. Outside the browser it
/// resolves immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimerDelay;

impl Delay for TimerDelay {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        #[cfg(feature = "hydrate")]
        {
            Box::pin(gloo_timers::future::sleep(duration))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = duration;
            Box::pin(futures::future::ready(()))
        }
    }
}
