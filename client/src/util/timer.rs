//! Delay helper for simulated service latency.
//!
//! In the browser (`hydrate`) this awaits a real `setTimeout`-backed timer.
//! Under SSR and in native tests it resolves immediately so stub clients stay
//! deterministic.

#![allow(clippy::unused_async)]

use std::time::Duration;

/// Suspend the current task for `duration`.
pub async fn sleep(duration: Duration) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(duration).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = duration;
    }
}
