//! Timer used to simulate backend latency.

use std::time::Duration;

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);

    gloo_timers::future::TimeoutFuture::new(millis).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}
