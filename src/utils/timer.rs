//! Browser clock.

use gloo_timers::future::TimeoutFuture;

use crate::core::clock::{Clock, Timer};

/// `Date.now()` clock with `setTimeout`-based sleeping.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl Clock for BrowserTimer {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}

impl Timer for BrowserTimer {
    async fn sleep(&self, ms: u32) {
        TimeoutFuture::new(ms).await;
    }
}
