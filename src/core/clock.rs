//! Time capabilities.
//!
//! Core logic never reads the browser clock directly so it runs unchanged
//! under a manual clock in tests.

/// Wall-clock source in milliseconds.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Clock that can also suspend the current task.
#[allow(async_fn_in_trait)]
pub trait Timer: Clock {
    async fn sleep(&self, ms: u32);
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> f64 {
        (**self).now_ms()
    }
}
