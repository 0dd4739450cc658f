//! Cooperative cancellation.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type AbortHook = Box<dyn FnOnce()>;

#[derive(Default)]
struct Inner {
    cancelled: Cell<bool>,
    hooks: RefCell<Vec<AbortHook>>,
}

/// Shared cancellation flag for one logical operation.
///
/// Clones observe the same flag. Work polls [`CancelToken::is_cancelled`] at
/// its own checkpoints; transports may register a hook to abort an in-flight
/// request when the token fires.
#[derive(Clone, Default)]
pub struct CancelToken {
    inner: Rc<Inner>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.get()
    }

    /// Set the flag and run pending abort hooks. Idempotent.
    pub fn cancel(&self) {
        if self.inner.cancelled.replace(true) {
            return;
        }
        let hooks = std::mem::take(&mut *self.inner.hooks.borrow_mut());
        for hook in hooks {
            hook();
        }
    }

    /// Whether `other` is a clone of this token.
    pub fn same_as(&self, other: &CancelToken) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Run `hook` on cancellation, or immediately if already cancelled.
    pub fn on_cancel(&self, hook: impl FnOnce() + 'static) {
        if self.is_cancelled() {
            hook();
        } else {
            self.inner.hooks.borrow_mut().push(Box::new(hook));
        }
    }
}

impl std::fmt::Debug for CancelToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CancelToken")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}
