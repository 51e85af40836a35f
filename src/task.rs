//! Cancellable handle for a scheduled repeating task.
//! Wraps exactly one backend-native task reference, which arrives only after
//! the registration call returns; cancellation must already work before then.

use crate::host::NativeTask;
use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Opaque cancellation token returned by a scheduling call.
///
/// Clones share the same underlying task; the callback receives a reference
/// to the same handle the caller holds, so either side can cancel.
///
/// Cancellation is best-effort and idempotent. Calling [`cancel`] before the
/// backend has produced its native reference is safe: the request is
/// remembered and forwarded the moment the reference is bound, so no firings
/// survive a cancel that raced ahead of registration completing.
///
/// [`cancel`]: TaskHandle::cancel
#[derive(Clone)]
pub struct TaskHandle {
    inner: Arc<HandleInner>,
}

struct HandleInner {
    /// Single-assignment slot for the backend-native reference. Written once
    /// by the registering code path, read by any thread that cancels.
    native: OnceCell<Arc<dyn NativeTask>>,
    /// Set when any caller requests cancellation, possibly before `native`
    /// is populated.
    cancel_requested: AtomicBool,
    /// Ensures the native cancel is forwarded at most once, whichever of the
    /// bind/cancel paths gets there first.
    cancel_forwarded: AtomicBool,
}

impl TaskHandle {
    /// A handle whose native reference has not been produced yet.
    pub(crate) fn unbound() -> Self {
        Self {
            inner: Arc::new(HandleInner {
                native: OnceCell::new(),
                cancel_requested: AtomicBool::new(false),
                cancel_forwarded: AtomicBool::new(false),
            }),
        }
    }

    /// Populate the native-reference slot. Called exactly once, by the
    /// adapter that performed the registration, right after the host call
    /// returns. If a cancel already raced ahead, it is forwarded now.
    pub(crate) fn bind(&self, native: Arc<dyn NativeTask>) {
        if self.inner.native.set(native).is_err() {
            debug_assert!(false, "native task reference bound twice");
            return;
        }
        // The store above and the flag store in cancel() are both SeqCst, so
        // at least one of the two racing sides observes the other.
        if self.inner.cancel_requested.load(Ordering::SeqCst) {
            self.forward_cancel();
        }
    }

    /// Request that no future firings occur.
    ///
    /// Idempotent, never blocks, never errors. Before the native reference
    /// is bound this records the request and returns; [`bind`](Self::bind)
    /// completes the cancellation. No synchronous guarantee is given that an
    /// in-flight firing is interrupted.
    pub fn cancel(&self) {
        self.inner.cancel_requested.store(true, Ordering::SeqCst);
        if self.inner.native.get().is_some() {
            self.forward_cancel();
        }
    }

    /// Whether cancellation has been requested on this handle.
    pub fn is_cancel_requested(&self) -> bool {
        self.inner.cancel_requested.load(Ordering::SeqCst)
    }

    /// Whether the backend-native reference has been bound yet. The window
    /// where this is `false` is the gap between the registration call
    /// returning inside the adapter and the adapter writing the slot.
    pub fn is_bound(&self) -> bool {
        self.inner.native.get().is_some()
    }

    fn forward_cancel(&self) {
        if self.inner.cancel_forwarded.swap(true, Ordering::SeqCst) {
            return;
        }
        if let Some(native) = self.inner.native.get() {
            tracing::debug!("forwarding cancellation to native task");
            native.cancel();
        }
    }
}

impl fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskHandle")
            .field("bound", &self.is_bound())
            .field("cancel_requested", &self.is_cancel_requested())
            .finish()
    }
}
