//! Abortable background tasks tied to a page's lifetime.
//!
//! DESIGN
//! ======
//! Every simulated-latency task (chat reply, login redirect) is wrapped in a
//! `futures` abort handle registered here. Pages call [`TaskScope::cancel`]
//! from `on_cleanup`, so a timer that fires after the page is gone never
//! writes into disposed signals.
//!
//! Handles are registered on first poll and released when their task finishes
//! or is dropped, so the registry only holds work that is actually in flight.

#[cfg(test)]
#[path = "task_scope_test.rs"]
mod task_scope_test;

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use futures::future::{AbortHandle, Abortable, Aborted};

/// Registry slot released on drop, whether the task finished or not.
struct Entry {
    id: u64,
    scope: TaskScope,
}

impl Drop for Entry {
    fn drop(&mut self) {
        self.scope.release(self.id);
    }
}

#[derive(Default)]
struct ScopeInner {
    next_id: u64,
    handles: HashMap<u64, AbortHandle>,
    cancelled: bool,
}

/// Registry of abort handles for tasks owned by one mounted page.
///
/// Cheap to clone; all clones share the same registry.
#[derive(Clone, Default)]
pub struct TaskScope {
    inner: Arc<Mutex<ScopeInner>>,
}

impl TaskScope {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `fut` so it resolves to `Err(Aborted)` once the scope is cancelled.
    ///
    /// The handle is registered on first poll and released when the wrapped
    /// future finishes or is dropped. Wrapping after cancellation yields a
    /// future that aborts on first poll.
    pub fn wrap<F>(&self, fut: F) -> impl Future<Output = Result<F::Output, Aborted>> + use<F>
    where
        F: Future,
    {
        let scope = self.clone();
        async move {
            let (handle, registration) = AbortHandle::new_pair();
            let _entry = Entry { id: scope.register(handle), scope };
            Abortable::new(fut, registration).await
        }
    }

    /// Spawn `fut` on the browser event loop under this scope.
    ///
    /// Outside the browser there is no local executor, so the future is
    /// dropped unpolled and never registered; SSR never needs these effects.
    pub fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + 'static,
    {
        #[cfg(feature = "hydrate")]
        {
            let task = self.wrap(fut);
            leptos::task::spawn_local(async move {
                if task.await.is_err() {
                    log::debug!("scoped task aborted before completion");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            drop(fut);
        }
    }

    /// Abort every in-flight task and refuse new ones.
    pub fn cancel(&self) {
        let mut inner = self.lock();
        inner.cancelled = true;
        let pending = inner.handles.len();
        for (_, handle) in inner.handles.drain() {
            handle.abort();
        }
        if pending > 0 {
            log::debug!("task scope cancelled with {pending} pending task(s)");
        }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.lock().cancelled
    }

    /// Number of tasks registered and not yet finished.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.lock().handles.len()
    }

    fn register(&self, handle: AbortHandle) -> u64 {
        let mut inner = self.lock();
        if inner.cancelled {
            handle.abort();
        }
        let id = inner.next_id;
        inner.next_id += 1;
        inner.handles.insert(id, handle);
        id
    }

    fn release(&self, id: u64) {
        self.lock().handles.remove(&id);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ScopeInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
