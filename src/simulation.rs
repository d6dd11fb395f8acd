//! Mounted views and simulated fetches
//!
//! Every page visit to an interactive page mounts a fresh view state under a
//! random id. Simulated fetches are tokio tasks bound to that mounted view:
//! they hold only a weak handle, and unmounting (or idle eviction) aborts
//! them, so a completion can never land on a view that is gone.

use std::sync::{Arc, Weak};
use std::time::Duration;

use moka::future::Cache;
use moka::notification::RemovalCause;
use tokio::sync::{Mutex, MutexGuard};
use tokio::task::JoinHandle;

// ============================================================================
// Pending fetch
// ============================================================================

/// Handle to an in-flight simulated fetch. Dropping it cancels the fetch.
#[derive(Debug)]
pub struct PendingFetch {
    handle: JoinHandle<()>,
}

impl PendingFetch {
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for PendingFetch {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

// ============================================================================
// Mounted view
// ============================================================================

#[derive(Debug)]
pub struct MountedView<V> {
    id: String,
    state: Mutex<V>,
    pending: Mutex<Option<PendingFetch>>,
}

impl<V> MountedView<V> {
    fn new(id: String, state: V) -> Self {
        Self {
            id,
            state: Mutex::new(state),
            pending: Mutex::new(None),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub async fn lock(&self) -> MutexGuard<'_, V> {
        self.state.lock().await
    }

    /// Abort the in-flight fetch, if any.
    pub async fn cancel(&self) {
        if let Some(pending) = self.pending.lock().await.take() {
            if !pending.is_finished() {
                tracing::debug!(view = %self.id, "cancelling pending fetch");
            }
        }
    }
}

/// Run `complete` against the view's state after `delay`.
///
/// Replaces (and so cancels) any fetch already pending on this view. The
/// task skips `complete` if the view was dropped in the meantime.
pub async fn schedule<V, F>(view: &Arc<MountedView<V>>, delay: Duration, complete: F)
where
    V: Send + 'static,
    F: FnOnce(&mut V) + Send + 'static,
{
    let weak: Weak<MountedView<V>> = Arc::downgrade(view);
    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let Some(view) = weak.upgrade() else {
            return;
        };
        let mut state = view.state.lock().await;
        complete(&mut state);
        tracing::debug!(view = %view.id, "simulated fetch resolved");
    });
    *view.pending.lock().await = Some(PendingFetch { handle });
}

// ============================================================================
// View store
// ============================================================================

/// Mounted views of one page kind, keyed by view id.
///
/// Views idle longer than the configured time are evicted; eviction drops
/// the view and with it any pending fetch.
pub struct ViewStore<V> {
    views: Cache<String, Arc<MountedView<V>>>,
}

impl<V> Clone for ViewStore<V> {
    fn clone(&self) -> Self {
        Self {
            views: self.views.clone(),
        }
    }
}

/// Longest idle time a view store accepts; moka rejects anything past
/// 1000 years.
pub const MAX_VIEW_IDLE: Duration = Duration::from_secs(365 * 24 * 60 * 60);

impl<V: Send + 'static> ViewStore<V> {
    /// `idle` is capped at [`MAX_VIEW_IDLE`].
    pub fn new(page: &'static str, max_capacity: u64, idle: Duration) -> Self {
        let views = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_idle(idle.min(MAX_VIEW_IDLE))
            .eviction_listener(move |id: Arc<String>, _view, cause| {
                if cause != RemovalCause::Explicit {
                    tracing::debug!(page, view = %id, ?cause, "view evicted");
                }
            })
            .build();
        Self { views }
    }

    /// Mount a fresh state and return it with its new id.
    pub async fn mount(&self, state: V) -> Arc<MountedView<V>> {
        let id = format!("{:016x}", rand::random::<u64>());
        let view = Arc::new(MountedView::new(id.clone(), state));
        self.views.insert(id, view.clone()).await;
        view
    }

    pub async fn get(&self, id: &str) -> Option<Arc<MountedView<V>>> {
        self.views.get(id).await
    }

    /// Remove the view and cancel its pending fetch. Returns `false` for an
    /// unknown or already evicted id.
    pub async fn unmount(&self, id: &str) -> bool {
        match self.views.remove(id).await {
            Some(view) => {
                view.cancel().await;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ViewStore<Vec<&'static str>> {
        ViewStore::new("test", 100, Duration::from_secs(60))
    }

    #[tokio::test]
    async fn test_unbounded_idle_is_capped() {
        let store: ViewStore<Vec<&'static str>> = ViewStore::new("test", 100, Duration::MAX);
        let view = store.mount(Vec::new()).await;
        assert!(store.get(view.id()).await.is_some());
    }

    #[tokio::test]
    async fn test_fetch_resolves_after_delay() {
        let store = store();
        let view = store.mount(Vec::new()).await;
        schedule(&view, Duration::from_millis(20), |log| log.push("resolved")).await;

        assert!(view.lock().await.is_empty());
        tokio::time::sleep(Duration::from_millis(120)).await;
        assert_eq!(*view.lock().await, vec!["resolved"]);
    }

    #[tokio::test]
    async fn test_unmount_cancels_pending_fetch() {
        let store = store();
        let view = store.mount(Vec::new()).await;
        let id = view.id().to_string();
        schedule(&view, Duration::from_millis(30), |log| log.push("resolved")).await;

        assert!(store.unmount(&id).await);
        tokio::time::sleep(Duration::from_millis(120)).await;

        assert!(view.lock().await.is_empty());
        assert!(store.get(&id).await.is_none());
        assert!(!store.unmount(&id).await);
    }

    #[tokio::test]
    async fn test_dropped_view_never_resolves() {
        use std::sync::atomic::{AtomicBool, Ordering};

        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();
        let view = Arc::new(MountedView::new("detached".to_string(), ()));
        schedule(&view, Duration::from_millis(20), move |_| flag.store(true, Ordering::SeqCst)).await;

        drop(view);
        tokio::time::sleep(Duration::from_millis(80)).await;
        assert!(!fired.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_reschedule_replaces_pending() {
        let store = store();
        let view = store.mount(Vec::new()).await;
        schedule(&view, Duration::from_millis(40), |log| log.push("first")).await;
        schedule(&view, Duration::from_millis(10), |log| log.push("second")).await;

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(*view.lock().await, vec!["second"]);
    }

    #[tokio::test]
    async fn test_mount_ids_are_distinct() {
        let store = store();
        let a = store.mount(Vec::new()).await;
        let b = store.mount(Vec::new()).await;
        assert_ne!(a.id(), b.id());
        assert_eq!(a.id().len(), 16);
        assert!(store.get(a.id()).await.is_some());
    }
}
