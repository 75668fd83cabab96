use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Registry of one-shot end timers, keyed by giveaway ID.
///
/// Registering a timer for an ID that already has one replaces (aborts) the old
/// task, so re-registration on every ledger mutation is cheap and harmless. A
/// timer removes its own registry entry before it invokes the fired routine:
/// once the routine is running, a racing re-registration finds no entry and
/// cannot abort it mid-flight. The fired routine must still be idempotent, since
/// a replacement registered in that window fires on its own and re-enters it.
pub struct EndTimerRegistry {
    handles: Arc<Mutex<HashMap<i32, JoinHandle<()>>>>,
}

impl EndTimerRegistry {
    pub fn new() -> Self {
        Self {
            handles: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Registers (or replaces) the timer for a giveaway.
    ///
    /// `on_fire` runs once, at or after `end_at`. A past `end_at` fires right
    /// away.
    pub async fn schedule<F, Fut>(&self, id: i32, end_at: DateTime<Utc>, on_fire: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        let registry = Arc::clone(&self.handles);
        let handle = tokio::spawn(async move {
            let delay = (end_at - Utc::now()).to_std().unwrap_or(Duration::ZERO);
            tokio::time::sleep(delay).await;
            // Deregister before firing. If a replacement was registered while we
            // slept we were already aborted, so the entry removed here is ours.
            registry.lock().await.remove(&id);
            on_fire().await;
        });

        let mut handles = self.handles.lock().await;
        if let Some(previous) = handles.insert(id, handle) {
            previous.abort();
        }
    }

    /// Cancels a giveaway's timer, if one is registered.
    pub async fn cancel(&self, id: i32) {
        if let Some(handle) = self.handles.lock().await.remove(&id) {
            handle.abort();
        }
    }

    /// Aborts every registered timer.
    pub async fn clear(&self) {
        let mut handles = self.handles.lock().await;
        for (_, handle) in handles.drain() {
            handle.abort();
        }
    }

    /// Number of registered (not yet fired) timers.
    pub async fn len(&self) -> usize {
        self.handles.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.handles.lock().await.is_empty()
    }
}

impl Default for EndTimerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_timer_fires_after_deadline() {
        let registry = EndTimerRegistry::new();
        let fired = Arc::new(AtomicUsize::new(0));

        let counter = fired.clone();
        registry
            .schedule(1, Utc::now() + chrono::Duration::milliseconds(30), move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .await;

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        // The fired timer deregistered itself.
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn test_reschedule_replaces_previous_timer() {
        let registry = EndTimerRegistry::new();
        let fired = Arc::new(AtomicUsize::new(0));

        let first = fired.clone();
        registry
            .schedule(1, Utc::now() + chrono::Duration::milliseconds(50), move || async move {
                first.fetch_add(1, Ordering::SeqCst);
            })
            .await;

        let second = fired.clone();
        registry
            .schedule(1, Utc::now() + chrono::Duration::milliseconds(60), move || async move {
                second.fetch_add(1, Ordering::SeqCst);
            })
            .await;

        tokio::time::sleep(Duration::from_millis(200)).await;
        // The replaced timer was aborted; only one fire total.
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_cancel_prevents_firing() {
        let registry = EndTimerRegistry::new();
        let fired = Arc::new(AtomicUsize::new(0));

        let counter = fired.clone();
        registry
            .schedule(1, Utc::now() + chrono::Duration::milliseconds(50), move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .await;
        registry.cancel(1).await;

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn test_reschedule_does_not_abort_running_routine() {
        let registry = EndTimerRegistry::new();
        let fired = Arc::new(AtomicUsize::new(0));

        // A slow fired routine, standing in for a termination mid-write.
        let counter = fired.clone();
        registry
            .schedule(1, Utc::now() + chrono::Duration::milliseconds(20), move || async move {
                tokio::time::sleep(Duration::from_millis(120)).await;
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .await;

        // Re-register while that routine is running its body, as a last-moment
        // ledger mutation would.
        tokio::time::sleep(Duration::from_millis(70)).await;
        let counter = fired.clone();
        registry
            .schedule(1, Utc::now() + chrono::Duration::hours(1), move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .await;

        tokio::time::sleep(Duration::from_millis(150)).await;
        // The in-flight routine ran to completion; only the far-future
        // replacement remains registered.
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(registry.len().await, 1);
    }
}
