use std::collections::HashSet;

use tokio::sync::Mutex;

/// In-memory set of giveaways whose outward message is stale.
///
/// Ledger mutations mark their giveaway dirty instead of editing the Discord
/// message directly; a fixed-interval drain then performs one outward update per
/// dirty giveaway. Marking the same giveaway any number of times within one
/// interval coalesces into a single update: staleness is bounded by one interval
/// and no mutation triggers its own network call.
#[derive(Default)]
pub struct DirtySet {
    ids: Mutex<HashSet<i32>>,
}

impl DirtySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flags a giveaway for the next drain. Idempotent within an interval.
    pub async fn mark(&self, id: i32) {
        self.ids.lock().await.insert(id);
    }

    /// Drops a giveaway's dirty flag, used when it is cancelled or deleted.
    pub async fn unmark(&self, id: i32) {
        self.ids.lock().await.remove(&id);
    }

    /// Takes the whole dirty set, leaving it empty.
    ///
    /// Marks arriving after this call land in the fresh set and are picked up by
    /// the following drain.
    pub async fn drain(&self) -> Vec<i32> {
        let mut ids = self.ids.lock().await;
        ids.drain().collect()
    }

    pub async fn contains(&self, id: i32) -> bool {
        self.ids.lock().await.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_repeated_marks_coalesce() {
        let set = DirtySet::new();

        for _ in 0..50 {
            set.mark(7).await;
        }
        set.mark(8).await;

        let mut drained = set.drain().await;
        drained.sort_unstable();
        assert_eq!(drained, vec![7, 8]);

        // Drained flags are gone until marked again.
        assert!(set.drain().await.is_empty());
    }

    #[tokio::test]
    async fn test_unmark_clears_flag() {
        let set = DirtySet::new();
        set.mark(1).await;
        set.unmark(1).await;

        assert!(!set.contains(1).await);
        assert!(set.drain().await.is_empty());
    }
}
