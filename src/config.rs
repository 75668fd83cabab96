//! Runtime configuration for the giveaway core.
//!
//! Configuration is supplied through in-process setters on [`GiveawayManager`],
//! not environment variables or files; the consuming bot owns whatever outer
//! config surface it wants.
//!
//! [`GiveawayManager`]: crate::manager::GiveawayManager

use std::time::Duration;

/// How long terminated and cancelled giveaways stay in the archive before the
/// purge sweep deletes them.
pub const DEFAULT_RETENTION_DAYS: i64 = 2;

/// Interval of the debounced outward-sync drain.
pub const DEFAULT_SYNC_INTERVAL: Duration = Duration::from_secs(4);

#[derive(Clone, Debug)]
pub struct GiveawayConfig {
    /// Archive retention window in days.
    pub retention_days: i64,
    /// Period between dirty-set drains.
    pub sync_interval: Duration,
}

impl Default for GiveawayConfig {
    fn default() -> Self {
        Self {
            retention_days: DEFAULT_RETENTION_DAYS,
            sync_interval: DEFAULT_SYNC_INTERVAL,
        }
    }
}

impl GiveawayConfig {
    /// Retention window as a chrono duration, for computing archive deadlines.
    pub fn retention(&self) -> chrono::Duration {
        chrono::Duration::days(self.retention_days.max(0))
    }
}
