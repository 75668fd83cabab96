//! The giveaway manager: wiring, public operations and background tasks.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_cron_scheduler::JobScheduler;

use crate::bot::member::MemberDirectory;
use crate::config::GiveawayConfig;
use crate::data::giveaway::GiveawayRepository;
use crate::data::settings::GuildSettingsRepository;
use crate::error::GiveawayError;
use crate::model::event::EventSink;
use crate::model::giveaway::{Giveaway, NewGiveaway};
use crate::scheduler::end_timer::EndTimerRegistry;
use crate::scheduler::purge;
use crate::scheduler::sync::DirtySet;
use crate::service::ledger::{self, EntryOutcome};
use crate::service::lifecycle::LifecycleService;
use crate::util::bracket::parse_prize_tags;

/// Handler for suppressed best-effort failures. Default behavior is a debug log.
pub type ErrorHandler = Box<dyn Fn(&GiveawayError) + Send + Sync>;

/// Central facade over the giveaway core.
///
/// Holds the database handle (the one mandatory construction argument), the
/// observer list, the timer registry and the dirty set. All in-memory state is
/// derived: [`resume`](Self::resume) rebuilds it from storage after a restart.
///
/// Cheap to share: construct once with [`GiveawayManager::new`] and clone the
/// `Arc` into command handlers and gateway event handlers.
pub struct GiveawayManager {
    db: DatabaseConnection,
    members: RwLock<Option<Arc<dyn MemberDirectory>>>,
    sinks: RwLock<Vec<Arc<dyn EventSink>>>,
    config: RwLock<GiveawayConfig>,
    dirty: DirtySet,
    timers: EndTimerRegistry,
    error_handler: RwLock<Option<ErrorHandler>>,
    background: Mutex<BackgroundTasks>,
}

#[derive(Default)]
struct BackgroundTasks {
    sync: Option<JoinHandle<()>>,
    purge: Option<JobScheduler>,
}

impl GiveawayManager {
    /// Creates a manager over a connected database.
    ///
    /// A database handle is the only fatal requirement of this crate; everything
    /// else (member directory, sinks, config) is optional and supplied through
    /// setters before [`start_background`](Self::start_background).
    pub fn new(db: DatabaseConnection) -> Arc<Self> {
        Arc::new(Self {
            db,
            members: RwLock::new(None),
            sinks: RwLock::new(Vec::new()),
            config: RwLock::new(GiveawayConfig::default()),
            dirty: DirtySet::new(),
            timers: EndTimerRegistry::new(),
            error_handler: RwLock::new(None),
            background: Mutex::new(BackgroundTasks::default()),
        })
    }

    /// Supplies membership lookups for termination-time ledger filtering.
    /// Without a directory the filter step is skipped.
    pub async fn set_member_directory(&self, directory: Arc<dyn MemberDirectory>) {
        *self.members.write().await = Some(directory);
    }

    /// Registers an observer for lifecycle events.
    pub async fn add_sink(&self, sink: Arc<dyn EventSink>) {
        self.sinks.write().await.push(sink);
    }

    /// Routes suppressed best-effort failures somewhere other than the debug log.
    pub async fn set_error_handler(&self, handler: ErrorHandler) {
        *self.error_handler.write().await = Some(handler);
    }

    /// Archive retention window in days (default 2).
    pub async fn set_retention_days(&self, days: i64) {
        self.config.write().await.retention_days = days.max(0);
    }

    /// Debounce drain period (default 4 s). Takes effect for drains started
    /// after the call; set it before [`start_background`](Self::start_background).
    pub async fn set_sync_interval(&self, interval: Duration) {
        self.config.write().await.sync_interval = interval;
    }

    /// Starts a giveaway: validates, merges guild-default multipliers, persists
    /// the row, registers the end timer and emits `giveaway_start`.
    pub async fn start(self: &Arc<Self>, mut new: NewGiveaway) -> Result<Giveaway, GiveawayError> {
        if new.prize.trim().is_empty() {
            return Err(GiveawayError::Validation("a prize is required".to_string()));
        }
        if new.channel_id == 0 {
            return Err(GiveawayError::Validation("a channel is required".to_string()));
        }
        if new.winners == 0 {
            return Err(GiveawayError::Validation(
                "at least one winner is required".to_string(),
            ));
        }
        if new.end_at <= Utc::now() {
            return Err(GiveawayError::Validation(
                "the end date must be in the future".to_string(),
            ));
        }

        let defaults = GuildSettingsRepository::new(&self.db)
            .multipliers(new.guild_id)
            .await?;
        new.entries.extend(defaults);

        // Role gates embedded in the prize text become part of the stored gates;
        // level and entry tags stay dynamic and are re-parsed on every toggle.
        let tags = parse_prize_tags(&new.prize);
        extend_unique(&mut new.roles.required, tags.required);
        extend_unique(&mut new.roles.add, tags.add);
        extend_unique(&mut new.roles.remove, tags.remove);

        let model = GiveawayRepository::new(&self.db).create(&new).await?;
        let giveaway = Giveaway::try_from(model)?;

        self.schedule_end(giveaway.id, giveaway.end_at).await;

        for sink in self.sinks().await {
            sink.giveaway_start(&giveaway).await;
        }

        Ok(giveaway)
    }

    /// Applies the join/leave toggle for the giveaway attached to a message.
    ///
    /// The mutated ledger is persisted first; the outward message update is only
    /// marked dirty for the debounce drain, never performed inline.
    pub async fn toggle_entry(
        self: &Arc<Self>,
        message_id: u64,
        user_id: &str,
        member_roles: &[String],
        level: Option<u32>,
    ) -> Result<EntryOutcome, GiveawayError> {
        let repo = GiveawayRepository::new(&self.db);

        let Some(model) = repo.get_by_message(message_id).await? else {
            return Err(GiveawayError::NotFound(
                "no giveaway is attached to this message".to_string(),
            ));
        };

        let mut giveaway = Giveaway::try_from(model)?;
        let outcome = ledger::toggle_entry(&mut giveaway, user_id, member_roles, level)?;
        repo.update_users(giveaway.id, giveaway.users.clone()).await?;

        self.dirty.mark(giveaway.id).await;
        self.schedule_end(giveaway.id, giveaway.end_at).await;

        for sink in self.sinks().await {
            match &outcome {
                EntryOutcome::Joined(user) => sink.giveaway_user_add(&giveaway, user).await,
                EntryOutcome::Updated(user) => sink.giveaway_user_update(&giveaway, user).await,
                EntryOutcome::Left(user) => sink.giveaway_user_remove(&giveaway, user).await,
            }
        }

        Ok(outcome)
    }

    /// Terminates a giveaway by internal ID. Idempotent: ending an already-ended
    /// giveaway returns `Ok(None)` and has no side effects.
    pub async fn end(
        self: &Arc<Self>,
        id: i32,
    ) -> Result<Option<(Giveaway, Vec<String>)>, GiveawayError> {
        let retention = self.config.read().await.retention();
        let members = self.members.read().await.clone();

        let result = LifecycleService::new(&self.db)
            .finalize(id, members.as_deref(), retention)
            .await?;

        if let Some((giveaway, winners)) = &result {
            self.dirty.unmark(id).await;
            // A timer-driven end already deregistered itself; this aborts the
            // still-sleeping timer on the manual path.
            self.timers.cancel(id).await;

            for sink in self.sinks().await {
                sink.giveaway_end(giveaway, winners).await;
            }
        }

        Ok(result)
    }

    /// Terminates early by message ID, for an "end now" moderator command.
    pub async fn end_by_message(
        self: &Arc<Self>,
        message_id: u64,
    ) -> Result<(Giveaway, Vec<String>), GiveawayError> {
        let Some(model) = GiveawayRepository::new(&self.db)
            .get_by_message(message_id)
            .await?
        else {
            return Err(GiveawayError::NotFound(
                "no giveaway is attached to this message".to_string(),
            ));
        };

        self.end(model.id).await?.ok_or_else(|| {
            GiveawayError::NotFound("this giveaway has already ended".to_string())
        })
    }

    /// Draws replacement winners on an ended giveaway.
    pub async fn reroll(
        &self,
        message_id: u64,
        amount: u32,
        moderator_id: &str,
    ) -> Result<(Giveaway, Vec<String>), GiveawayError> {
        let (giveaway, winners) = LifecycleService::new(&self.db)
            .reroll(message_id, amount)
            .await?;

        for sink in self.sinks().await {
            sink.giveaway_reroll(&giveaway, &winners, moderator_id).await;
        }

        Ok((giveaway, winners))
    }

    /// Cancels a live giveaway: clears its timer and dirty flag, archives the
    /// row without drawing winners.
    pub async fn cancel(&self, message_id: u64, reason: &str) -> Result<Giveaway, GiveawayError> {
        let Some(model) = GiveawayRepository::new(&self.db)
            .get_by_message(message_id)
            .await?
        else {
            return Err(GiveawayError::NotFound(
                "no giveaway is attached to this message".to_string(),
            ));
        };

        self.timers.cancel(model.id).await;
        self.dirty.unmark(model.id).await;

        let retention = self.config.read().await.retention();
        let giveaway = LifecycleService::new(&self.db)
            .cancel(model.id, reason, retention)
            .await?;

        for sink in self.sinks().await {
            sink.giveaway_cancel(&giveaway, reason).await;
        }

        Ok(giveaway)
    }

    /// Drops every live giveaway in a deleted channel.
    pub async fn remove_channel(&self, channel_id: u64) -> Result<usize, GiveawayError> {
        let models = GiveawayRepository::new(&self.db)
            .all_for_channel(channel_id)
            .await?;
        self.remove_models(models, "channel deleted").await
    }

    /// Drops every live giveaway in a removed guild.
    pub async fn remove_guild(&self, guild_id: u64) -> Result<usize, GiveawayError> {
        let models = GiveawayRepository::new(&self.db)
            .all_for_guild(guild_id)
            .await?;
        self.remove_models(models, "guild removed").await
    }

    /// Deletes archived giveaways past their retention deadline.
    pub async fn purge_expired(&self) -> Result<u64, GiveawayError> {
        LifecycleService::new(&self.db).purge_expired().await
    }

    /// Rebuilds timers from storage after a restart.
    ///
    /// Giveaways whose end date already passed are terminated immediately; the
    /// rest get timers for their remaining duration.
    pub async fn resume(self: &Arc<Self>) -> Result<usize, GiveawayError> {
        let pending = GiveawayRepository::new(&self.db).all_pending().await?;
        let count = pending.len();
        let now = Utc::now();

        for model in pending {
            if model.end_at <= now {
                if let Err(e) = self.end(model.id).await {
                    self.report(&e).await;
                }
            } else {
                self.schedule_end(model.id, model.end_at).await;
            }
        }

        for sink in self.sinks().await {
            sink.giveaway_debug(&format!("resumed {count} pending giveaways"))
                .await;
        }

        Ok(count)
    }

    /// Resumes pending giveaways and starts the debounce drain and the archive
    /// purge sweep. Idempotent across repeated calls.
    pub async fn start_background(self: &Arc<Self>) -> Result<(), GiveawayError> {
        self.resume().await?;

        let mut tasks = self.background.lock().await;
        if tasks.sync.is_none() {
            tasks.sync = Some(self.spawn_sync_task());
        }
        if tasks.purge.is_none() {
            tasks.purge = Some(purge::start_purge_job(self.db.clone()).await?);
        }

        Ok(())
    }

    /// Stops background tasks and aborts all timers. Storage is untouched; a
    /// later [`start_background`](Self::start_background) picks everything up
    /// again.
    pub async fn shutdown(&self) {
        let mut tasks = self.background.lock().await;
        if let Some(handle) = tasks.sync.take() {
            handle.abort();
        }
        if let Some(mut scheduler) = tasks.purge.take() {
            if let Err(e) = scheduler.shutdown().await {
                tracing::warn!("Failed to stop purge scheduler: {e}");
            }
        }
        drop(tasks);

        self.timers.clear().await;
    }

    /// True if the giveaway currently awaits an outward sync.
    pub async fn is_dirty(&self, id: i32) -> bool {
        self.dirty.contains(id).await
    }

    async fn schedule_end(self: &Arc<Self>, id: i32, end_at: DateTime<Utc>) {
        let manager = Arc::clone(self);
        self.timers
            .schedule(id, end_at, move || async move {
                if let Err(e) = manager.end(id).await {
                    manager.report(&e).await;
                }
            })
            .await;
    }

    fn spawn_sync_task(self: &Arc<Self>) -> JoinHandle<()> {
        let manager = Arc::clone(self);

        tokio::spawn(async move {
            let period = manager.config.read().await.sync_interval;
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                manager.drain_dirty().await;
            }
        })
    }

    /// Drains the dirty set: one `giveaway_sync` per dirty giveaway, state
    /// re-fetched from storage. Failures are reported and never stop the drain.
    async fn drain_dirty(&self) {
        let ids = self.dirty.drain().await;
        if ids.is_empty() {
            return;
        }

        let repo = GiveawayRepository::new(&self.db);

        for id in ids {
            let model = match repo.get(id).await {
                Ok(Some(model)) => model,
                // Ended or deleted between the mark and the drain.
                Ok(None) => continue,
                Err(e) => {
                    self.report(&e.into()).await;
                    continue;
                }
            };

            match Giveaway::try_from(model) {
                Ok(giveaway) => {
                    for sink in self.sinks().await {
                        sink.giveaway_sync(&giveaway).await;
                    }
                }
                Err(e) => self.report(&e).await,
            }
        }
    }

    async fn remove_models(
        &self,
        models: Vec<entity::giveaway::Model>,
        reason: &str,
    ) -> Result<usize, GiveawayError> {
        if models.is_empty() {
            return Ok(0);
        }

        let ids: Vec<i32> = models.iter().map(|m| m.id).collect();
        for &id in &ids {
            self.timers.cancel(id).await;
            self.dirty.unmark(id).await;
        }

        let giveaways: Vec<Giveaway> = models
            .into_iter()
            .map(Giveaway::try_from)
            .collect::<Result<_, _>>()?;

        GiveawayRepository::new(&self.db).delete_many(&ids).await?;

        for sink in self.sinks().await {
            sink.giveaway_bulk_delete(&giveaways, reason).await;
        }

        Ok(giveaways.len())
    }

    async fn sinks(&self) -> Vec<Arc<dyn EventSink>> {
        self.sinks.read().await.clone()
    }

    async fn report(&self, error: &GiveawayError) {
        match &*self.error_handler.read().await {
            Some(handler) => handler(error),
            // Rejections meant for an interacting user carry no operational
            // signal on a background path; infrastructure failures do.
            None if error.is_user_facing() => {
                tracing::debug!("suppressed giveaway error: {error}")
            }
            None => tracing::warn!("suppressed giveaway error: {error}"),
        }
    }
}

fn extend_unique(target: &mut Vec<String>, source: Vec<String>) {
    for value in source {
        if !target.contains(&value) {
            target.push(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::archive::ArchivedGiveawayRepository;
    use entity::types::{EntryRule, EntryUser, RoleGates};
    use serenity::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use test_utils::builder::TestBuilder;
    use test_utils::factory::giveaway::GiveawayFactory;

    #[derive(Default)]
    struct RecordingSink {
        starts: AtomicUsize,
        ends: AtomicUsize,
        cancels: AtomicUsize,
        adds: AtomicUsize,
        removes: AtomicUsize,
        syncs: AtomicUsize,
        bulk_deletes: AtomicUsize,
    }

    #[async_trait]
    impl EventSink for RecordingSink {
        async fn giveaway_start(&self, _giveaway: &Giveaway) {
            self.starts.fetch_add(1, Ordering::SeqCst);
        }

        async fn giveaway_end(&self, _giveaway: &Giveaway, _winners: &[String]) {
            self.ends.fetch_add(1, Ordering::SeqCst);
        }

        async fn giveaway_cancel(&self, _giveaway: &Giveaway, _reason: &str) {
            self.cancels.fetch_add(1, Ordering::SeqCst);
        }

        async fn giveaway_user_add(&self, _giveaway: &Giveaway, _user: &EntryUser) {
            self.adds.fetch_add(1, Ordering::SeqCst);
        }

        async fn giveaway_user_remove(&self, _giveaway: &Giveaway, _user: &EntryUser) {
            self.removes.fetch_add(1, Ordering::SeqCst);
        }

        async fn giveaway_sync(&self, _giveaway: &Giveaway) {
            self.syncs.fetch_add(1, Ordering::SeqCst);
        }

        async fn giveaway_bulk_delete(&self, _giveaways: &[Giveaway], _reason: &str) {
            self.bulk_deletes.fetch_add(1, Ordering::SeqCst);
        }
    }

    async fn manager_with_sink() -> (
        Arc<GiveawayManager>,
        Arc<RecordingSink>,
        DatabaseConnection,
    ) {
        let test = TestBuilder::new().with_giveaway_tables().build().await.unwrap();
        let db = test.db.unwrap();
        let manager = GiveawayManager::new(db.clone());
        let sink = Arc::new(RecordingSink::default());
        manager.add_sink(sink.clone()).await;
        (manager, sink, db)
    }

    fn sample_new(message_id: u64) -> NewGiveaway {
        NewGiveaway {
            guild_id: 1,
            channel_id: 2,
            message_id,
            prize: "Test prize".to_string(),
            winners: 1,
            end_at: Utc::now() + chrono::Duration::hours(1),
            entries: Vec::new(),
            roles: RoleGates::default(),
            host: None,
        }
    }

    #[tokio::test]
    async fn test_start_rejects_invalid_input() {
        let (manager, sink, _db) = manager_with_sink().await;

        let mut no_prize = sample_new(1);
        no_prize.prize = "  ".to_string();
        assert!(matches!(
            manager.start(no_prize).await,
            Err(GiveawayError::Validation(_))
        ));

        let mut no_winners = sample_new(2);
        no_winners.winners = 0;
        assert!(matches!(
            manager.start(no_winners).await,
            Err(GiveawayError::Validation(_))
        ));

        let mut past_end = sample_new(3);
        past_end.end_at = Utc::now() - chrono::Duration::minutes(1);
        assert!(matches!(
            manager.start(past_end).await,
            Err(GiveawayError::Validation(_))
        ));

        assert_eq!(sink.starts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_start_merges_guild_multipliers_and_prize_gates() {
        let (manager, sink, db) = manager_with_sink().await;

        let booster_rule = EntryRule {
            roles: vec!["999".to_string()],
            amount: 3,
        };
        GuildSettingsRepository::new(&db)
            .set_multipliers(1, vec![booster_rule.clone()])
            .await
            .unwrap();

        let mut new = sample_new(10);
        new.prize = "Nitro required:111 add:222".to_string();
        let giveaway = manager.start(new).await.unwrap();

        assert!(giveaway.entries.contains(&booster_rule));
        assert_eq!(giveaway.roles.required, vec!["111"]);
        assert_eq!(giveaway.roles.add, vec!["222"]);
        assert_eq!(sink.starts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_toggle_persists_marks_dirty_and_emits() {
        let (manager, sink, db) = manager_with_sink().await;
        let giveaway = manager.start(sample_new(20)).await.unwrap();

        let outcome = manager.toggle_entry(20, "u1", &[], None).await.unwrap();
        assert!(matches!(outcome, EntryOutcome::Joined(_)));

        let stored = GiveawayRepository::new(&db)
            .get(giveaway.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.users.0.len(), 1);
        assert!(manager.is_dirty(giveaway.id).await);
        assert_eq!(sink.adds.load(Ordering::SeqCst), 1);

        // Second unchanged toggle leaves.
        let outcome = manager.toggle_entry(20, "u1", &[], None).await.unwrap();
        assert!(matches!(outcome, EntryOutcome::Left(_)));
        assert_eq!(sink.removes.load(Ordering::SeqCst), 1);

        let stored = GiveawayRepository::new(&db)
            .get(giveaway.id)
            .await
            .unwrap()
            .unwrap();
        assert!(stored.users.0.is_empty());
    }

    #[tokio::test]
    async fn test_toggle_applies_role_multiplier() {
        let (manager, _sink, db) = manager_with_sink().await;
        let booster = test_utils::serenity::create_test_role(999, "Booster", 0xF47FFF, 5);

        let mut new = sample_new(25);
        new.entries = vec![EntryRule {
            roles: vec![booster.id.to_string()],
            amount: 4,
        }];
        let giveaway = manager.start(new).await.unwrap();

        let outcome = manager
            .toggle_entry(25, "u1", &[booster.id.to_string()], None)
            .await
            .unwrap();
        match outcome {
            EntryOutcome::Joined(user) => assert_eq!(user.entries, 5),
            other => panic!("expected a join, got {other:?}"),
        }

        let stored = GiveawayRepository::new(&db)
            .get(giveaway.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.users.0[0].entries, 5);
    }

    #[tokio::test]
    async fn test_debounce_coalesces_mutations_into_one_sync() {
        let (manager, sink, _db) = manager_with_sink().await;
        manager.set_sync_interval(Duration::from_millis(100)).await;
        manager.start(sample_new(30)).await.unwrap();
        manager.start_background().await.unwrap();

        // A burst of mutations within one interval.
        for user in ["u1", "u2", "u3", "u4", "u5"] {
            manager.toggle_entry(30, user, &[], None).await.unwrap();
        }

        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(sink.syncs.load(Ordering::SeqCst), 1);

        // A later mutation is picked up by a following interval.
        manager.toggle_entry(30, "u6", &[], None).await.unwrap();
        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(sink.syncs.load(Ordering::SeqCst), 2);

        manager.shutdown().await;
    }

    #[tokio::test]
    async fn test_end_timer_fires_and_archives() {
        let (manager, sink, db) = manager_with_sink().await;

        let mut new = sample_new(40);
        new.end_at = Utc::now() + chrono::Duration::milliseconds(150);
        let giveaway = manager.start(new).await.unwrap();
        manager.toggle_entry(40, "u1", &[], None).await.unwrap();

        tokio::time::sleep(Duration::from_millis(600)).await;

        assert_eq!(sink.ends.load(Ordering::SeqCst), 1);
        assert!(GiveawayRepository::new(&db)
            .get(giveaway.id)
            .await
            .unwrap()
            .is_none());

        let archived = ArchivedGiveawayRepository::new(&db)
            .get(giveaway.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(archived.won.0, vec!["u1".to_string()]);
    }

    #[tokio::test]
    async fn test_end_twice_emits_once() {
        let (manager, sink, _db) = manager_with_sink().await;
        let giveaway = manager.start(sample_new(45)).await.unwrap();

        assert!(manager.end(giveaway.id).await.unwrap().is_some());
        assert!(manager.end(giveaway.id).await.unwrap().is_none());
        assert_eq!(sink.ends.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_cancel_clears_timer_and_dirty_flag() {
        let (manager, sink, db) = manager_with_sink().await;

        let mut new = sample_new(50);
        new.end_at = Utc::now() + chrono::Duration::milliseconds(200);
        let giveaway = manager.start(new).await.unwrap();
        manager.toggle_entry(50, "u1", &[], None).await.unwrap();

        manager.cancel(50, "host request").await.unwrap();
        assert!(!manager.is_dirty(giveaway.id).await);

        tokio::time::sleep(Duration::from_millis(500)).await;

        // The timer was aborted, so no termination fired after the cancel.
        assert_eq!(sink.ends.load(Ordering::SeqCst), 0);
        assert_eq!(sink.cancels.load(Ordering::SeqCst), 1);

        let archived = ArchivedGiveawayRepository::new(&db)
            .get(giveaway.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(archived.reason.as_deref(), Some("host request"));
        assert!(archived.won.0.is_empty());
    }

    #[tokio::test]
    async fn test_remove_channel_bulk_deletes() {
        let (manager, sink, db) = manager_with_sink().await;

        GiveawayFactory::new(&db).channel_id(9).build().await.unwrap();
        GiveawayFactory::new(&db).channel_id(9).build().await.unwrap();
        let kept = GiveawayFactory::new(&db).channel_id(10).build().await.unwrap();

        let removed = manager.remove_channel(9).await.unwrap();
        assert_eq!(removed, 2);
        assert_eq!(sink.bulk_deletes.load(Ordering::SeqCst), 1);

        let repo = GiveawayRepository::new(&db);
        assert!(repo.all_for_channel(9).await.unwrap().is_empty());
        assert!(repo.get(kept.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_resume_terminates_overdue_giveaways() {
        let (manager, sink, db) = manager_with_sink().await;

        let overdue = GiveawayFactory::new(&db)
            .end_at(Utc::now() - chrono::Duration::minutes(5))
            .user(EntryUser {
                id: "u1".to_string(),
                entries: 1,
            })
            .build()
            .await
            .unwrap();
        GiveawayFactory::new(&db).build().await.unwrap();

        let resumed = manager.resume().await.unwrap();
        assert_eq!(resumed, 2);
        assert_eq!(sink.ends.load(Ordering::SeqCst), 1);

        assert!(ArchivedGiveawayRepository::new(&db)
            .get(overdue.id)
            .await
            .unwrap()
            .is_some());
    }
}
