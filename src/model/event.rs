use serenity::async_trait;

use entity::types::EntryUser;

use crate::model::giveaway::Giveaway;

/// Observer for giveaway lifecycle events.
///
/// The manager holds an explicit list of sinks injected at construction; there is
/// no global emitter. All methods default to no-ops so a sink implements only what
/// it cares about. Message formatting and delivery, webhook fan-out and winner
/// role grants all live behind this trait; the core never edits a Discord message
/// itself.
///
/// Sink calls are made on a best-effort basis after the underlying state change
/// has been persisted; a slow or failing sink never rolls back a mutation.
#[allow(unused_variables)]
#[async_trait]
pub trait EventSink: Send + Sync {
    /// A giveaway was created and is accepting entries.
    async fn giveaway_start(&self, giveaway: &Giveaway) {}

    /// A giveaway terminated; `winners` holds the drawn user IDs.
    async fn giveaway_end(&self, giveaway: &Giveaway, winners: &[String]) {}

    /// A giveaway was cancelled before its end date.
    async fn giveaway_cancel(&self, giveaway: &Giveaway, reason: &str) {}

    /// A moderator rerolled winners on an ended giveaway.
    async fn giveaway_reroll(&self, giveaway: &Giveaway, winners: &[String], moderator_id: &str) {}

    /// A user entered the giveaway.
    async fn giveaway_user_add(&self, giveaway: &Giveaway, user: &EntryUser) {}

    /// A user left the giveaway (second toggle with unchanged weight).
    async fn giveaway_user_remove(&self, giveaway: &Giveaway, user: &EntryUser) {}

    /// A participant's entry weight was refreshed in place.
    async fn giveaway_user_update(&self, giveaway: &Giveaway, user: &EntryUser) {}

    /// Giveaways were bulk-deleted (channel or guild removed).
    async fn giveaway_bulk_delete(&self, giveaways: &[Giveaway], reason: &str) {}

    /// Debounced outward update: re-render the entry counter for this giveaway.
    ///
    /// Called at most once per sync interval per giveaway, no matter how many
    /// ledger mutations happened within the interval.
    async fn giveaway_sync(&self, giveaway: &Giveaway) {}

    /// Diagnostic chatter from the core.
    async fn giveaway_debug(&self, message: &str) {}
}
