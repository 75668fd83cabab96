//! Giveaway factory for creating test giveaway rows.
//!
//! Provides factory methods for seeding live giveaway rows with sensible
//! defaults, reducing boilerplate in tests. Customization goes through a
//! builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::types::{EntryRule, EntryRules, EntryUser, EntryUsers, Host, RoleGates};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test giveaways with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::giveaway::GiveawayFactory;
///
/// let giveaway = GiveawayFactory::new(&db)
///     .channel_id(9)
///     .winners(2)
///     .build()
///     .await?;
/// ```
pub struct GiveawayFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: u64,
    channel_id: u64,
    message_id: u64,
    prize: String,
    winners: i32,
    end_at: chrono::DateTime<Utc>,
    pending: bool,
    users: Vec<EntryUser>,
    entries: Vec<EntryRule>,
    roles: RoleGates,
    host: Option<Host>,
}

impl<'a> GiveawayFactory<'a> {
    /// Creates a new GiveawayFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: `1`, channel_id: `2`
    /// - message_id: auto-incremented, unique per factory call
    /// - prize: `"Test prize {id}"`
    /// - winners: `1`
    /// - end_at: 1 hour from now, pending: `true`
    /// - empty ledger, no multiplier rules, no gates, no host
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: 1,
            channel_id: 2,
            message_id: id,
            prize: format!("Test prize {}", id),
            winners: 1,
            end_at: Utc::now() + chrono::Duration::hours(1),
            pending: true,
            users: Vec::new(),
            entries: Vec::new(),
            roles: RoleGates::default(),
            host: None,
        }
    }

    pub fn guild_id(mut self, guild_id: u64) -> Self {
        self.guild_id = guild_id;
        self
    }

    pub fn channel_id(mut self, channel_id: u64) -> Self {
        self.channel_id = channel_id;
        self
    }

    pub fn message_id(mut self, message_id: u64) -> Self {
        self.message_id = message_id;
        self
    }

    pub fn prize(mut self, prize: impl Into<String>) -> Self {
        self.prize = prize.into();
        self
    }

    pub fn winners(mut self, winners: i32) -> Self {
        self.winners = winners;
        self
    }

    pub fn end_at(mut self, end_at: chrono::DateTime<Utc>) -> Self {
        self.end_at = end_at;
        self
    }

    pub fn pending(mut self, pending: bool) -> Self {
        self.pending = pending;
        self
    }

    /// Appends a participant to the entry ledger.
    pub fn user(mut self, user: EntryUser) -> Self {
        self.users.push(user);
        self
    }

    /// Appends a weight-multiplier rule.
    pub fn entry_rule(mut self, rule: EntryRule) -> Self {
        self.entries.push(rule);
        self
    }

    pub fn roles(mut self, roles: RoleGates) -> Self {
        self.roles = roles;
        self
    }

    pub fn host(mut self, host: Host) -> Self {
        self.host = Some(host);
        self
    }

    /// Builds and inserts the giveaway row into the database.
    pub async fn build(self) -> Result<entity::giveaway::Model, DbErr> {
        entity::giveaway::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(self.guild_id.to_string()),
            channel_id: ActiveValue::Set(self.channel_id.to_string()),
            message_id: ActiveValue::Set(self.message_id.to_string()),
            prize: ActiveValue::Set(self.prize),
            winners: ActiveValue::Set(self.winners),
            start_at: ActiveValue::Set(Utc::now()),
            end_at: ActiveValue::Set(self.end_at),
            pending: ActiveValue::Set(self.pending),
            users: ActiveValue::Set(EntryUsers(self.users)),
            entries: ActiveValue::Set(EntryRules(self.entries)),
            roles: ActiveValue::Set(self.roles),
            host: ActiveValue::Set(self.host),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a giveaway with default values.
///
/// Shorthand for `GiveawayFactory::new(db).build().await`.
pub async fn create_giveaway(db: &DatabaseConnection) -> Result<entity::giveaway::Model, DbErr> {
    GiveawayFactory::new(db).build().await
}
