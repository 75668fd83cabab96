//! Shared JSON column types for the giveaway tables.
//!
//! Giveaways are document-shaped: the participant ledger, the multiplier rules and
//! the role gates are nested lists that always travel with their giveaway. They are
//! stored as typed JSON columns rather than join tables so a single row read returns
//! the whole aggregate.

use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// A participant in a giveaway's entry ledger.
///
/// `entries` is the user's ticket count in the prize draw, always at least 1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryUser {
    /// Discord user ID (snowflake as string).
    pub id: String,
    /// Entry weight, >= 1.
    pub entries: i32,
}

/// A weight-multiplier rule: members holding any of `roles` gain `amount` extra entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRule {
    /// Discord role IDs (snowflakes as strings).
    pub roles: Vec<String>,
    /// Entries added on top of the base weight of 1.
    pub amount: i32,
}

/// Role gating and post-win reward configuration for a giveaway.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct RoleGates {
    /// Entering requires holding at least one of these roles (empty = open to all).
    #[serde(default)]
    pub required: Vec<String>,
    /// Roles granted to winners by the consuming bot.
    #[serde(default)]
    pub add: Vec<String>,
    /// Roles revoked from winners by the consuming bot.
    #[serde(default)]
    pub remove: Vec<String>,
    /// Members holding any of these roles may not enter.
    #[serde(default)]
    pub blocked: Vec<String>,
}

/// The giveaway host, kept for attribution in outward messages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Host {
    pub id: String,
    pub mention: String,
}

/// JSON column wrapper for the entry ledger.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct EntryUsers(pub Vec<EntryUser>);

/// JSON column wrapper for the multiplier rule list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct EntryRules(pub Vec<EntryRule>);

/// JSON column wrapper for a list of user IDs (`won`, `rerolled`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct UserIdList(pub Vec<String>);
