//! Live giveaway entity.
//!
//! Rows exist only while a giveaway is accepting entries; termination or
//! cancellation moves the row to `archived_giveaway`. Winner lists therefore never
//! appear on this table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::types::{EntryRules, EntryUsers, Host, RoleGates};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "giveaway")]
pub struct Model {
    /// Internal ID, distinct from the Discord message the giveaway is attached to.
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: String,
    pub channel_id: String,
    pub message_id: String,
    /// Free-text prize description; may embed bracket tags (`level:N`, `entry:...`).
    pub prize: String,
    /// Requested winner count, >= 1.
    pub winners: i32,
    pub start_at: DateTimeUtc,
    pub end_at: DateTimeUtc,
    /// True while accepting entries. The sole lifecycle flag.
    pub pending: bool,
    /// Entry ledger: one element per participant, at most once per user.
    #[sea_orm(column_type = "Json")]
    pub users: EntryUsers,
    /// Structured weight-multiplier rules.
    #[sea_orm(column_type = "Json")]
    pub entries: EntryRules,
    #[sea_orm(column_type = "Json")]
    pub roles: RoleGates,
    #[sea_orm(column_type = "Json", nullable)]
    pub host: Option<Host>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
