//! Archived giveaway entity.
//!
//! Terminated and cancelled giveaways land here with a purge deadline. Rerolls
//! operate on these rows, accumulating previously drawn users in `rerolled`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::types::{EntryRules, EntryUsers, Host, RoleGates, UserIdList};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "archived_giveaway")]
pub struct Model {
    /// Carries over the live row's ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub guild_id: String,
    pub channel_id: String,
    pub message_id: String,
    pub prize: String,
    pub winners: i32,
    pub start_at: DateTimeUtc,
    pub end_at: DateTimeUtc,
    /// Final ledger, frozen at termination (minus departed members if filtered).
    #[sea_orm(column_type = "Json")]
    pub users: EntryUsers,
    #[sea_orm(column_type = "Json")]
    pub entries: EntryRules,
    #[sea_orm(column_type = "Json")]
    pub roles: RoleGates,
    #[sea_orm(column_type = "Json", nullable)]
    pub host: Option<Host>,
    /// Winners drawn at termination. Empty for cancelled giveaways.
    #[sea_orm(column_type = "Json")]
    pub won: UserIdList,
    /// Users ever drawn by a reroll, accumulated across rerolls.
    #[sea_orm(column_type = "Json")]
    pub rerolled: UserIdList,
    /// Cancellation reason, if the giveaway was cancelled rather than ended.
    pub reason: Option<String>,
    /// Physical deletion deadline for the retention sweep.
    pub delete_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
