//! Per-guild giveaway defaults.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::types::EntryRules;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "guild_settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub guild_id: String,
    /// Multiplier rules merged into every new giveaway of this guild.
    #[sea_orm(column_type = "Json")]
    pub multipliers: EntryRules,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
