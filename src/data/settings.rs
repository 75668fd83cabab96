use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use entity::types::{EntryRule, EntryRules};

/// Repository for per-guild giveaway defaults.
pub struct GuildSettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildSettingsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// The guild's default multiplier rules, empty if the guild has none stored.
    pub async fn multipliers(&self, guild_id: u64) -> Result<Vec<EntryRule>, DbErr> {
        let settings = entity::prelude::GuildSettings::find()
            .filter(entity::guild_settings::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?;

        Ok(settings.map(|s| s.multipliers.0).unwrap_or_default())
    }

    /// Creates or replaces the guild's default multiplier rules.
    pub async fn set_multipliers(
        &self,
        guild_id: u64,
        rules: Vec<EntryRule>,
    ) -> Result<(), DbErr> {
        let existing = entity::prelude::GuildSettings::find()
            .filter(entity::guild_settings::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?;

        match existing {
            Some(model) => {
                entity::guild_settings::ActiveModel {
                    id: ActiveValue::Unchanged(model.id),
                    multipliers: ActiveValue::Set(EntryRules(rules)),
                    ..Default::default()
                }
                .update(self.db)
                .await?;
            }
            None => {
                entity::guild_settings::ActiveModel {
                    guild_id: ActiveValue::Set(guild_id.to_string()),
                    multipliers: ActiveValue::Set(EntryRules(rules)),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;
            }
        }

        Ok(())
    }
}
