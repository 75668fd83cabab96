//! Guild settings factory for seeding per-guild giveaway defaults.

use crate::factory::helpers::next_id;
use entity::types::{EntryRule, EntryRules};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild settings rows.
pub struct GuildSettingsFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: u64,
    multipliers: Vec<EntryRule>,
}

impl<'a> GuildSettingsFactory<'a> {
    /// Creates a new GuildSettingsFactory with a unique guild ID and no
    /// multiplier rules.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id(),
            multipliers: Vec::new(),
        }
    }

    pub fn guild_id(mut self, guild_id: u64) -> Self {
        self.guild_id = guild_id;
        self
    }

    /// Appends a multiplier rule.
    pub fn multiplier(mut self, rule: EntryRule) -> Self {
        self.multipliers.push(rule);
        self
    }

    /// Builds and inserts the guild settings row into the database.
    pub async fn build(self) -> Result<entity::guild_settings::Model, DbErr> {
        entity::guild_settings::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(self.guild_id.to_string()),
            multipliers: ActiveValue::Set(EntryRules(self.multipliers)),
        }
        .insert(self.db)
        .await
    }
}

/// Creates guild settings for the given guild with default values.
pub async fn create_guild_settings(
    db: &DatabaseConnection,
    guild_id: u64,
) -> Result<entity::guild_settings::Model, DbErr> {
    GuildSettingsFactory::new(db).guild_id(guild_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::GuildSettings;

    #[tokio::test]
    async fn creates_settings_with_multipliers() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(GuildSettings)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let settings = GuildSettingsFactory::new(db)
            .guild_id(42)
            .multiplier(EntryRule {
                roles: vec!["999".to_string()],
                amount: 3,
            })
            .build()
            .await?;

        assert_eq!(settings.guild_id, "42");
        assert_eq!(settings.multipliers.0.len(), 1);

        Ok(())
    }
}
