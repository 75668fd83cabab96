use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use entity::types::{EntryUser, EntryUsers};

use crate::model::giveaway::NewGiveaway;

/// Repository for the live giveaway table.
///
/// Generic over the connection so lifecycle routines can run it inside a
/// transaction.
pub struct GiveawayRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GiveawayRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a live giveaway row with an empty ledger.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created giveaway (with its generated ID)
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, new: &NewGiveaway) -> Result<entity::giveaway::Model, DbErr> {
        entity::giveaway::ActiveModel {
            guild_id: ActiveValue::Set(new.guild_id.to_string()),
            channel_id: ActiveValue::Set(new.channel_id.to_string()),
            message_id: ActiveValue::Set(new.message_id.to_string()),
            prize: ActiveValue::Set(new.prize.clone()),
            winners: ActiveValue::Set(new.winners as i32),
            start_at: ActiveValue::Set(Utc::now()),
            end_at: ActiveValue::Set(new.end_at),
            pending: ActiveValue::Set(true),
            users: ActiveValue::Set(EntryUsers(Vec::new())),
            entries: ActiveValue::Set(entity::types::EntryRules(new.entries.clone())),
            roles: ActiveValue::Set(new.roles.clone()),
            host: ActiveValue::Set(new.host.clone()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::giveaway::Model>, DbErr> {
        entity::prelude::Giveaway::find_by_id(id).one(self.db).await
    }

    /// Looks a giveaway up by the Discord message it is attached to.
    pub async fn get_by_message(
        &self,
        message_id: u64,
    ) -> Result<Option<entity::giveaway::Model>, DbErr> {
        entity::prelude::Giveaway::find()
            .filter(entity::giveaway::Column::MessageId.eq(message_id.to_string()))
            .one(self.db)
            .await
    }

    /// All giveaways still accepting entries, across every guild.
    ///
    /// Used by the restart resume scan and the debounce drain.
    pub async fn all_pending(&self) -> Result<Vec<entity::giveaway::Model>, DbErr> {
        entity::prelude::Giveaway::find()
            .filter(entity::giveaway::Column::Pending.eq(true))
            .all(self.db)
            .await
    }

    pub async fn all_for_channel(
        &self,
        channel_id: u64,
    ) -> Result<Vec<entity::giveaway::Model>, DbErr> {
        entity::prelude::Giveaway::find()
            .filter(entity::giveaway::Column::ChannelId.eq(channel_id.to_string()))
            .all(self.db)
            .await
    }

    pub async fn all_for_guild(
        &self,
        guild_id: u64,
    ) -> Result<Vec<entity::giveaway::Model>, DbErr> {
        entity::prelude::Giveaway::find()
            .filter(entity::giveaway::Column::GuildId.eq(guild_id.to_string()))
            .all(self.db)
            .await
    }

    /// Replaces a giveaway's entry ledger.
    pub async fn update_users(&self, id: i32, users: Vec<EntryUser>) -> Result<(), DbErr> {
        entity::giveaway::ActiveModel {
            id: ActiveValue::Unchanged(id),
            users: ActiveValue::Set(EntryUsers(users)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Giveaway::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a batch of giveaways, returning the number of rows removed.
    pub async fn delete_many(&self, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Giveaway::delete_many()
            .filter(entity::giveaway::Column::Id.is_in(ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::types::RoleGates;
    use test_utils::builder::TestBuilder;
    use test_utils::factory::giveaway::GiveawayFactory;

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
    async fn test_create_and_fetch_by_message() {
        let test = TestBuilder::new().with_giveaway_tables().build().await.unwrap();
        let db = test.db.unwrap();
        let repo = GiveawayRepository::new(&db);

        let created = repo.create(&sample_new(42)).await.unwrap();
        assert!(created.pending);
        assert!(created.users.0.is_empty());

        let fetched = repo.get_by_message(42).await.unwrap().unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.prize, "Test prize");
    }

    #[tokio::test]
    async fn test_update_users_round_trip() {
        let test = TestBuilder::new().with_giveaway_tables().build().await.unwrap();
        let db = test.db.unwrap();
        let repo = GiveawayRepository::new(&db);

        let created = GiveawayFactory::new(&db).build().await.unwrap();
        repo.update_users(
            created.id,
            vec![EntryUser {
                id: "u1".to_string(),
                entries: 4,
            }],
        )
        .await
        .unwrap();

        let fetched = repo.get(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.users.0.len(), 1);
        assert_eq!(fetched.users.0[0].entries, 4);
    }

    #[tokio::test]
    async fn test_delete_many_for_channel() {
        let test = TestBuilder::new().with_giveaway_tables().build().await.unwrap();
        let db = test.db.unwrap();
        let repo = GiveawayRepository::new(&db);

        let a = GiveawayFactory::new(&db).channel_id(9).build().await.unwrap();
        let b = GiveawayFactory::new(&db).channel_id(9).build().await.unwrap();
        GiveawayFactory::new(&db).channel_id(10).build().await.unwrap();

        let in_channel = repo.all_for_channel(9).await.unwrap();
        assert_eq!(in_channel.len(), 2);

        let removed = repo.delete_many(&[a.id, b.id]).await.unwrap();
        assert_eq!(removed, 2);
        assert!(repo.all_for_channel(9).await.unwrap().is_empty());
    }
}
