use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use entity::types::UserIdList;

/// Repository for terminated and cancelled giveaways awaiting purge.
///
/// Generic over the connection so lifecycle routines can run it inside a
/// transaction.
pub struct ArchivedGiveawayRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ArchivedGiveawayRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Moves a live row's data into the archive.
    ///
    /// # Arguments
    /// - `live`: The live giveaway row being retired
    /// - `won`: Winners drawn at termination (empty when cancelled)
    /// - `reason`: Cancellation reason, `None` for a normal end
    /// - `delete_at`: Purge deadline
    ///
    /// The caller deletes the live row separately; this method only writes the
    /// archive side.
    pub async fn insert_from_live(
        &self,
        live: entity::giveaway::Model,
        won: Vec<String>,
        reason: Option<String>,
        delete_at: DateTime<Utc>,
    ) -> Result<entity::archived_giveaway::Model, DbErr> {
        entity::archived_giveaway::ActiveModel {
            id: ActiveValue::Set(live.id),
            guild_id: ActiveValue::Set(live.guild_id),
            channel_id: ActiveValue::Set(live.channel_id),
            message_id: ActiveValue::Set(live.message_id),
            prize: ActiveValue::Set(live.prize),
            winners: ActiveValue::Set(live.winners),
            start_at: ActiveValue::Set(live.start_at),
            end_at: ActiveValue::Set(live.end_at),
            users: ActiveValue::Set(live.users),
            entries: ActiveValue::Set(live.entries),
            roles: ActiveValue::Set(live.roles),
            host: ActiveValue::Set(live.host),
            won: ActiveValue::Set(UserIdList(won)),
            rerolled: ActiveValue::Set(UserIdList(Vec::new())),
            reason: ActiveValue::Set(reason),
            delete_at: ActiveValue::Set(delete_at),
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::archived_giveaway::Model>, DbErr> {
        entity::prelude::ArchivedGiveaway::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn get_by_message(
        &self,
        message_id: u64,
    ) -> Result<Option<entity::archived_giveaway::Model>, DbErr> {
        entity::prelude::ArchivedGiveaway::find()
            .filter(entity::archived_giveaway::Column::MessageId.eq(message_id.to_string()))
            .one(self.db)
            .await
    }

    /// Replaces the accumulated reroll list.
    pub async fn set_rerolled(&self, id: i32, rerolled: Vec<String>) -> Result<(), DbErr> {
        entity::archived_giveaway::ActiveModel {
            id: ActiveValue::Unchanged(id),
            rerolled: ActiveValue::Set(UserIdList(rerolled)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Deletes every archived giveaway whose purge deadline has passed.
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of rows purged
    pub async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::ArchivedGiveaway::delete_many()
            .filter(entity::archived_giveaway::Column::DeleteAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::ArchivedGiveaway::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
