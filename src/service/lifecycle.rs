//! Giveaway lifecycle routines: termination, cancellation, reroll and purge.
//!
//! Termination is idempotent by construction: a live row is the only thing that
//! can be terminated, and terminating it moves it to the archive in a single
//! transaction. A second invocation (duplicate timer fire, cancel racing a
//! timer, manual end after the timer) finds no live row and is a no-op.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::bot::member::MemberDirectory;
use crate::data::archive::ArchivedGiveawayRepository;
use crate::data::giveaway::GiveawayRepository;
use crate::error::GiveawayError;
use crate::model::giveaway::Giveaway;
use crate::service::selector;
use crate::util::parse::parse_snowflake;

pub struct LifecycleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LifecycleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Terminates a giveaway: draws winners, archives the row, deletes it from
    /// the live table.
    ///
    /// The ledger is re-fetched from storage here rather than taken from any
    /// in-memory copy, so last-moment joins are counted. When a member directory
    /// is supplied, users who left the guild are dropped before the draw; if the
    /// directory fails mid-pass the filter is skipped with a diagnostic rather
    /// than failing the termination.
    ///
    /// # Returns
    /// - `Ok(Some((giveaway, winners)))`: Terminated now
    /// - `Ok(None)`: Already terminated or unknown, no-op
    pub async fn finalize(
        &self,
        id: i32,
        members: Option<&dyn MemberDirectory>,
        retention: chrono::Duration,
    ) -> Result<Option<(Giveaway, Vec<String>)>, GiveawayError> {
        let repo = GiveawayRepository::new(self.db);

        let Some(mut model) = repo.get(id).await? else {
            return Ok(None);
        };
        if !model.pending {
            return Ok(None);
        }

        if let Some(directory) = members {
            match self.present_users(directory, &model).await {
                Ok(users) => model.users.0 = users,
                Err(e) => {
                    tracing::warn!(
                        giveaway = id,
                        "could not verify guild membership, keeping full ledger: {e}"
                    );
                }
            }
        }

        let winners = selector::pick_winners(&model.users.0, model.winners.max(1) as usize);

        // Archive insert and live delete commit together: a failure in between
        // must never leave the row in both tables.
        let delete_at = Utc::now() + retention;
        let txn = self.db.begin().await?;
        let archived = ArchivedGiveawayRepository::new(&txn)
            .insert_from_live(model, winners.clone(), None, delete_at)
            .await?;
        GiveawayRepository::new(&txn).delete(id).await?;
        txn.commit().await?;

        let giveaway = Giveaway::try_from(archived)?;
        Ok(Some((giveaway, winners)))
    }

    /// Cancels a live giveaway: no winners are drawn, the row is archived with
    /// the given reason.
    pub async fn cancel(
        &self,
        id: i32,
        reason: &str,
        retention: chrono::Duration,
    ) -> Result<Giveaway, GiveawayError> {
        let repo = GiveawayRepository::new(self.db);

        let Some(model) = repo.get(id).await? else {
            return Err(GiveawayError::NotFound(
                "this giveaway does not exist or has already ended".to_string(),
            ));
        };

        let delete_at = Utc::now() + retention;
        let txn = self.db.begin().await?;
        let archived = ArchivedGiveawayRepository::new(&txn)
            .insert_from_live(model, Vec::new(), Some(reason.to_string()), delete_at)
            .await?;
        GiveawayRepository::new(&txn).delete(id).await?;
        txn.commit().await?;

        Ok(Giveaway::try_from(archived)?)
    }

    /// Draws replacement winners on an ended giveaway.
    ///
    /// Users already present in `won ∪ rerolled` are excluded from the draw, and
    /// every user drawn here is appended to `rerolled` so later rerolls exclude
    /// them too. The requested amount may not exceed the giveaway's original
    /// winner count.
    pub async fn reroll(
        &self,
        message_id: u64,
        amount: u32,
    ) -> Result<(Giveaway, Vec<String>), GiveawayError> {
        let archive = ArchivedGiveawayRepository::new(self.db);

        let Some(model) = archive.get_by_message(message_id).await? else {
            return Err(GiveawayError::NotFound(
                "this giveaway has not ended or does not exist".to_string(),
            ));
        };

        if amount == 0 {
            return Err(GiveawayError::Validation(
                "at least one winner must be drawn".to_string(),
            ));
        }
        if amount > model.winners.max(1) as u32 {
            return Err(GiveawayError::Validation(
                "cannot reroll more winners than the giveaway originally had".to_string(),
            ));
        }

        let mut giveaway = Giveaway::try_from(model)?;
        let pool = selector::reroll_pool(&giveaway);
        let winners = selector::pick_winners(&pool, amount as usize);

        giveaway.rerolled.extend(winners.iter().cloned());
        archive
            .set_rerolled(giveaway.id, giveaway.rerolled.clone())
            .await?;

        Ok((giveaway, winners))
    }

    /// Deletes archived giveaways past their purge deadline.
    pub async fn purge_expired(&self) -> Result<u64, GiveawayError> {
        let archive = ArchivedGiveawayRepository::new(self.db);
        let purged = archive.purge_expired(Utc::now()).await?;

        if purged > 0 {
            tracing::info!("purged {purged} expired archived giveaways");
        }

        Ok(purged)
    }

    /// The ledger filtered down to users still present in the guild.
    async fn present_users(
        &self,
        directory: &dyn MemberDirectory,
        model: &entity::giveaway::Model,
    ) -> Result<Vec<entity::types::EntryUser>, GiveawayError> {
        let guild_id = parse_snowflake(&model.guild_id)?;
        let mut present = Vec::with_capacity(model.users.0.len());

        for user in &model.users.0 {
            let user_id = parse_snowflake(&user.id)?;
            if directory.member_roles(guild_id, user_id).await?.is_some() {
                present.push(user.clone());
            }
        }

        Ok(present)
    }
}
