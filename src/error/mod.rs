//! Error types for the giveaway core.
//!
//! Validation and not-found failures carry plain human-readable messages suitable
//! for direct display to the interacting user. Infrastructure errors wrap the
//! underlying library error. Best-effort paths (outward sync calls, member fetches
//! during termination) catch these at the call site and route them through the
//! manager's error handler instead of propagating.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GiveawayError {
    /// Caller input rejected: missing prize, past end date, gated entry, reroll
    /// amount above the original winner count, and similar.
    #[error("{0}")]
    Validation(String),

    /// Unknown giveaway ID, unknown message, or unknown user in a giveaway.
    #[error("{0}")]
    NotFound(String),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity. Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error from the purge sweep.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// A stored snowflake failed to parse back into a u64.
    #[error("failed to parse id `{value}`")]
    InvalidId {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Manual conversion from serenity::Error, boxing to keep the enum small.
impl From<serenity::Error> for GiveawayError {
    fn from(err: serenity::Error) -> Self {
        GiveawayError::DiscordErr(Box::new(err))
    }
}

impl GiveawayError {
    /// True for the tagged failures meant to be shown to the interacting user.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            GiveawayError::Validation(_) | GiveawayError::NotFound(_)
        )
    }
}
