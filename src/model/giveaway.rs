use chrono::{DateTime, Utc};

pub use entity::types::{EntryRule, EntryUser, Host, RoleGates};

use crate::error::GiveawayError;
use crate::util::parse::parse_snowflake;

/// A giveaway aggregate, live or archived.
///
/// `pending` is the sole lifecycle flag: true while accepting entries, false once
/// terminated or cancelled. `won` and `rerolled` are only ever populated on
/// non-pending giveaways (live rows have no such columns).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Giveaway {
    pub id: i32,
    pub guild_id: u64,
    pub channel_id: u64,
    pub message_id: u64,
    pub prize: String,
    pub winners: u32,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub pending: bool,
    /// Entry ledger; a user ID appears at most once.
    pub users: Vec<EntryUser>,
    /// Structured weight-multiplier rules (prize-text `entry:` tags add more).
    pub entries: Vec<EntryRule>,
    pub roles: RoleGates,
    pub host: Option<Host>,
    pub won: Vec<String>,
    pub rerolled: Vec<String>,
}

impl Giveaway {
    /// Number of distinct participants.
    pub fn participant_count(&self) -> usize {
        self.users.len()
    }

    /// Total ticket count across the ledger, as shown on the join button.
    pub fn entry_count(&self) -> i64 {
        self.users.iter().map(|u| i64::from(u.entries.max(1))).sum()
    }

    pub fn user(&self, user_id: &str) -> Option<&EntryUser> {
        self.users.iter().find(|u| u.id == user_id)
    }
}

impl TryFrom<entity::giveaway::Model> for Giveaway {
    type Error = GiveawayError;

    fn try_from(model: entity::giveaway::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            guild_id: parse_snowflake(&model.guild_id)?,
            channel_id: parse_snowflake(&model.channel_id)?,
            message_id: parse_snowflake(&model.message_id)?,
            prize: model.prize,
            winners: model.winners.max(1) as u32,
            start_at: model.start_at,
            end_at: model.end_at,
            pending: model.pending,
            users: model.users.0,
            entries: model.entries.0,
            roles: model.roles,
            host: model.host,
            won: Vec::new(),
            rerolled: Vec::new(),
        })
    }
}

impl TryFrom<entity::archived_giveaway::Model> for Giveaway {
    type Error = GiveawayError;

    fn try_from(model: entity::archived_giveaway::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            guild_id: parse_snowflake(&model.guild_id)?,
            channel_id: parse_snowflake(&model.channel_id)?,
            message_id: parse_snowflake(&model.message_id)?,
            prize: model.prize,
            winners: model.winners.max(1) as u32,
            start_at: model.start_at,
            end_at: model.end_at,
            pending: false,
            users: model.users.0,
            entries: model.entries.0,
            roles: model.roles,
            host: model.host,
            won: model.won.0,
            rerolled: model.rerolled.0,
        })
    }
}

/// Parameters for starting a giveaway.
#[derive(Clone, Debug)]
pub struct NewGiveaway {
    pub guild_id: u64,
    pub channel_id: u64,
    /// The announcement message the giveaway is attached to.
    pub message_id: u64,
    pub prize: String,
    pub winners: u32,
    pub end_at: DateTime<Utc>,
    pub entries: Vec<EntryRule>,
    pub roles: RoleGates,
    pub host: Option<Host>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::types::{EntryRules, EntryUsers};

    fn live_model() -> entity::giveaway::Model {
        entity::giveaway::Model {
            id: 7,
            guild_id: "100".to_string(),
            channel_id: "200".to_string(),
            message_id: "300".to_string(),
            prize: "Nitro".to_string(),
            winners: 2,
            start_at: Utc::now(),
            end_at: Utc::now(),
            pending: true,
            users: EntryUsers(vec![EntryUser {
                id: "u1".to_string(),
                entries: 3,
            }]),
            entries: EntryRules(Vec::new()),
            roles: RoleGates::default(),
            host: None,
        }
    }

    #[test]
    fn test_live_row_conversion() {
        let giveaway = Giveaway::try_from(live_model()).unwrap();

        assert_eq!(giveaway.guild_id, 100);
        assert_eq!(giveaway.message_id, 300);
        assert!(giveaway.pending);
        assert!(giveaway.won.is_empty());
        assert_eq!(giveaway.entry_count(), 3);
        assert_eq!(giveaway.participant_count(), 1);
    }

    #[test]
    fn test_corrupt_snowflake_is_an_error() {
        let mut model = live_model();
        model.guild_id = "garbage".to_string();

        assert!(matches!(
            Giveaway::try_from(model),
            Err(GiveawayError::InvalidId { .. })
        ));
    }
}
