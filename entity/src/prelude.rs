pub use super::archived_giveaway::Entity as ArchivedGiveaway;
pub use super::giveaway::Entity as Giveaway;
pub use super::guild_settings::Entity as GuildSettings;
