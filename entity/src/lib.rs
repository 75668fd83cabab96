pub mod archived_giveaway;
pub mod giveaway;
pub mod guild_settings;
pub mod prelude;
pub mod types;
