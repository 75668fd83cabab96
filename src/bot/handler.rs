use std::sync::Arc;

use serenity::all::{ChannelId, GuildId};

use crate::manager::GiveawayManager;

/// Handles a channel_delete gateway event: every giveaway attached to a message
/// in that channel is gone with it.
pub async fn handle_channel_delete(manager: &Arc<GiveawayManager>, channel_id: ChannelId) {
    if let Err(e) = manager.remove_channel(channel_id.get()).await {
        tracing::error!("Failed to clean up giveaways for deleted channel {channel_id}: {e}");
    }
}

/// Handles a guild_delete gateway event (bot kicked or guild removed).
pub async fn handle_guild_delete(manager: &Arc<GiveawayManager>, guild_id: GuildId) {
    if let Err(e) = manager.remove_guild(guild_id.get()).await {
        tracing::error!("Failed to clean up giveaways for removed guild {guild_id}: {e}");
    }
}
