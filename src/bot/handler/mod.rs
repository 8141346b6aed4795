use serenity::all::{Context, EventHandler, GuildChannel, Interaction, Ready};
use serenity::async_trait;
use std::sync::Arc;

use crate::{config::Config, data::roblox::RobloxClient};

pub mod channel;
pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub config: Arc<Config>,
    pub roblox: RobloxClient,
}

impl Handler {
    pub fn new(config: Arc<Config>, roblox: RobloxClient) -> Self {
        Self { config, roblox }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.config, ctx, ready).await;
    }

    /// Called when a channel is created in a guild
    async fn channel_create(&self, ctx: Context, channel: GuildChannel) {
        channel::handle_channel_create(&self.config, ctx, channel).await;
    }

    /// Called when a slash command is used or a button is clicked
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(self, ctx, interaction).await;
    }
}
