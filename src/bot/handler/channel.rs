//! Channel event handlers.
//!
//! Greets newly opened support tickets with the support center menu. Only text channels
//! under the ticket category whose name carries the ticket prefix are greeted.

use serenity::all::{ChannelType, Context, CreateMessage, GuildChannel};
use std::time::Duration;

use crate::{
    bot::menu::home::{main_menu_components, main_menu_embed},
    config::Config,
    service::ticket::is_ticket_channel,
};

/// Ticket tools post their own opening message first; the menu goes below it.
const TICKET_GREETING_DELAY: Duration = Duration::from_secs(2);

/// Handles the channel_create event when a channel is created in a guild.
///
/// # Arguments
/// - `config` - Ticket category and prefix
/// - `ctx` - Discord context for sending the menu
/// - `channel` - The newly created guild channel from Discord
pub async fn handle_channel_create(config: &Config, ctx: Context, channel: GuildChannel) {
    if channel.kind != ChannelType::Text
        || !is_ticket_channel(channel.parent_id, &channel.name, &config.ticket)
    {
        return;
    }

    tokio::time::sleep(TICKET_GREETING_DELAY).await;

    let message = CreateMessage::new()
        .embed(main_menu_embed())
        .components(main_menu_components());

    if let Err(e) = channel.id.send_message(&ctx.http, message).await {
        tracing::error!(
            "Failed to greet ticket channel {} in guild {}: {:?}",
            channel.name,
            channel.guild_id,
            e
        );
    } else {
        tracing::info!(
            "Posted support menu in ticket {} ({})",
            channel.name,
            channel.id
        );
    }
}
