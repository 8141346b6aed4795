use serenity::all::ChannelId;

use crate::config::TicketConfig;

/// Whether a channel is a support ticket.
///
/// A ticket lives under the configured category and has the ticket prefix somewhere in
/// its (case-insensitive) name.
///
/// # Arguments
/// - `parent_id` - Category the channel is nested under, if any
/// - `name` - Channel name
/// - `config` - Ticket category and prefix
pub fn is_ticket_channel(parent_id: Option<ChannelId>, name: &str, config: &TicketConfig) -> bool {
    parent_id == Some(config.category_id)
        && name.to_lowercase().contains(&config.channel_prefix)
}
