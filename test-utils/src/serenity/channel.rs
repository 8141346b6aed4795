//! Test factory for creating Serenity GuildChannel objects.

use serenity::all::GuildChannel;

/// Creates a test Serenity text GuildChannel.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `guild_id` - Discord guild ID the channel belongs to
/// - `parent_id` - Optional category the channel is nested under
/// - `name` - Channel name
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_guild_channel(
    channel_id: u64,
    guild_id: u64,
    parent_id: Option<u64>,
    name: &str,
) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "guild_id": guild_id.to_string(),
        "type": 0,
        "name": name,
        "parent_id": parent_id.map(|id| id.to_string()),
        "position": 0,
        "permission_overwrites": [],
        "nsfw": false,
        "topic": null,
        "last_message_id": null,
        "rate_limit_per_user": 0,
        "flags": 0,
        "available_tags": [],
        "applied_tags": [],
    }))
    .expect("Failed to create test guild channel - invalid JSON structure")
}
