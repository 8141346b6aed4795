//! Test factory for creating Serenity Member objects.

use serenity::all::Member;

/// Creates a test Serenity guild Member.
///
/// The member's user has no global name, so its display name is the nickname when set
/// and the username otherwise.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Account username
/// - `nick` - Optional guild nickname
/// - `role_ids` - Roles assigned to the member
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::member::create_test_member;
///
/// let member = create_test_member(1, 2, "discord_user", Some("Uppu | @uppucs"), &[10]);
/// assert_eq!(member.display_name(), "Uppu | @uppucs");
/// ```
pub fn create_test_member(
    guild_id: u64,
    user_id: u64,
    username: &str,
    nick: Option<&str>,
    role_ids: &[u64],
) -> Member {
    let roles: Vec<String> = role_ids.iter().map(|id| id.to_string()).collect();

    serde_json::from_value(serde_json::json!({
        "guild_id": guild_id.to_string(),
        "user": {
            "id": user_id.to_string(),
            "username": username,
            "discriminator": "0",
            "global_name": null,
            "avatar": null,
            "bot": false,
            "system": false,
            "banner": null,
            "accent_color": null,
            "public_flags": 0,
        },
        "nick": nick,
        "avatar": null,
        "roles": roles,
        "joined_at": "2024-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "permissions": null,
        "communication_disabled_until": null,
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
