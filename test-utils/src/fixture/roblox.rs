//! Roblox users and groups API bodies.
//!
//! Shapes follow the live API, including fields the bot ignores, so deserialization is
//! exercised against realistic payloads.

use serde_json::{json, Value};

/// Body the bot sends to `POST /v1/usernames/users`.
pub fn username_lookup_request(username: &str) -> Value {
    json!({
        "usernames": [username],
        "excludeBannedUsers": false,
    })
}

/// Response of `POST /v1/usernames/users`.
///
/// # Arguments
/// - `users` - `(id, name, display_name)` per matched account
pub fn username_lookup_response(users: &[(u64, &str, &str)]) -> Value {
    let data: Vec<Value> = users
        .iter()
        .map(|(id, name, display_name)| {
            json!({
                "requestedUsername": name,
                "hasVerifiedBadge": false,
                "id": id,
                "name": name,
                "displayName": display_name,
            })
        })
        .collect();

    json!({ "data": data })
}

/// Response of `GET /v2/users/{id}/groups/roles`.
///
/// # Arguments
/// - `memberships` - `(group_id, role_name)` per group, in delivery order
pub fn group_roles_response(memberships: &[(u64, &str)]) -> Value {
    let data: Vec<Value> = memberships
        .iter()
        .enumerate()
        .map(|(rank, (group_id, role_name))| {
            json!({
                "group": {
                    "id": group_id,
                    "name": format!("Group {}", group_id),
                    "memberCount": 100,
                    "hasVerifiedBadge": false,
                },
                "role": {
                    "id": rank as u64 + 1,
                    "name": role_name,
                    "rank": rank as u64 + 1,
                },
            })
        })
        .collect();

    json!({ "data": data })
}
