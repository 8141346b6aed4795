//! Roblox web API models.
//!
//! Request and response bodies for the two Roblox endpoints the bot talks to, plus the
//! `RobloxAccount` domain model the rest of the bot works with. Only the fields the bot
//! reads are declared; serde ignores everything else Roblox returns.

use serde::{Deserialize, Serialize};

/// Resolved Roblox account.
///
/// Immutable once fetched and owned by the verification attempt that fetched it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RobloxAccount {
    /// Roblox user id.
    pub id: u64,
    /// Unique username (the `@handle`).
    pub name: String,
    /// Profile display name.
    #[serde(rename = "displayName")]
    pub display_name: String,
}

impl RobloxAccount {
    /// URL of the account's 150x150 headshot, used as embed thumbnail.
    pub fn headshot_url(&self) -> String {
        format!(
            "https://www.roblox.com/headshot-thumbnail/image?userId={}&width=150&height=150&format=png",
            self.id
        )
    }
}

/// Body of `POST /v1/usernames/users`.
#[derive(Debug, Serialize)]
pub struct UsernameLookupRequest<'a> {
    pub usernames: Vec<&'a str>,
    #[serde(rename = "excludeBannedUsers")]
    pub exclude_banned_users: bool,
}

/// Body of a successful `POST /v1/usernames/users`.
#[derive(Debug, Deserialize)]
pub struct UsernameLookupResponse {
    #[serde(default)]
    pub data: Vec<RobloxAccount>,
}

/// One group the account belongs to, along with the rank it holds there.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GroupMembership {
    pub group: GroupRef,
    pub role: GroupRoleRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GroupRef {
    pub id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GroupRoleRef {
    pub name: String,
}

/// Body of a successful `GET /v2/users/{id}/groups/roles`.
#[derive(Debug, Deserialize)]
pub struct GroupMembershipResponse {
    #[serde(default)]
    pub data: Vec<GroupMembership>,
}
