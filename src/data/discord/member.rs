//! Discord guild member role access.
//!
//! `MemberRoleManager` is the seam through which the role grant reads and changes a
//! member's roles. `DiscordMemberRepository` implements it over serenity's HTTP client so
//! every read reflects Discord's current state rather than the gateway cache.

use serenity::all::{GuildId, RoleId, UserId};
use serenity::async_trait;
use serenity::http::Http;
use std::sync::Arc;

use crate::error::AppError;

/// Reads and changes role assignments of guild members.
#[async_trait]
pub trait MemberRoleManager: Send + Sync {
    /// Whether the role currently exists in the guild.
    async fn role_exists(&self, guild_id: GuildId, role_id: RoleId) -> Result<bool, AppError>;

    /// Roles currently assigned to the member.
    async fn member_role_ids(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<Vec<RoleId>, AppError>;

    /// Adds a role to the member.
    async fn add_member_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError>;
}

/// Repository for member role operations against the Discord API.
pub struct DiscordMemberRepository {
    /// Discord HTTP client shared with the gateway client.
    http: Arc<Http>,
}

impl DiscordMemberRepository {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `http` - Arc-wrapped Discord HTTP client
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl MemberRoleManager for DiscordMemberRepository {
    async fn role_exists(&self, guild_id: GuildId, role_id: RoleId) -> Result<bool, AppError> {
        let roles = self.http.get_guild_roles(guild_id).await?;

        Ok(roles.iter().any(|role| role.id == role_id))
    }

    async fn member_role_ids(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<Vec<RoleId>, AppError> {
        let member = self.http.get_member(guild_id, user_id).await?;

        Ok(member.roles)
    }

    async fn add_member_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError> {
        self.http
            .add_member_role(guild_id, user_id, role_id, Some("Roblox group verification"))
            .await?;

        Ok(())
    }
}
