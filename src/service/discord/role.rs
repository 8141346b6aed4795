use serenity::all::{GuildId, RoleId, UserId};

use crate::{
    data::discord::MemberRoleManager,
    error::AppError,
    model::verification::{RoleGrant, RoleGrantError},
};

pub struct RoleGrantService<'a, M> {
    members: &'a M,
}

impl<'a, M> RoleGrantService<'a, M>
where
    M: MemberRoleManager,
{
    pub fn new(members: &'a M) -> Self {
        Self { members }
    }

    /// Grants a role to a member unless they already hold it.
    ///
    /// Issues at most one add call. A failed or timed out add is returned as
    /// `RoleGrantError::Discord` and not retried.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the member belongs to
    /// - `user_id` - Member receiving the role
    /// - `role_id` - Role to grant
    ///
    /// # Returns
    /// - `Ok(RoleGrant::Granted)` - Role was added
    /// - `Ok(RoleGrant::AlreadyHeld)` - Member already had the role, nothing changed
    /// - `Err(RoleGrantError::RoleNotFound)` - Role doesn't exist in the guild
    /// - `Err(RoleGrantError::Discord)` - Discord request failed
    pub async fn grant(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<RoleGrant, RoleGrantError> {
        let exists = self
            .members
            .role_exists(guild_id, role_id)
            .await
            .map_err(discord_error)?;
        if !exists {
            tracing::error!("Verified role {} does not exist in guild {}", role_id, guild_id);
            return Err(RoleGrantError::RoleNotFound(role_id.get()));
        }

        let current_roles = self
            .members
            .member_role_ids(guild_id, user_id)
            .await
            .map_err(discord_error)?;
        if current_roles.contains(&role_id) {
            tracing::debug!("User {} already has role {}", user_id, role_id);
            return Ok(RoleGrant::AlreadyHeld);
        }

        self.members
            .add_member_role(guild_id, user_id, role_id)
            .await
            .map_err(discord_error)?;

        tracing::info!(
            "Granted role {} to user {} in guild {}",
            role_id,
            user_id,
            guild_id
        );

        Ok(RoleGrant::Granted)
    }
}

fn discord_error(err: AppError) -> RoleGrantError {
    tracing::error!("Failed to grant verified role: {}", err);
    RoleGrantError::Discord(err.to_string())
}
