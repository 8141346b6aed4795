//! Roblox group verification.
//!
//! `VerificationService` runs one verification attempt end to end:
//!
//! 1. extract a Roblox username from the member's display name
//! 2. resolve it to an account via the users API
//! 3. check the account's rank in the configured group via the groups API
//! 4. on success, grant the verified Discord role
//!
//! Each step short-circuits on failure and nothing is retried. The two Roblox lookups
//! run strictly one after the other. All state lives in the call, so concurrent
//! attempts never interfere with each other.

pub mod extract;
pub mod identity;
pub mod membership;

use serenity::all::{GuildId, UserId};

use crate::{
    config::VerificationConfig,
    data::{discord::MemberRoleManager, roblox::RobloxApi},
    model::verification::{VerificationOutcome, VerificationReport, VerificationResult},
    service::{discord::RoleGrantService, verification::extract::extract_roblox_username},
};

pub struct VerificationService<'a, R, M> {
    roblox: &'a R,
    members: &'a M,
    config: &'a VerificationConfig,
}

impl<'a, R, M> VerificationService<'a, R, M>
where
    R: RobloxApi,
    M: MemberRoleManager,
{
    /// Creates a new VerificationService instance.
    ///
    /// # Arguments
    /// - `roblox` - Roblox API used for both lookups
    /// - `members` - Discord member role access used for the role grant
    /// - `config` - Group requirement and verified role
    pub fn new(roblox: &'a R, members: &'a M, config: &'a VerificationConfig) -> Self {
        Self {
            roblox,
            members,
            config,
        }
    }

    /// Classifies a display name against the group requirement.
    ///
    /// Makes no network call when no username can be extracted, and never calls the
    /// groups API when the username doesn't resolve.
    pub async fn verify(&self, display_name: &str) -> VerificationResult {
        let Some(username) = extract_roblox_username(display_name) else {
            return VerificationResult {
                outcome: VerificationOutcome::UsernameNotExtractable,
                account: None,
                username: None,
            };
        };

        let Some(account) = self.resolve(&username).await else {
            return VerificationResult {
                outcome: VerificationOutcome::AccountNotFound,
                account: None,
                username: Some(username),
            };
        };

        let outcome = self
            .check_membership(
                account.id,
                self.config.group_id,
                &self.config.required_role_name,
            )
            .await;

        VerificationResult {
            outcome,
            account: Some(account),
            username: Some(username),
        }
    }

    /// Verifies a guild member and grants the verified role on success.
    ///
    /// The role grant is attempted exactly once, and only when the outcome is
    /// `Success`. A failed grant is reported in `role_grant` without touching the
    /// outcome.
    ///
    /// # Arguments
    /// - `display_name` - Member's display name in the guild
    /// - `guild_id` - Guild the member is verifying in
    /// - `user_id` - Member to grant the role to
    pub async fn verify_member(
        &self,
        display_name: &str,
        guild_id: GuildId,
        user_id: UserId,
    ) -> VerificationReport {
        let result = self.verify(display_name).await;

        tracing::info!(
            "Verification for {} ({}) in guild {}: {:?}",
            display_name,
            user_id,
            guild_id,
            result.outcome
        );

        let role_grant = if result.outcome.is_success() {
            let grant = RoleGrantService::new(self.members)
                .grant(guild_id, user_id, self.config.verified_role_id)
                .await;
            Some(grant)
        } else {
            None
        };

        VerificationReport { result, role_grant }
    }
}

#[cfg(test)]
mod test;
