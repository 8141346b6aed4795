use crate::{
    data::{discord::MemberRoleManager, roblox::RobloxApi},
    model::{roblox::GroupMembership, verification::VerificationOutcome},
    service::verification::VerificationService,
};

impl<'a, R, M> VerificationService<'a, R, M>
where
    R: RobloxApi,
    M: MemberRoleManager,
{
    /// Checks whether an account holds the required rank in a group.
    ///
    /// # Arguments
    /// - `account_id` - Roblox user id
    /// - `group_id` - Group the account must belong to
    /// - `required_role_name` - Exact (case-sensitive) rank name
    ///
    /// # Returns
    /// - `Success` - First record for the group has the required rank
    /// - `WrongRole(name)` - First record for the group has another rank
    /// - `NotInGroup` - No record for the group
    /// - `ApiError` - The groups API failed
    pub async fn check_membership(
        &self,
        account_id: u64,
        group_id: u64,
        required_role_name: &str,
    ) -> VerificationOutcome {
        match self.roblox.get_user_group_roles(account_id).await {
            Ok(memberships) => classify_membership(&memberships, group_id, required_role_name),
            Err(e) => {
                tracing::warn!(
                    "Failed to fetch group roles for Roblox user {}: {}",
                    account_id,
                    e
                );
                VerificationOutcome::ApiError
            }
        }
    }
}

/// Classifies memberships against the group requirement.
///
/// Only the first record for `group_id` is considered.
fn classify_membership(
    memberships: &[GroupMembership],
    group_id: u64,
    required_role_name: &str,
) -> VerificationOutcome {
    match memberships.iter().find(|m| m.group.id == group_id) {
        Some(membership) if membership.role.name == required_role_name => {
            VerificationOutcome::Success
        }
        Some(membership) => VerificationOutcome::WrongRole(membership.role.name.clone()),
        None => VerificationOutcome::NotInGroup,
    }
}
