use crate::{
    data::{discord::MemberRoleManager, roblox::RobloxApi},
    model::roblox::RobloxAccount,
    service::verification::VerificationService,
};

impl<'a, R, M> VerificationService<'a, R, M>
where
    R: RobloxApi,
    M: MemberRoleManager,
{
    /// Resolves a username to its Roblox account.
    ///
    /// A missing account and a failed lookup both yield `None`; the users API gives no
    /// reliable way to tell them apart, so both are reported to the member as "account
    /// not found". Failures are logged.
    ///
    /// # Arguments
    /// - `username` - Exact (case-sensitive) username to look up
    ///
    /// # Returns
    /// - `Some(RobloxAccount)` - First account Roblox matched
    /// - `None` - No match, or the lookup failed
    pub async fn resolve(&self, username: &str) -> Option<RobloxAccount> {
        match self.roblox.find_user_by_username(username).await {
            Ok(Some(account)) => Some(account),
            Ok(None) => {
                tracing::debug!("No Roblox account matches username {}", username);
                None
            }
            Err(e) => {
                tracing::warn!("Failed to look up Roblox user {}: {}", username, e);
                None
            }
        }
    }
}
