//! Roblox web API access.
//!
//! `RobloxApi` is the seam between the verification service and Roblox. The production
//! implementation, `RobloxClient`, issues exactly one HTTP request per call and never
//! retries. Both methods surface every fault as an `AppError`; deciding what a fault
//! means for the member is left to the service layer.

use serenity::async_trait;
use url::Url;

use crate::{
    error::{roblox::RobloxApiError, AppError},
    model::roblox::{
        GroupMembership, GroupMembershipResponse, RobloxAccount, UsernameLookupRequest,
        UsernameLookupResponse,
    },
};

/// Lookups against the Roblox users and groups APIs.
#[async_trait]
pub trait RobloxApi: Send + Sync {
    /// Looks up an account by its exact username.
    ///
    /// # Returns
    /// - `Ok(Some(RobloxAccount))` - First account Roblox matched
    /// - `Ok(None)` - Roblox answered with an empty match list
    /// - `Err(AppError)` - Transport failure, non-200 status or undecodable body
    async fn find_user_by_username(&self, username: &str)
        -> Result<Option<RobloxAccount>, AppError>;

    /// Fetches every group membership of an account, in the order Roblox returns them.
    ///
    /// # Returns
    /// - `Ok(Vec<GroupMembership>)` - Possibly empty list of memberships
    /// - `Err(AppError)` - Transport failure, non-200 status or undecodable body
    async fn get_user_group_roles(&self, user_id: u64) -> Result<Vec<GroupMembership>, AppError>;
}

/// HTTP implementation of `RobloxApi`.
///
/// Cheap to clone; `reqwest::Client` shares its connection pool between clones.
#[derive(Clone)]
pub struct RobloxClient {
    http_client: reqwest::Client,
    users_api_url: Url,
    groups_api_url: Url,
}

impl RobloxClient {
    /// Creates a new client.
    ///
    /// # Arguments
    /// - `http_client` - Shared reqwest client
    /// - `users_api_url` - Base URL of the users API (`https://users.roblox.com`)
    /// - `groups_api_url` - Base URL of the groups API (`https://groups.roblox.com`)
    pub fn new(http_client: reqwest::Client, users_api_url: Url, groups_api_url: Url) -> Self {
        Self {
            http_client,
            users_api_url,
            groups_api_url,
        }
    }

    fn ensure_ok(response: &reqwest::Response, endpoint: &str) -> Result<(), AppError> {
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(RobloxApiError::UnexpectedStatus {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        Ok(())
    }
}

#[async_trait]
impl RobloxApi for RobloxClient {
    async fn find_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<RobloxAccount>, AppError> {
        let endpoint = "v1/usernames/users";
        let url = self.users_api_url.join(endpoint)?;

        // Banned accounts are kept in the lookup so the response shape matches what
        // the community's verification flow has always used.
        let body = UsernameLookupRequest {
            usernames: vec![username],
            exclude_banned_users: false,
        };

        let response = self.http_client.post(url).json(&body).send().await?;
        Self::ensure_ok(&response, endpoint)?;

        let lookup = response.json::<UsernameLookupResponse>().await?;

        Ok(lookup.data.into_iter().next())
    }

    async fn get_user_group_roles(&self, user_id: u64) -> Result<Vec<GroupMembership>, AppError> {
        let endpoint = format!("v2/users/{}/groups/roles", user_id);
        let url = self.groups_api_url.join(&endpoint)?;

        let response = self.http_client.get(url).send().await?;
        Self::ensure_ok(&response, &endpoint)?;

        let memberships = response.json::<GroupMembershipResponse>().await?;

        Ok(memberships.data)
    }
}

#[cfg(test)]
mod test;
