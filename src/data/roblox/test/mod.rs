use crate::{
    data::roblox::{RobloxApi, RobloxClient},
    error::{roblox::RobloxApiError, AppError},
};
use httpmock::prelude::*;
use test_utils::fixture::roblox;
use url::Url;

mod find_user_by_username;
mod get_user_group_roles;

/// Builds a client pointing both APIs at the mock server.
fn client_for(server: &MockServer) -> RobloxClient {
    let base = Url::parse(&server.base_url()).unwrap();
    RobloxClient::new(reqwest::Client::new(), base.clone(), base)
}
