use super::*;

/// Tests resolving a username that Roblox knows.
///
/// Verifies the request body carries the exact username and the banned-users flag,
/// and that the first returned record is mapped to an account.
///
/// Expected: Ok(Some(account))
#[tokio::test]
async fn returns_first_matching_account() -> Result<(), AppError> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/usernames/users")
                .json_body(roblox::username_lookup_request("uppucs"));
            then.status(200).json_body(roblox::username_lookup_response(&[
                (123, "uppucs", "Uppu"),
                (456, "uppucs_alt", "Alt"),
            ]));
        })
        .await;

    let client = client_for(&server);
    let account = client.find_user_by_username("uppucs").await?;

    mock.assert_async().await;
    let account = account.unwrap();
    assert_eq!(account.id, 123);
    assert_eq!(account.name, "uppucs");
    assert_eq!(account.display_name, "Uppu");

    Ok(())
}

/// Tests resolving a username with no matching account.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_empty_data() -> Result<(), AppError> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/usernames/users");
            then.status(200)
                .json_body(roblox::username_lookup_response(&[]));
        })
        .await;

    let client = client_for(&server);
    let account = client.find_user_by_username("nobody").await?;

    assert!(account.is_none());

    Ok(())
}

/// Tests that a server error is reported instead of parsed.
///
/// Expected: Err(RobloxApiError::UnexpectedStatus) with status 500
#[tokio::test]
async fn fails_on_server_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/usernames/users");
            then.status(500).body("internal error");
        })
        .await;

    let client = client_for(&server);
    let result = client.find_user_by_username("uppucs").await;

    assert!(matches!(
        result,
        Err(AppError::RobloxErr(RobloxApiError::UnexpectedStatus { status: 500, .. }))
    ));
}

/// Tests that an undecodable body surfaces as a reqwest error.
///
/// Expected: Err(AppError::ReqwestErr)
#[tokio::test]
async fn fails_on_malformed_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/usernames/users");
            then.status(200).body("not json");
        })
        .await;

    let client = client_for(&server);
    let result = client.find_user_by_username("uppucs").await;

    assert!(matches!(result, Err(AppError::ReqwestErr(_))));
}
