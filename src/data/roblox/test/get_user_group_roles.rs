use super::*;

/// Tests fetching memberships of an account in several groups.
///
/// Verifies records are returned in the order Roblox delivers them.
///
/// Expected: Ok with both memberships in order
#[tokio::test]
async fn returns_memberships_in_order() -> Result<(), AppError> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/users/123/groups/roles");
            then.status(200).json_body(roblox::group_roles_response(&[
                (1, "X"),
                (35908807, "💚・Our Lovely Sense Member"),
            ]));
        })
        .await;

    let client = client_for(&server);
    let memberships = client.get_user_group_roles(123).await?;

    mock.assert_async().await;
    assert_eq!(memberships.len(), 2);
    assert_eq!(memberships[0].group.id, 1);
    assert_eq!(memberships[0].role.name, "X");
    assert_eq!(memberships[1].group.id, 35908807);
    assert_eq!(memberships[1].role.name, "💚・Our Lovely Sense Member");

    Ok(())
}

/// Tests fetching memberships of an account in no groups.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_for_no_groups() -> Result<(), AppError> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/users/123/groups/roles");
            then.status(200).json_body(roblox::group_roles_response(&[]));
        })
        .await;

    let client = client_for(&server);
    let memberships = client.get_user_group_roles(123).await?;

    assert!(memberships.is_empty());

    Ok(())
}

/// Tests that a rate-limited response is reported as an error.
///
/// Expected: Err(RobloxApiError::UnexpectedStatus) with status 429
#[tokio::test]
async fn fails_on_rate_limit() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/users/123/groups/roles");
            then.status(429);
        })
        .await;

    let client = client_for(&server);
    let result = client.get_user_group_roles(123).await;

    assert!(matches!(
        result,
        Err(AppError::RobloxErr(RobloxApiError::UnexpectedStatus { status: 429, .. }))
    ));
}
