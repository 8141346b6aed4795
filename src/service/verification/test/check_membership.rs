use super::*;

/// Tests an account holding the required rank in the group.
///
/// Expected: Success
#[tokio::test]
async fn succeeds_with_required_role() {
    let roblox = uppucs_api(FakeReply::Ok(vec![membership(SENSE_GROUP_ID, "X")]));
    let members = FakeMemberRoles::new(vec![], vec![]);
    let config = sense_config();
    let service = VerificationService::new(&roblox, &members, &config);

    let outcome = service.check_membership(123, SENSE_GROUP_ID, "X").await;

    assert_eq!(outcome, VerificationOutcome::Success);
    assert_eq!(roblox.group_lookups(), vec![123]);
}

/// Tests that the matching role name in another group doesn't count.
///
/// Verifies the scan matches on group id first and reports the rank held in the
/// target group.
///
/// Expected: WrongRole("Y")
#[tokio::test]
async fn matches_on_group_before_role() {
    let roblox = uppucs_api(FakeReply::Ok(vec![
        membership(1, "X"),
        membership(SENSE_GROUP_ID, "Y"),
    ]));
    let members = FakeMemberRoles::new(vec![], vec![]);
    let config = sense_config();
    let service = VerificationService::new(&roblox, &members, &config);

    let outcome = service.check_membership(123, SENSE_GROUP_ID, "X").await;

    assert_eq!(outcome, VerificationOutcome::WrongRole("Y".to_string()));
}

/// Tests that role names are compared case-sensitively.
///
/// Expected: WrongRole with the rank as Roblox spelled it
#[tokio::test]
async fn compares_role_name_case_sensitively() {
    let roblox = uppucs_api(FakeReply::Ok(vec![membership(SENSE_GROUP_ID, "member")]));
    let members = FakeMemberRoles::new(vec![], vec![]);
    let config = sense_config();
    let service = VerificationService::new(&roblox, &members, &config);

    let outcome = service
        .check_membership(123, SENSE_GROUP_ID, "Member")
        .await;

    assert_eq!(outcome, VerificationOutcome::WrongRole("member".to_string()));
}

/// Tests that only the first record for the group is considered.
///
/// Expected: WrongRole from the first record even though a later one matches
#[tokio::test]
async fn first_group_record_wins() {
    let roblox = uppucs_api(FakeReply::Ok(vec![
        membership(SENSE_GROUP_ID, "Guest"),
        membership(SENSE_GROUP_ID, "X"),
    ]));
    let members = FakeMemberRoles::new(vec![], vec![]);
    let config = sense_config();
    let service = VerificationService::new(&roblox, &members, &config);

    let outcome = service.check_membership(123, SENSE_GROUP_ID, "X").await;

    assert_eq!(outcome, VerificationOutcome::WrongRole("Guest".to_string()));
}

/// Tests an account with no record for the group.
///
/// Expected: NotInGroup
#[tokio::test]
async fn reports_not_in_group() {
    let roblox = uppucs_api(FakeReply::Ok(vec![membership(1, "X"), membership(2, "X")]));
    let members = FakeMemberRoles::new(vec![], vec![]);
    let config = sense_config();
    let service = VerificationService::new(&roblox, &members, &config);

    let outcome = service.check_membership(123, SENSE_GROUP_ID, "X").await;

    assert_eq!(outcome, VerificationOutcome::NotInGroup);
}

/// Tests an account in no groups at all.
///
/// Expected: NotInGroup
#[tokio::test]
async fn reports_not_in_group_for_empty_list() {
    let roblox = uppucs_api(FakeReply::Ok(vec![]));
    let members = FakeMemberRoles::new(vec![], vec![]);
    let config = sense_config();
    let service = VerificationService::new(&roblox, &members, &config);

    let outcome = service.check_membership(123, SENSE_GROUP_ID, "X").await;

    assert_eq!(outcome, VerificationOutcome::NotInGroup);
}

/// Tests a groups API failure.
///
/// Expected: ApiError
#[tokio::test]
async fn reports_api_error() {
    let roblox = uppucs_api(FakeReply::Status(503));
    let members = FakeMemberRoles::new(vec![], vec![]);
    let config = sense_config();
    let service = VerificationService::new(&roblox, &members, &config);

    let outcome = service.check_membership(123, SENSE_GROUP_ID, "X").await;

    assert_eq!(outcome, VerificationOutcome::ApiError);
}
