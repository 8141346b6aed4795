use crate::{
    config::VerificationConfig,
    model::verification::{RoleGrant, RoleGrantError, VerificationOutcome},
    service::verification::VerificationService,
    test_support::{account, membership, FakeMemberRoles, FakeReply, FakeRobloxApi},
};
use serenity::all::{GuildId, RoleId, UserId};

mod check_membership;

const SENSE_GROUP_ID: u64 = 35908807;
const SENSE_MEMBER_ROLE: &str = "💚・Our Lovely Sense Member";
const VERIFIED_ROLE: RoleId = RoleId::new(1431176844279021578);

fn sense_config() -> VerificationConfig {
    VerificationConfig {
        group_id: SENSE_GROUP_ID,
        required_role_name: SENSE_MEMBER_ROLE.to_string(),
        verified_role_id: VERIFIED_ROLE,
    }
}

/// Fake API where `uppucs` resolves to account 123 with the given memberships.
fn uppucs_api(groups: FakeReply<Vec<crate::model::roblox::GroupMembership>>) -> FakeRobloxApi {
    FakeRobloxApi::new(
        FakeReply::Ok(Some(account(123, "uppucs", "Uppu"))),
        groups,
    )
}
