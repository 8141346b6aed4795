//! In-memory fakes of the data layer traits.
//!
//! The fakes record every call so tests can assert which external requests a
//! verification attempt made and how many times.

use serenity::all::{GuildId, RoleId, UserId};
use serenity::async_trait;
use std::sync::Mutex;

use crate::{
    data::{discord::MemberRoleManager, roblox::RobloxApi},
    error::{roblox::RobloxApiError, AppError},
    model::roblox::{GroupMembership, GroupRef, GroupRoleRef, RobloxAccount},
};

/// Canned reply of a fake lookup.
#[derive(Clone)]
pub enum FakeReply<T> {
    Ok(T),
    /// Fail with the given HTTP status.
    Status(u16),
}

impl<T: Clone> FakeReply<T> {
    fn to_result(&self, endpoint: &str) -> Result<T, AppError> {
        match self {
            Self::Ok(value) => Ok(value.clone()),
            Self::Status(status) => Err(RobloxApiError::UnexpectedStatus {
                endpoint: endpoint.to_string(),
                status: *status,
            }
            .into()),
        }
    }
}

pub struct FakeRobloxApi {
    user: FakeReply<Option<RobloxAccount>>,
    groups: FakeReply<Vec<GroupMembership>>,
    user_lookups: Mutex<Vec<String>>,
    group_lookups: Mutex<Vec<u64>>,
}

impl FakeRobloxApi {
    pub fn new(
        user: FakeReply<Option<RobloxAccount>>,
        groups: FakeReply<Vec<GroupMembership>>,
    ) -> Self {
        Self {
            user,
            groups,
            user_lookups: Mutex::new(Vec::new()),
            group_lookups: Mutex::new(Vec::new()),
        }
    }

    /// Usernames looked up so far.
    pub fn user_lookups(&self) -> Vec<String> {
        self.user_lookups.lock().unwrap().clone()
    }

    /// Account ids whose groups were fetched so far.
    pub fn group_lookups(&self) -> Vec<u64> {
        self.group_lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl RobloxApi for FakeRobloxApi {
    async fn find_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<RobloxAccount>, AppError> {
        self.user_lookups.lock().unwrap().push(username.to_string());
        self.user.to_result("v1/usernames/users")
    }

    async fn get_user_group_roles(&self, user_id: u64) -> Result<Vec<GroupMembership>, AppError> {
        self.group_lookups.lock().unwrap().push(user_id);
        self.groups.to_result("v2/users/groups/roles")
    }
}

pub struct FakeMemberRoles {
    guild_roles: Vec<RoleId>,
    member_roles: Mutex<Vec<RoleId>>,
    add_calls: Mutex<Vec<RoleId>>,
    fail_add: bool,
}

impl FakeMemberRoles {
    pub fn new(guild_roles: Vec<RoleId>, member_roles: Vec<RoleId>) -> Self {
        Self {
            guild_roles,
            member_roles: Mutex::new(member_roles),
            add_calls: Mutex::new(Vec::new()),
            fail_add: false,
        }
    }

    /// Makes every add call fail as if Discord timed out.
    pub fn failing_add(mut self) -> Self {
        self.fail_add = true;
        self
    }

    pub fn add_calls(&self) -> Vec<RoleId> {
        self.add_calls.lock().unwrap().clone()
    }

    pub fn current_roles(&self) -> Vec<RoleId> {
        self.member_roles.lock().unwrap().clone()
    }
}

#[async_trait]
impl MemberRoleManager for FakeMemberRoles {
    async fn role_exists(&self, _guild_id: GuildId, role_id: RoleId) -> Result<bool, AppError> {
        Ok(self.guild_roles.contains(&role_id))
    }

    async fn member_role_ids(
        &self,
        _guild_id: GuildId,
        _user_id: UserId,
    ) -> Result<Vec<RoleId>, AppError> {
        Ok(self.current_roles())
    }

    async fn add_member_role(
        &self,
        _guild_id: GuildId,
        _user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError> {
        self.add_calls.lock().unwrap().push(role_id);
        if self.fail_add {
            return Err(serenity::Error::Other("request timed out").into());
        }

        self.member_roles.lock().unwrap().push(role_id);
        Ok(())
    }
}

pub fn account(id: u64, name: &str, display_name: &str) -> RobloxAccount {
    RobloxAccount {
        id,
        name: name.to_string(),
        display_name: display_name.to_string(),
    }
}

pub fn membership(group_id: u64, role_name: &str) -> GroupMembership {
    GroupMembership {
        group: GroupRef { id: group_id },
        role: GroupRoleRef {
            name: role_name.to_string(),
        },
    }
}
