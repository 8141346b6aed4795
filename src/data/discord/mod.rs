pub mod member;

pub use member::{DiscordMemberRepository, MemberRoleManager};
