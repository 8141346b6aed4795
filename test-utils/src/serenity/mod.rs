//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity objects by deserializing JSON, simulating what
//! Discord's API would return, with sensible defaults for every field the tests don't
//! care about.
//!
//! # Available Factories
//!
//! - `member::create_test_member` - Create Serenity Member objects
//! - `channel::create_test_guild_channel` - Create Serenity GuildChannel objects

pub mod channel;
pub mod member;

pub use channel::create_test_guild_channel;
pub use member::create_test_member;
