//! SENSE Support Bot Test Utils
//!
//! Shared testing utilities for the bot's unit tests.
//!
//! # Overview
//!
//! - **serenity**: factories building Serenity model objects (members, channels) from
//!   JSON, the same way they arrive from Discord
//! - **fixture**: JSON bodies of the Roblox users and groups APIs, for mock servers
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{fixture::roblox, serenity::create_test_member};
//!
//! let member = create_test_member(1, 2, "discord_user", Some("@uppucs"), &[]);
//! let body = roblox::group_roles_response(&[(35908807, "Member")]);
//! ```

pub mod fixture;
pub mod serenity;
