//! Discord bot for the SENSE support tickets.
//!
//! The bot greets new ticket channels with the support center menu, answers the `/sense`
//! slash command, and handles the menu's buttons, including automatic Roblox group
//! verification.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive channel creation events for ticket detection
//! - `GUILD_MEMBERS` - Member data for display names and role grants (privileged intent)
//!
//! Interactions are delivered regardless of intents.

pub mod handler;
pub mod menu;
pub mod start;
