//! Data access layer.
//!
//! Repositories and API clients that talk to Roblox and Discord. Everything here returns
//! `Result<_, AppError>` and leaves interpretation of failures to the service layer.

pub mod discord;
pub mod roblox;
