//! Error types for the bot.
//!
//! `AppError` is the top-level error type returned by startup code and by the data layer.
//! The service layer never lets an `AppError` escape a verification attempt; it classifies
//! the failure into a `VerificationOutcome` or `RoleGrantError` instead, so a fault in one
//! interaction never reaches the event loop.

pub mod config;
pub mod roblox;

use thiserror::Error;

use crate::error::{config::ConfigError, roblox::RobloxApiError};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Roblox API answered but not with a usable response.
    #[error(transparent)]
    RobloxErr(#[from] RobloxApiError),

    /// HTTP client request error from reqwest.
    ///
    /// Covers connection failures, timeouts and JSON decoding of response bodies.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Failed to build a Roblox API URL from the configured base URL.
    #[error(transparent)]
    UrlErr(#[from] url::ParseError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
