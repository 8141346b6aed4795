//! Verification outcome models.
//!
//! A verification attempt always ends in exactly one `VerificationOutcome`. Granting the
//! Discord role is a follow-up action whose failure is reported separately through
//! `RoleGrantError` and never changes the outcome.

use thiserror::Error;

use crate::model::roblox::RobloxAccount;

/// Classification of a single verification attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// Member is in the group with the required rank.
    Success,
    /// Member is in the group but holds a different rank (carried for display).
    WrongRole(String),
    /// Account has no membership record for the configured group.
    NotInGroup,
    /// No account matched the username, or the users API could not be reached.
    AccountNotFound,
    /// Display name contains nothing that could be a Roblox username.
    UsernameNotExtractable,
    /// The groups API failed or answered with an unusable response.
    ApiError,
}

impl VerificationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Result of a verification attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    pub outcome: VerificationOutcome,
    /// Present whenever the username resolved, regardless of the membership outcome.
    pub account: Option<RobloxAccount>,
    /// Username extracted from the display name, if any.
    pub username: Option<String>,
}

/// What happened when granting the verified role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleGrant {
    /// Role was added to the member.
    Granted,
    /// Member already had the role, nothing was changed.
    AlreadyHeld,
}

/// Failure to grant the verified role after a successful verification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoleGrantError {
    /// The configured verified role doesn't exist in the guild.
    #[error("Verified role {0} not found in guild")]
    RoleNotFound(u64),
    /// Discord rejected the request or it timed out.
    #[error("{0}")]
    Discord(String),
}

/// Everything the bot needs to render the reply to a verification request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationReport {
    pub result: VerificationResult,
    /// `Some` if and only if the outcome is `Success`.
    pub role_grant: Option<Result<RoleGrant, RoleGrantError>>,
}
