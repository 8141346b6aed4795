use std::str::FromStr;

use serenity::all::{ChannelId, RoleId};
use url::Url;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_ROBLOX_GROUP_ID: u64 = 35908807;
const DEFAULT_REQUIRED_ROLE_NAME: &str = "💚・Our Lovely Sense Member";
const DEFAULT_VERIFIED_ROLE_ID: u64 = 1431176844279021578;
const DEFAULT_STAFF_ROLE_ID: u64 = 1431246790954451156;
const DEFAULT_TICKET_CATEGORY_ID: u64 = 1430958759852769373;
const DEFAULT_TICKET_CHANNEL_PREFIX: &str = "ticket-";
const DEFAULT_ROBLOX_USERS_API_URL: &str = "https://users.roblox.com";
const DEFAULT_ROBLOX_GROUPS_API_URL: &str = "https://groups.roblox.com";

/// Requirements a member has to meet to be granted the verified role.
///
/// Handed to `VerificationService` at construction so the workflow never reads
/// global state.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationConfig {
    /// Roblox group the member must belong to.
    pub group_id: u64,
    /// Exact (case-sensitive) name of the rank the member must hold in the group.
    pub required_role_name: String,
    /// Discord role granted after a successful verification.
    pub verified_role_id: RoleId,
}

/// Where ticket channels are created and how they are named.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketConfig {
    /// Category the ticket tool creates channels under.
    pub category_id: ChannelId,
    /// Lowercase substring every ticket channel name contains.
    pub channel_prefix: String,
}

pub struct Config {
    pub discord_bot_token: String,

    pub verification: VerificationConfig,
    pub ticket: TicketConfig,

    /// Role pinged when a member asks for live help.
    pub staff_role_id: RoleId,

    pub roblox_users_api_url: Url,
    pub roblox_groups_api_url: Url,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Only `DISCORD_BOT_TOKEN` is required, every other value falls back to the
    /// community's production settings.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_bot_token = lookup("DISCORD_BOT_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?;

        let group_id: u64 = parse_or(&lookup, "ROBLOX_GROUP_ID", DEFAULT_ROBLOX_GROUP_ID)?;
        let verified_role_id: u64 =
            parse_or(&lookup, "DISCORD_VERIFIED_ROLE_ID", DEFAULT_VERIFIED_ROLE_ID)?;
        let staff_role_id: u64 = parse_or(&lookup, "STAFF_ROLE_ID", DEFAULT_STAFF_ROLE_ID)?;
        let category_id: u64 =
            parse_or(&lookup, "TICKET_CATEGORY_ID", DEFAULT_TICKET_CATEGORY_ID)?;

        Ok(Self {
            discord_bot_token,
            verification: VerificationConfig {
                group_id,
                required_role_name: lookup("ROBLOX_REQUIRED_ROLE_NAME")
                    .unwrap_or_else(|| DEFAULT_REQUIRED_ROLE_NAME.to_string()),
                verified_role_id: RoleId::new(non_zero("DISCORD_VERIFIED_ROLE_ID", verified_role_id)?),
            },
            ticket: TicketConfig {
                category_id: ChannelId::new(non_zero("TICKET_CATEGORY_ID", category_id)?),
                channel_prefix: lookup("TICKET_CHANNEL_PREFIX")
                    .unwrap_or_else(|| DEFAULT_TICKET_CHANNEL_PREFIX.to_string())
                    .to_lowercase(),
            },
            staff_role_id: RoleId::new(non_zero("STAFF_ROLE_ID", staff_role_id)?),
            roblox_users_api_url: api_base_url(parse_or(
                &lookup,
                "ROBLOX_USERS_API_URL",
                Url::parse(DEFAULT_ROBLOX_USERS_API_URL)?,
            )?),
            roblox_groups_api_url: api_base_url(parse_or(
                &lookup,
                "ROBLOX_GROUPS_API_URL",
                Url::parse(DEFAULT_ROBLOX_GROUPS_API_URL)?,
            )?),
        })
    }
}

/// Parses an optional variable, using `default` when it is unset.
fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                reason: e.to_string(),
            }),
        None => Ok(default),
    }
}

/// Ends the path with `/` so `Url::join` appends endpoints instead of replacing the
/// last segment of a prefixed base such as `https://proxy.example/roblox`.
fn api_base_url(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    url
}

/// Discord snowflakes can't be zero, serenity panics on `new(0)`.
fn non_zero(name: &str, id: u64) -> Result<u64, ConfigError> {
    if id == 0 {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: "id must be non-zero".to_string(),
        });
    }

    Ok(id)
}
