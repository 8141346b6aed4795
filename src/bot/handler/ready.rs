//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway. The handler logs the active verification settings and
//! registers the `/sense` slash command globally.

use serenity::all::{Command, Context, CreateCommand, Ready};

use crate::config::Config;

pub const SENSE_COMMAND: &str = "sense";

/// Definition of the `/sense` slash command.
pub fn sense_command() -> CreateCommand {
    CreateCommand::new(SENSE_COMMAND)
        .description("Open SENSE Support Center (Only in ticket channels)")
}

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `config` - Application configuration, logged for operators
/// - `ctx` - Discord context for registering commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(config: &Config, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);
    tracing::info!(
        "Serving {} guild(s) - Roblox group {}, required role '{}', verified role {}",
        ready.guilds.len(),
        config.verification.group_id,
        config.verification.required_role_name,
        config.verification.verified_role_id
    );

    match Command::set_global_commands(&ctx.http, vec![sense_command()]).await {
        Ok(commands) => tracing::info!("Synced {} slash command(s)", commands.len()),
        Err(e) => tracing::error!("Failed to sync slash commands: {:?}", e),
    }
}
