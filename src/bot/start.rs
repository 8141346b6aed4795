use serenity::all::{Client, GatewayIntents};
use std::sync::Arc;

use crate::{bot::handler::Handler, config::Config, data::roblox::RobloxClient, error::AppError};

/// Builds the Discord client with the bot's event handler.
///
/// # Arguments
/// - `config` - Application configuration, shared with the handler
/// - `roblox` - Roblox API client used for verification
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - Client could not be built
pub async fn init_bot(config: Arc<Config>, roblox: RobloxClient) -> Result<Client, AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let token = config.discord_bot_token.clone();
    let handler = Handler::new(config, roblox);

    let client = Client::builder(&token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Starts the Discord bot, blocking until the gateway connection ends.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
