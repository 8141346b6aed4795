mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use crate::{config::Config, data::roblox::RobloxClient, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Arc::new(Config::from_env()?);

    let http_client = startup::setup_reqwest_client()?;
    let roblox = RobloxClient::new(
        http_client,
        config.roblox_users_api_url.clone(),
        config.roblox_groups_api_url.clone(),
    );

    tracing::info!("Starting SENSE support bot");

    let client = bot::start::init_bot(config, roblox).await?;
    bot::start::start_bot(client).await
}
