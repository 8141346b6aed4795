use std::time::Duration;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Upper bound for a single Roblox API request. Requests are never retried.
const ROBLOX_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Initializes the tracing subscriber.
///
/// Respects the `RUST_LOG` environment variable for filtering and defaults to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Builds the HTTP client shared by every Roblox API request.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Client with request timeout and user agent set
/// - `Err(AppError::ReqwestErr)` - TLS backend could not be initialized
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .timeout(ROBLOX_REQUEST_TIMEOUT)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(client)
}
