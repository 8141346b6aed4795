use thiserror::Error;

/// Errors returned by the Roblox web APIs that are not transport failures.
#[derive(Error, Debug)]
pub enum RobloxApiError {
    /// The API answered with anything other than 200 OK.
    #[error("Roblox API {endpoint} responded with status {status}")]
    UnexpectedStatus {
        /// Endpoint path that was requested
        endpoint: String,
        /// HTTP status code of the response
        status: u16,
    },
}
