use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// DNS, connection, non-2xx status or body read failure.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Error decoding response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("API error {code}: {message}")]
    Api { code: i64, message: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
