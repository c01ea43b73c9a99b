use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Failed to get access token: {0}")]
    AuthenticationError(String),

    #[error("Spotify API unexpected response: {0}")]
    ProtocolError(String),

    #[error("Playlist {0:?} not found")]
    NotFoundError(String),

    #[error("HTTP transport error: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Failed to write output file: {0}")]
    OutputError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ProtocolError(format!("malformed response body: {err}"))
    }
}
