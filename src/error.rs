use reqwest::StatusCode;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures of the hosted inference API.
///
/// None of these ever reach an HTTP caller: the text generator converts every
/// one of them into template output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inference client not initialized")]
    ClientUnavailable,

    #[error("Inference request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Inference API returned {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("Invalid inference response: {0}")]
    InvalidResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub fn api(status: StatusCode, message: impl Into<String>) -> Self {
        Error::Api {
            status,
            message: message.into(),
        }
    }
}
