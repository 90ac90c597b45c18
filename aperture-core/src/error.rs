use aperture_model::ModelError;
use thiserror::Error;

/// Failures talking to the PhotoPrism HTTP API.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Unauthorized - the session is missing or expired")]
    Unauthorized,

    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Whether the caller should re-authenticate before retrying.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PagingError {
    #[error("Invalid page cursor: {0:?}")]
    InvalidCursor(String),
}

/// Errors surfaced by list-backed repositories.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Paging(#[from] PagingError),

    #[error("Invalid {entity} in server response: {source}")]
    InvalidEntity {
        entity: &'static str,
        #[source]
        source: ModelError,
    },
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
