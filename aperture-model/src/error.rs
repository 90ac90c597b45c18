use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidMediaType(String),
    InvalidPersonId(String),
    InvalidTimestamp(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidMediaType(raw) => {
                write!(f, "unknown media type: {raw:?}")
            }
            ModelError::InvalidPersonId(raw) => {
                write!(f, "not a subject UID or face ID: {raw:?}")
            }
            ModelError::InvalidTimestamp(raw) => {
                write!(f, "invalid timestamp: {raw:?}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
