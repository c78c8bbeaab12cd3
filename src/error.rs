use thiserror::Error;

use crate::layout::RingId;

#[derive(Error, Debug)]
pub enum RotundaError {
    #[error("Invalid value for {field}: {value:?}")]
    InvalidInput { field: &'static str, value: String },

    #[error("Ring not found: {0}")]
    UnknownRing(RingId),

    #[error("Invalid color: {0:?}")]
    InvalidColor(String),

    #[error("Advisory error: {0}")]
    Advisory(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl RotundaError {
    pub fn invalid(field: &'static str, value: impl ToString) -> Self {
        Self::InvalidInput {
            field,
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RotundaError>;
