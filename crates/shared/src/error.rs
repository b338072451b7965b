use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error message carried in the API's `error` key. The API has no
/// structured taxonomy beyond error-key vs success-key responses.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
