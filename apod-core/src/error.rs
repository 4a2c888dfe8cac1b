use serde::Serialize;
use thiserror::Error;

/// Message surfaced for every non-2xx upstream response.
pub const LOAD_FAILED_MESSAGE: &str = "Could not load data";

/// Error handed to the rendering layer when the upstream service answers
/// with a non-success status. The message does not depend on the status;
/// the only way to build one is [`PageError::default`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct PageError {
    message: String,
}

impl PageError {
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for PageError {
    fn default() -> Self {
        Self { message: LOAD_FAILED_MESSAGE.to_string() }
    }
}
