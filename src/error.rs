//! Library error types.
//!
//! Most helpers in this crate are total functions. Only JSON body aggregation
//! can fail, and it reports failures through [`BodyError`].

use thiserror::Error;

/// Errors from [`get_json_response`](crate::utils::json::get_json_response).
#[derive(Debug, Error)]
pub enum BodyError {
    /// The chunk stream yielded an error before it was exhausted.
    #[error("failed to read body stream")]
    Stream(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The collected body is empty or not valid JSON.
    #[error("failed to parse JSON body")]
    Parse(#[from] serde_json::Error),

    #[error("body exceeds the {limit} byte limit")]
    TooLarge { limit: usize },
}

impl BodyError {
    pub fn is_parse(&self) -> bool {
        matches!(self, BodyError::Parse(_))
    }
}
