use serde_json::Value;
use thiserror::Error;

/// A video record that cannot be scored.
#[derive(Debug, Error)]
pub enum MalformedInputError {
    #[error("video record has no createdAt timestamp")]
    MissingCreatedAt,

    #[error("invalid createdAt timestamp: {value:?}")]
    InvalidCreatedAt {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("createdAt must be a string, got {value}")]
    CreatedAtNotString { value: Value },

    #[error("likeCount must be a number, got {value}")]
    InvalidLikeCount { value: Value },

    #[error("comments must be an array, object or string, got {value}")]
    InvalidComments { value: Value },
}

/// Add context to input read errors
pub fn read_context(source: &str) -> String {
    format!("Failed to read videos from: {}", source)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Add context to output write errors
pub fn write_context(target: &str) -> String {
    format!("Failed to write ranked videos to: {}", target)
}
