use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("request body must be a JSON object, found {0}")]
    NotAnObject(&'static str),
}
