use thiserror::Error;

#[derive(Error, Debug)]
pub enum XsdscopeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Index error: {0}")]
    Index(String),
    #[error(transparent)]
    Api(#[from] xsdscope_api::ApiError),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, XsdscopeError>;
