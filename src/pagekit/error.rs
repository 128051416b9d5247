use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageKitError {
    #[error("Invalid page id: {0}")]
    InvalidPageId(String),

    #[error("Page is protected: {0}")]
    Protected(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, PageKitError>;
