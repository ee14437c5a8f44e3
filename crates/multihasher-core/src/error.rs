//! Error types for Multihasher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("intention text is empty")]
    EmptyIntention,

    #[error("cascade already running: {0}")]
    AlreadyRunning(String),

    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("json error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;
