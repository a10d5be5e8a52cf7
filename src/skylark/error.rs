use thiserror::Error;

use crate::skylark::session::SessionError;

pub type Result<T> = core::result::Result<T, SkylarkError>;

#[derive(Error, Debug)]
pub enum SkylarkError {
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Logging setup error: {0}")]
    LoggingSetup(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}
