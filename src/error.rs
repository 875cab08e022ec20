use thiserror::Error;

use crate::schema::Kind;

#[derive(Error, Debug)]
pub enum WalletFeedError {
    #[error("record has no identifier and cannot be updated")]
    MissingRecordId,

    #[error("fetching {kind} records failed: {message}")]
    FetchFailed { kind: Kind, message: String },

    #[error("writing {kind} record failed: {message}")]
    WriteFailed { kind: Kind, message: String },

    #[error("unparseable date/time: {0}")]
    UnparseableDateTime(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WalletFeedError>;
