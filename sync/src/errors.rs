use crate::kind::DataKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("scope not supported for {kind}: {message}")]
    ScopeUnsupported { kind: DataKind, message: String },

    #[error("no accounts available: {message}")]
    EmptyRoster { message: String },

    #[error("unknown account: {account_id}")]
    UnknownAccount { account_id: String },

    #[error("{kind} does not paginate")]
    NotPaginated { kind: DataKind },

    #[error("page out of range: {message}")]
    PageOutOfRange { message: String },
}

pub type Result<T> = std::result::Result<T, SyncError>;
