use thiserror::Error;

#[derive(Error, Debug)]
pub enum JsonError {
    #[error("decode error: {message}")]
    DecodeError { message: String },
}

pub type Result<T> = std::result::Result<T, JsonError>;
