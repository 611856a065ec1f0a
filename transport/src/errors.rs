use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Parameters invalid: {message}")]
    ParametersInvalid { message: String },

    #[error("Network error: {message}")]
    NetworkError { message: String },

    #[error("Server returned status {code}: {message}")]
    StatusError { code: u16, message: String },

    #[error("Parse result error: {message}")]
    ParseResultError { message: String },

    #[error("Client error: {message}")]
    ClientError { message: String },
}

pub type Result<T> = std::result::Result<T, TransportError>;
