use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Transport error: {message}")]
    TransportError { message: String },

    #[error("Stream error: {message}")]
    StreamError { message: String },

    #[error("App error: {message}")]
    AppError { message: String },
}

pub type Result<T> = std::result::Result<T, MonitorError>;
