use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WsError {
    #[error("connection error: {message}")]
    Connection { message: String },

    #[error("transport error: {message}")]
    Transport { message: String },

    #[error("client error: {message}")]
    Client { message: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("handle error: {message}")]
    HandleError { message: String },
}

impl WsError {
    pub fn connection<S: Into<String>>(message: S) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    pub fn connection_failed(url: String, source: impl std::error::Error) -> Self {
        Self::connection(format!("failed to connect to {}: {}", url, source))
    }

    pub fn connection_timeout(url: String, timeout: Duration) -> Self {
        Self::connection(format!("connection timeout after {:?} to {}", timeout, url))
    }

    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn send_failed(message_type: String, source: impl std::error::Error) -> Self {
        Self::transport(format!(
            "failed to send {} message: {}",
            message_type, source
        ))
    }

    pub fn receive_failed(source: impl std::error::Error) -> Self {
        Self::transport(format!("failed to receive message: {}", source))
    }

    pub fn channel_closed(channel_type: String, reason: String) -> Self {
        Self::transport(format!(
            "internal {} channel closed: {}",
            channel_type, reason
        ))
    }

    pub fn connection_closed(code: u16, reason: String) -> Self {
        Self::transport(format!(
            "connection closed by server: code={}, reason={}",
            code, reason
        ))
    }

    pub fn client<S: Into<String>>(message: S) -> Self {
        Self::Client {
            message: message.into(),
        }
    }

    pub fn disconnected() -> Self {
        Self::client("client is disconnected")
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn invalid_url(url: String) -> Self {
        Self::config(format!("invalid WebSocket URL: {}", url))
    }

    pub fn invalid_timeout(field: String) -> Self {
        Self::config(format!(
            "invalid timeout configuration: {} must be > 0",
            field
        ))
    }

    pub fn invalid_heartbeat_interval() -> Self {
        Self::config("invalid heartbeat interval configuration, must be > 0")
    }

    pub fn invalid_reconnect_delay() -> Self {
        Self::config("invalid reconnect delay configuration, must be > 0")
    }

    pub fn invalid_send_buf_size() -> Self {
        Self::config("invalid send buffer size configuration, must be > 0")
    }
}

pub type Result<T> = std::result::Result<T, WsError>;
