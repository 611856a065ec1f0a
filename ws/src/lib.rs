pub mod error;
pub use error::{Result, WsError};
pub mod ws_client;
pub use ws_client::{Client, Config, ConnState, RecvMsg, SendMsg};
