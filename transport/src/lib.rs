pub mod errors;
pub use errors::{Result, TransportError};

pub mod models;

pub mod requests;

mod rest_api;
pub use rest_api::RestApi;
#[cfg(test)]
mod rest_api_test;

mod frame;
pub use frame::PushFrame;

mod account_stream;
pub use account_stream::{AccountStream, StreamConfig};
#[cfg(test)]
mod account_stream_test;
