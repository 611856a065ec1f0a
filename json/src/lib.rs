pub mod error;
pub use error::{JsonError, Result};
pub mod json;
pub use json::loads;

#[cfg(test)]
mod json_test;
