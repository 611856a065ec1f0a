use crate::error::{JsonError, Result};

pub fn loads<T: serde::de::DeserializeOwned>(text: &str) -> Result<T> {
    serde_json::from_str::<T>(text).map_err(|e| JsonError::DecodeError {
        message: e.to_string(),
    })
}
