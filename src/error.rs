//! Frontend Errors

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShopError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Network error: {0}")]
    Network(String),

    /// Error message reported by the backend in its `error` field
    #[error("{0}")]
    Backend(String),

    /// Error message reported by the payment provider
    #[error("{0}")]
    Payment(String),

    #[error("Payment system not configured")]
    Unavailable,
}

pub type ShopResult<T> = Result<T, ShopError>;

impl From<serde_json::Error> for ShopError {
    fn from(e: serde_json::Error) -> Self {
        ShopError::Serialization(e.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for ShopError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        ShopError::Serialization(e.to_string())
    }
}

/// Readable text for an error thrown on the JS side
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value))
}
