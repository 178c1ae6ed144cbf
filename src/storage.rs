//! Cart Persistence
//!
//! The cart lives in a single localStorage entry as a JSON array, read once
//! on load and rewritten after every change. No cross-tab locking.

use crate::error::{js_error_message, ShopError, ShopResult};
use crate::models::CartItem;

/// Storage backend for the serialized cart
pub trait CartStore {
    /// Read the stored cart; a missing entry is an empty cart
    fn load(&self) -> ShopResult<Vec<CartItem>>;

    /// Replace the stored cart
    fn save(&self, items: &[CartItem]) -> ShopResult<()>;
}

fn decode(raw: Option<String>) -> ShopResult<Vec<CartItem>> {
    match raw {
        Some(json) => Ok(serde_json::from_str(&json)?),
        None => Ok(Vec::new()),
    }
}

/// Browser localStorage under a fixed key
pub struct LocalCartStore {
    key: String,
}

impl LocalCartStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> ShopResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| ShopError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|e| ShopError::Storage(js_error_message(&e)))?
            .ok_or_else(|| ShopError::Storage("localStorage unavailable".to_string()))
    }
}

impl CartStore for LocalCartStore {
    fn load(&self) -> ShopResult<Vec<CartItem>> {
        let raw = self
            .storage()?
            .get_item(&self.key)
            .map_err(|e| ShopError::Storage(js_error_message(&e)))?;
        decode(raw)
    }

    fn save(&self, items: &[CartItem]) -> ShopResult<()> {
        let json = serde_json::to_string(items)?;
        self.storage()?
            .set_item(&self.key, &json)
            .map_err(|e| ShopError::Storage(js_error_message(&e)))
    }
}

/// In-memory store holding the same JSON text localStorage would
#[cfg(test)]
#[derive(Default)]
pub struct MemoryCartStore {
    raw: std::cell::RefCell<Option<String>>,
}

#[cfg(test)]
impl MemoryCartStore {
    pub fn with_raw(raw: &str) -> Self {
        Self {
            raw: std::cell::RefCell::new(Some(raw.to_string())),
        }
    }
}

#[cfg(test)]
impl CartStore for MemoryCartStore {
    fn load(&self) -> ShopResult<Vec<CartItem>> {
        decode(self.raw.borrow().clone())
    }

    fn save(&self, items: &[CartItem]) -> ShopResult<()> {
        *self.raw.borrow_mut() = Some(serde_json::to_string(items)?);
        Ok(())
    }
}
