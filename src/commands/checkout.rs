//! Checkout Commands
//!
//! Creates a payment session from the cart and redirects to it.

use serde::{Deserialize, Serialize};

use crate::error::{ShopError, ShopResult};
use crate::models::CartItem;
use super::post_json;
use super::stripe::PaymentClient;

// ========================
// Types
// ========================

#[derive(Serialize)]
struct CheckoutArgs<'a> {
    cart: &'a [CartItem],
}

#[derive(Debug, Deserialize)]
struct CheckoutResponse {
    #[serde(rename = "sessionId")]
    session_id: Option<String>,
    error: Option<String>,
}

impl CheckoutResponse {
    fn into_session_id(self) -> ShopResult<String> {
        if let Some(error) = self.error {
            return Err(ShopError::Backend(error));
        }
        self.session_id
            .ok_or_else(|| ShopError::Backend("Missing checkout session".to_string()))
    }
}

// ========================
// Commands
// ========================

/// POST the cart and return the payment session id
pub async fn create_checkout_session(endpoint: &str, cart: &[CartItem]) -> ShopResult<String> {
    let response: CheckoutResponse = post_json(endpoint, &CheckoutArgs { cart }).await?;
    response.into_session_id()
}

/// Full checkout: connect to the provider, create the session, then hand
/// over to the payment page. No session is requested without a client.
/// Returns only on failure or when the provider declines to redirect.
pub async fn start_checkout(publishable_key: Option<&str>, endpoint: &str, cart: &[CartItem]) -> ShopResult<()> {
    let key = publishable_key.ok_or(ShopError::Unavailable)?;
    let client = PaymentClient::connect(key)?;
    let session_id = create_checkout_session(endpoint, cart).await?;
    log::info!("[CHECKOUT] session created, redirecting");
    client.redirect(&session_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_request_body_shape() {
        let cart = vec![CartItem {
            id: "gameboy-advance-0".to_string(),
            title: "Clear Purple GBA".to_string(),
            price: 160,
            img: "static/images/gba1.png".to_string(),
            category: Category::GameboyAdvance,
        }];
        let body = serde_json::to_value(CheckoutArgs { cart: &cart }).unwrap();
        assert_eq!(body["cart"][0]["title"], "Clear Purple GBA");
        assert_eq!(body["cart"][0]["price"], 160);
    }

    #[test]
    fn test_response_session_id() {
        let ok: CheckoutResponse = serde_json::from_str(r#"{"sessionId":"cs_test_1"}"#).unwrap();
        assert_eq!(ok.into_session_id().unwrap(), "cs_test_1");
    }

    #[test]
    fn test_response_error_surfaces_message() {
        let err: CheckoutResponse = serde_json::from_str(r#"{"error":"Cart is empty"}"#).unwrap();
        let error = err.into_session_id().unwrap_err();
        assert_eq!(error, ShopError::Backend("Cart is empty".to_string()));
        assert_eq!(error.to_string(), "Cart is empty");

        let missing: CheckoutResponse = serde_json::from_str("{}").unwrap();
        assert!(missing.into_session_id().is_err());
    }
}
