//! Shop Configuration
//!
//! Endpoints, storage key and overlay timings. The payment key is injected
//! by the page template on `<body data-stripe-key="...">`.

use wasm_bindgen::JsValue;

/// Durations in milliseconds for transient screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub added_to_cart_ms: u32,
    pub out_of_stock_ms: u32,
    pub checkout_error_ms: u32,
    pub chat_reply_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            added_to_cart_ms: 1000,
            out_of_stock_ms: 1500,
            checkout_error_ms: 2000,
            chat_reply_ms: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShopConfig {
    /// localStorage entry holding the serialized cart
    pub storage_key: String,
    pub checkout_endpoint: String,
    pub seller_endpoint: String,
    pub external_link: String,
    /// Publishable key for the payment provider (None = checkout disabled)
    pub stripe_key: Option<String>,
    pub timings: Timings,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            storage_key: "gameboyCart".to_string(),
            checkout_endpoint: "/create-checkout-session".to_string(),
            seller_endpoint: "/submit-seller".to_string(),
            external_link: "https://sleepystatic.com/".to_string(),
            stripe_key: None,
            timings: Timings::default(),
        }
    }
}

impl ShopConfig {
    /// Defaults plus the payment key read from the page body
    pub fn from_document() -> Self {
        let attribute = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .and_then(|body| body.get_attribute("data-stripe-key"));
        let provider_loaded =
            js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("Stripe")).unwrap_or(false);

        Self {
            stripe_key: payment_key(attribute, provider_loaded),
            ..Self::default()
        }
    }
}

/// Checkout needs both a non-blank key and the loaded Stripe.js global
fn payment_key(attribute: Option<String>, provider_loaded: bool) -> Option<String> {
    let key = attribute.filter(|key| !key.trim().is_empty());
    match (key, provider_loaded) {
        (None, _) => {
            log::warn!("No payment key on <body>, checkout disabled");
            None
        }
        (Some(_), false) => {
            log::warn!("Stripe.js not loaded, checkout disabled");
            None
        }
        (Some(key), true) => Some(key),
    }
}
