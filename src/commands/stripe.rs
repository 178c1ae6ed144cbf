//! Payment Provider Bindings
//!
//! Stripe.js is loaded by the page; these bindings only cover the hosted
//! checkout redirect.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::error::{js_error_message, ShopError, ShopResult};

#[wasm_bindgen]
extern "C" {
    type Stripe;

    /// Global `Stripe(key)` factory; throws when the script is missing
    #[wasm_bindgen(catch, js_name = Stripe)]
    fn stripe_client(publishable_key: &str) -> Result<Stripe, JsValue>;

    #[wasm_bindgen(method, catch, js_name = redirectToCheckout)]
    fn redirect_to_checkout(this: &Stripe, options: &JsValue) -> Result<js_sys::Promise, JsValue>;
}

#[derive(Serialize)]
struct RedirectArgs<'a> {
    #[serde(rename = "sessionId")]
    session_id: &'a str,
}

#[derive(Deserialize)]
struct ProviderError {
    message: String,
}

#[derive(Deserialize, Default)]
struct RedirectResult {
    error: Option<ProviderError>,
}

/// Payment provider client, created before any session is requested
pub(super) struct PaymentClient(Stripe);

impl PaymentClient {
    /// Fails with `Unavailable` when Stripe.js did not load
    pub(super) fn connect(publishable_key: &str) -> ShopResult<Self> {
        stripe_client(publishable_key).map(Self).map_err(|e| {
            log::error!("[STRIPE] client unavailable: {}", js_error_message(&e));
            ShopError::Unavailable
        })
    }

    /// Hand a checkout session to the hosted payment page
    pub(super) async fn redirect(&self, session_id: &str) -> ShopResult<()> {
        let options = serde_wasm_bindgen::to_value(&RedirectArgs { session_id })?;
        let promise = self
            .0
            .redirect_to_checkout(&options)
            .map_err(|e| ShopError::Payment(js_error_message(&e)))?;
        let result = JsFuture::from(promise)
            .await
            .map_err(|e| ShopError::Payment(js_error_message(&e)))?;

        // Resolves only when the redirect failed; a successful one leaves the page
        let result: RedirectResult = if result.is_undefined() || result.is_null() {
            RedirectResult::default()
        } else {
            serde_wasm_bindgen::from_value(result)?
        };
        match result.error {
            Some(error) => Err(ShopError::Payment(error.message)),
            None => Ok(()),
        }
    }
}
