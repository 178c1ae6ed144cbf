//! Backend Command Wrappers
//!
//! Frontend bindings to the two backend endpoints and the payment provider,
//! organized by domain.

mod checkout;
mod seller;
mod stripe;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::error::{js_error_message, ShopError, ShopResult};

pub use checkout::*;
pub use seller::*;

fn network_error(e: JsValue) -> ShopError {
    ShopError::Network(js_error_message(&e))
}

/// POST a JSON body and decode the JSON reply.
///
/// Error statuses are not rejected here: the backend reports failures in
/// the body's `error` field, which callers inspect.
async fn post_json<B: Serialize, R: DeserializeOwned>(url: &str, body: &B) -> ShopResult<R> {
    let window = web_sys::window().ok_or_else(|| ShopError::Network("no window".to_string()))?;
    let payload = serde_json::to_string(body)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&payload));

    let request = Request::new_with_str_and_init(url, &init).map_err(network_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(network_error)?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network_error)?
        .dyn_into()
        .map_err(network_error)?;
    log::debug!("[HTTP] POST {} -> {}", url, response.status());

    let json = JsFuture::from(response.json().map_err(network_error)?)
        .await
        .map_err(network_error)?;
    Ok(serde_wasm_bindgen::from_value(json)?)
}
