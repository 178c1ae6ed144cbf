//! Application Context
//!
//! Owns the shop and chatbot state signals and executes the effects the
//! reducers return. Provided to every component via the Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::config::ShopConfig;
use crate::scheduler::{Scheduler, TimeoutScheduler};
use crate::state::{update, ChatEffect, Effect, LeadChatbot, Msg, ShopState};
use crate::storage::{CartStore, LocalCartStore};

/// App-wide state and effect runner
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Console screen state
    pub shop: RwSignal<ShopState>,
    /// Seller chat state
    pub chat: RwSignal<LeadChatbot>,
    config: StoredValue<ShopConfig>,
}

impl AppContext {
    pub fn new(config: ShopConfig) -> Self {
        let cart = match LocalCartStore::new(config.storage_key.clone()).load() {
            Ok(items) => items,
            Err(e) => {
                log::error!("[APP] Stored cart unreadable, starting empty: {}", e);
                Vec::new()
            }
        };
        log::info!("[APP] Loaded {} cart items", cart.len());

        Self {
            shop: RwSignal::new(ShopState::new(&config, cart)),
            chat: RwSignal::new(LeadChatbot::new(config.timings.chat_reply_ms)),
            config: StoredValue::new(config),
        }
    }

    /// Feed a message through the shop reducer and run its effects
    pub fn dispatch(&self, msg: Msg) {
        let effects = self
            .shop
            .try_update(|state| update(state, msg))
            .unwrap_or_default();
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(&self, effect: Effect) {
        match effect {
            Effect::PersistCart(items) => {
                let store = LocalCartStore::new(self.config.with_value(|c| c.storage_key.clone()));
                if let Err(e) = store.save(&items) {
                    log::error!("[CART] Failed to persist cart: {}", e);
                }
            }
            Effect::ScheduleRestore { token, after_ms } => {
                let ctx = *self;
                TimeoutScheduler.schedule(after_ms, Box::new(move || ctx.dispatch(Msg::Restore(token))));
            }
            Effect::Alert(message) => {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(&message);
                }
            }
            Effect::ConfirmClearCart(prompt) => {
                let confirmed = web_sys::window()
                    .and_then(|w| w.confirm_with_message(&prompt).ok())
                    .unwrap_or(false);
                if confirmed {
                    self.dispatch(Msg::ClearCartConfirmed);
                }
            }
            Effect::BeginCheckout(cart) => {
                let ctx = *self;
                let config = self.config.get_value();
                spawn_local(async move {
                    let result = commands::start_checkout(
                        config.stripe_key.as_deref(),
                        &config.checkout_endpoint,
                        &cart,
                    )
                    .await;
                    if let Err(e) = result {
                        ctx.dispatch(Msg::CheckoutFailed(e.to_string()));
                    }
                });
            }
            Effect::OpenUrl(url) => {
                if let Some(window) = web_sys::window() {
                    if let Err(e) = window.open_with_url_and_target(&url, "_blank") {
                        log::warn!("[APP] Could not open {}: {:?}", url, e);
                    }
                }
            }
        }
    }

    /// Send a visitor answer to the chatbot
    pub fn chat_respond(&self, text: String) {
        let effects = self
            .chat
            .try_update(|bot| bot.respond(&text, iso_timestamp))
            .unwrap_or_default();

        for effect in effects {
            match effect {
                ChatEffect::ScheduleReply { step, after_ms } => {
                    let chat = self.chat;
                    TimeoutScheduler.schedule(after_ms, Box::new(move || chat.update(|bot| bot.show_prompt(step))));
                }
                ChatEffect::Submit(lead) => {
                    let endpoint = self.config.with_value(|c| c.seller_endpoint.clone());
                    spawn_local(async move {
                        commands::submit_seller_logged(&endpoint, &lead).await;
                    });
                }
            }
        }
    }
}

fn iso_timestamp() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
