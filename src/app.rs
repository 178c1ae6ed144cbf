//! Handheld Shop App
//!
//! Root component: console shell plus the seller chat bubble. Keyboard
//! input is bound once at the document level.

use leptos::prelude::*;

use crate::components::{ChatWidget, ConsoleShell, CHAT_INPUT_ID};
use crate::config::ShopConfig;
use crate::context::AppContext;
use crate::state::{Intent, Msg};

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(ShopConfig::from_document());
    provide_context(ctx);

    // Arrow keys / Enter / Escape drive the console unless the chat field has focus
    web_keynav::bind_global_keydown(&[CHAT_INPUT_ID], move |key| match Intent::from_key(key) {
        Some(intent) => {
            ctx.dispatch(Msg::Intent(intent));
            true
        }
        None => false,
    });

    view! {
        <ConsoleShell />
        <ChatWidget />
    }
}
