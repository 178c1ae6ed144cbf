//! Console State Core
//!
//! Pure navigation, gallery, cart and chatbot logic. Nothing in here talks
//! to the browser, so every transition is testable natively.

mod cart;
mod chatbot;
mod gallery;
mod intent;
mod menu;
mod shop;

#[cfg(test)]
pub use cart::Cart;
pub use chatbot::{ChatEffect, LeadChatbot};
pub use intent::{ConsoleButton, Intent};
pub use menu::{MenuEntry, Role};
pub use shop::{update, Effect, Msg, ScreenView, ShopState, ENLARGED_BACK_SLOT};
