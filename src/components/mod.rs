//! UI Components
//!
//! Leptos components for the console shell and the seller chat.

mod button_zones;
mod chat_widget;
mod console_shell;
mod screen;

pub use button_zones::ButtonZones;
pub use chat_widget::{ChatWidget, CHAT_INPUT_ID};
pub use console_shell::ConsoleShell;
pub use screen::Screen;
