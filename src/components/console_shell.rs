//! Console Shell Component
//!
//! Handheld artwork around the screen. The shell follows the viewport
//! width (SP on narrow screens) unless switched from the main menu.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::scale_for_width;
use crate::state::Msg;
use super::{ButtonZones, Screen};

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(1024.0)
}

#[component]
pub fn ConsoleShell() -> impl IntoView {
    let ctx = use_app_context();
    let (width, set_width) = signal(viewport_width());

    // Initial layout, then follow resizes
    ctx.dispatch(Msg::Resize(width.get_untracked()));
    let _resize = window_event_listener(leptos::ev::resize, move |_| {
        let current = viewport_width();
        set_width.set(current);
        ctx.dispatch(Msg::Resize(current));
    });

    let layout = move || ctx.shop.with(|state| state.layout());

    view! {
        <div
            class="gameboy-container"
            data-console=move || layout().as_str()
            style=move || format!("transform: scale({})", scale_for_width(width.get()))
        >
            <img class="shell" src=move || layout().shell_image() alt="" />
            <div class="screen">
                <Screen />
            </div>
            <ButtonZones />
        </div>
    }
}
