//! Console Screen Component
//!
//! Renders the current `ScreenView`: a menu list, a transient message or the
//! enlarged product image.

use leptos::html;
use leptos::prelude::*;
use web_sys::{ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::context::use_app_context;
use crate::state::{MenuEntry, Msg, Role, ScreenView, ENLARGED_BACK_SLOT};

/// One menu row; clicking focuses it, clicking again activates it
#[component]
fn MenuRow(entry: MenuEntry, index: usize, focused: bool) -> impl IntoView {
    let ctx = use_app_context();
    let row_ref = NodeRef::<html::Li>::new();

    // Keep the focused row visible in the scrolling screen
    Effect::new(move |_| {
        if focused {
            if let Some(row) = row_ref.get() {
                let options = ScrollIntoViewOptions::new();
                options.set_block(ScrollLogicalPosition::Nearest);
                row.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    });

    let class = if focused {
        format!("{} active", entry.role.class())
    } else {
        entry.role.class().to_string()
    };
    let is_gallery_image = entry.role == Role::GalleryImage;

    let content = match entry.image {
        Some(src) => view! {
            <img src=src alt=entry.label.clone() class="product-image" />
            <Show when=move || is_gallery_image>
                <div class="navigation-hint">"←/→ browse items"</div>
            </Show>
        }
        .into_any(),
        None => entry.label.into_any(),
    };

    view! {
        <li
            node_ref=row_ref
            class=class
            on:click=move |ev| {
                ev.stop_propagation();
                ctx.dispatch(Msg::Pointer(index));
            }
        >
            {content}
        </li>
    }
}

#[component]
pub fn Screen() -> impl IntoView {
    let ctx = use_app_context();

    move || match ctx.shop.with(|state| state.screen()) {
        ScreenView::Menu { dom_id, entries, focus } => view! {
            <ul class="menu active-menu" id=dom_id>
                {entries
                    .into_iter()
                    .enumerate()
                    .map(|(index, entry)| view! { <MenuRow entry=entry index=index focused={index == focus} /> })
                    .collect_view()}
            </ul>
        }
        .into_any(),
        ScreenView::Message { lines: [headline, detail] } => view! {
            <div class="cart-message">
                <div class="menu-item active">{headline}</div>
                <div class="menu-item">{detail}</div>
            </div>
        }
        .into_any(),
        ScreenView::Enlarged { title, img } => view! {
            <div class="enlarged-image">
                <div class="menu-item">{title.clone()}</div>
                <div class="menu-item enlarged-image-container">
                    <img src=img alt=title class="enlarged-product-image" />
                </div>
                <div
                    class="menu-item active"
                    on:click=move |_| ctx.dispatch(Msg::Pointer(ENLARGED_BACK_SLOT))
                >
                    "Back"
                </div>
            </div>
        }
        .into_any(),
    }
}
