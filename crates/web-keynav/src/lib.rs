//! Web Key Navigation
//!
//! Document-level keydown binding for keyboard-driven UIs.
//! Keys typed into designated text fields are left alone.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Whether the focused element is one of the ignored fields
pub fn is_ignored(active_id: Option<&str>, ignore_ids: &[&str]) -> bool {
    match active_id {
        Some(id) if !id.is_empty() => ignore_ids.contains(&id),
        _ => false,
    }
}

fn active_element_id() -> Option<String> {
    web_sys::window()?
        .document()?
        .active_element()
        .map(|el| el.id())
}

/// Bind a global keydown handler.
///
/// `on_key` receives `KeyboardEvent.key` and returns true when it consumed
/// the key; consumed keys get `preventDefault` so arrows don't scroll the page.
pub fn bind_global_keydown<F>(ignore_ids: &'static [&'static str], on_key: F)
where
    F: Fn(&str) -> bool + 'static,
{
    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if is_ignored(active_element_id().as_deref(), ignore_ids) {
            return;
        }
        if on_key(&ev.key()) {
            ev.prevent_default();
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
        }
    }
    on_keydown.forget();
}
