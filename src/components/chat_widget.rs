//! Seller Chat Widget
//!
//! Floating chat bubble running the lead chatbot script.

use leptos::html;
use leptos::prelude::*;

use crate::context::use_app_context;

/// DOM id of the chat text field; the console key handler ignores it
pub const CHAT_INPUT_ID: &str = "chat-input";

#[component]
pub fn ChatWidget() -> impl IntoView {
    let ctx = use_app_context();
    let (draft, set_draft) = signal(String::new());
    let input_ref = NodeRef::<html::Input>::new();
    let messages_ref = NodeRef::<html::Div>::new();

    let send = move || {
        let text = draft.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        ctx.chat_respond(text);
        set_draft.set(String::new());
    };

    let is_open = move || ctx.chat.with(|bot| bot.is_open());
    let input_visible = move || ctx.chat.with(|bot| bot.input_visible());

    // Scroll to the newest message and focus the field whenever it shows
    Effect::new(move |_| {
        let _ = ctx.chat.with(|bot| bot.messages().len());
        if let Some(list) = messages_ref.get() {
            list.set_scroll_top(list.scroll_height());
        }
        if is_open() && input_visible() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    view! {
        <button id="chat-icon" class="chat-icon" on:click=move |_| ctx.chat.update(|bot| bot.toggle())>
            "💬"
        </button>
        <div id="chat-box" class=move || if is_open() { "chat-box" } else { "chat-box hidden" }>
            <div class="chat-header">
                <span>"Sell to us"</span>
                <button id="chat-close" on:click=move |_| ctx.chat.update(|bot| bot.close())>"×"</button>
            </div>
            <div id="chat-messages" class="chat-messages" node_ref=messages_ref>
                {move || {
                    ctx.chat.with(|bot| {
                        bot.messages()
                            .iter()
                            .map(|message| {
                                let class = if message.from_bot {
                                    "chat-message bot-message"
                                } else {
                                    "chat-message user-message"
                                };
                                view! { <div class=class>{message.text.clone()}</div> }
                            })
                            .collect_view()
                    })
                }}
                {move || {
                    let choices = ctx.chat.with(|bot| bot.choices());
                    (!choices.is_empty()).then(|| view! {
                        <div class="chat-buttons">
                            {choices
                                .iter()
                                .map(|choice| {
                                    let choice = *choice;
                                    view! {
                                        <button class="chat-button" on:click=move |_| ctx.chat_respond(choice.to_string())>
                                            {choice}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    })
                }}
            </div>
            <div
                id="chat-input-container"
                class="chat-input-container"
                style=move || if input_visible() { "display: flex" } else { "display: none" }
            >
                <input
                    id=CHAT_INPUT_ID
                    type="text"
                    autocomplete="off"
                    placeholder="Type a message..."
                    node_ref=input_ref
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            send();
                        }
                    }
                />
                <button id="chat-send" on:click=move |_| send()>"Send"</button>
            </div>
        </div>
    }
}
