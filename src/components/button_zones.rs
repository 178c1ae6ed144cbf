//! On-screen Console Buttons
//!
//! Hit zones over the shell artwork. Each maps straight to an `Intent`.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::state::{ConsoleButton, Msg};

#[component]
pub fn ButtonZones() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="button-zones">
            {ConsoleButton::ALL
                .iter()
                .map(|button| {
                    let intent = button.intent();
                    view! {
                        <button
                            class=button.class()
                            aria-label=format!("{:?}", button)
                            on:click=move |ev| {
                                ev.stop_propagation();
                                ctx.dispatch(Msg::Intent(intent));
                            }
                        ></button>
                    }
                })
                .collect_view()}
        </div>
    }
}
