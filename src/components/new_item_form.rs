//! New Item Form Component
//!
//! Text entry plus submit button for appending items.

use leptos::prelude::*;
use log::warn;

use crate::context::use_app_context;
use crate::error::DomainError;

#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let (new_text, set_new_text) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match ctx.add_item(&new_text.get_untracked()) {
            Ok(_) => set_new_text.set(String::new()),
            Err(DomainError::InvalidInput(_)) => {
                let notice = ctx.config().empty_input_notice;
                if window().alert_with_message(&notice).is_err() {
                    warn!("could not show notice: {}", notice);
                }
            }
            Err(e) => warn!("add failed: {}", e),
        }
    };

    view! {
        <form class="shopping-form mb-3" on:submit=add_item>
            <div class="input-group">
                <input
                    type="text"
                    id="item_name"
                    class="form-control"
                    placeholder="Add new item..."
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary">"Add"</button>
            </div>
        </form>
    }
}
