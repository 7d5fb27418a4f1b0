//! List Status Components
//!
//! Empty-state alert, clear-all button and the item count footer.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Item;
use crate::reconcile::hidden_class;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn EmptyAlert() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class=move || format!("alert alert-warning{}", hidden_class(store.ui().get().alert_visible))>
            "Your shopping list is empty."
        </div>
    }
}

#[component]
pub fn ClearButton() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    view! {
        <button
            type="button"
            class=move || format!("clear btn btn-outline-danger btn-sm mt-2{}", hidden_class(store.ui().get().clear_visible))
            on:click=move |_| ctx.clear_all()
        >
            "Clear All"
        </button>
    }
}

#[component]
pub fn ItemSummary() -> impl IntoView {
    let store = use_app_store();

    let summary = move || store.items().with(|items| summary_text(items));

    view! { <p class="item-count text-muted small mt-2">{summary}</p> }
}

/// Footer text, e.g. `1 item, 1 remaining`
fn summary_text(items: &[Item]) -> String {
    let remaining = items.iter().filter(|item| !item.completed).count();
    let noun = if items.len() == 1 { "item" } else { "items" };
    format!("{} {}, {} remaining", items.len(), noun, remaining)
}
