//! Item List Component
//!
//! Renders every item in display order; hidden rows stay mounted.

use leptos::prelude::*;

use crate::components::ShoppingItem;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <ul class="shopping-list list-unstyled">
            <For
                each=move || store.items().get()
                // Re-render a row whenever its name or completion changes
                key=|item| (item.id.clone(), item.name.clone(), item.completed)
                children=move |item| view! { <ShoppingItem item=item /> }
            />
        </ul>
    }
}
