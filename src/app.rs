//! Shopping List App
//!
//! Root component: loads the persisted list and provides context.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ClearButton, EmptyAlert, FilterBar, ItemList, ItemSummary, NewItemForm};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::controller::ShoppingController;
use crate::storage::{ItemStorage, LocalStorage};
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let controller = ShoppingController::load(ItemStorage::new(LocalStorage, config.storage_key.clone()));
    let store = Store::new(AppState::from_controller(&controller));

    provide_context(store);
    provide_context(AppContext::new(controller, store, config));

    view! {
        <main class="container py-4" style="max-width: 640px;">
            <h1 class="mb-3">"Shopping List"</h1>
            <NewItemForm />
            <FilterBar />
            <EmptyAlert />
            <ItemList />
            <ClearButton />
            <ItemSummary />
        </main>
    }
}
