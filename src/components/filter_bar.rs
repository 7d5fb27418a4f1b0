//! Filter Bar Component
//!
//! Three mutually exclusive filter buttons.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::filter::FilterMode;
use crate::reconcile::hidden_class;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    view! {
        <div class=move || format!("filter-buttons btn-group mb-3{}", hidden_class(store.ui().get().filters_visible))>
            {FilterMode::ALL.iter().map(|&mode| {
                view! {
                    <button
                        type="button"
                        data-filter=mode.as_str()
                        class=move || mode.button_class(store.filter().get())
                        on:click=move |_| ctx.select_filter(mode)
                    >
                        {mode.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
