//! Shopping Item Component
//!
//! One row: completion checkbox, click-to-edit name, delete icon.

use leptos::html::Div;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::filter::display_class;
use crate::models::Item;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ShoppingItem(item: Item) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let Item { id, name, completed } = item;
    let (editing, set_editing) = signal(false);
    let label_ref = NodeRef::<Div>::new();

    let row_id = id.clone();
    let row_class = move || {
        let visible = store.hidden().with(|hidden| !hidden.contains(&row_id));
        let mut c = format!("border rounded p-2 mb-1 align-items-center gap-2 {}", display_class(visible));
        if completed { c.push_str(" completed"); }
        c
    };

    let open_edit = move |_: web_sys::MouseEvent| {
        if completed { return; }
        set_editing.set(true);
        if let Some(el) = label_ref.get_untracked() {
            let _ = el.focus();
        }
    };

    let close_edit = {
        let id = id.clone();
        let name = name.clone();
        move || {
            // The row may already be disposed when a re-keyed element loses focus
            if editing.try_get_untracked() != Some(true) { return; }
            set_editing.set(false);
            let Some(el) = label_ref.get_untracked() else { return };
            let typed = el.text_content().unwrap_or_default();
            // Rejected edits leave the stored name in place
            let shown = ctx.edit_name(&id, &typed).map(|item| item.name).unwrap_or_else(|_| name.clone());
            el.set_text_content(Some(shown.as_str()));
        }
    };
    let close_on_blur = close_edit.clone();
    let close_on_enter = close_edit;

    let toggle_id = id.clone();
    let delete_id = id;

    view! {
        <li class=row_class>
            <input
                type="checkbox"
                class="form-check-input"
                prop:checked=completed
                on:change=move |ev| ctx.toggle_completed(&toggle_id, event_target_checked(&ev))
            />
            <div
                class="item-name flex-grow-1"
                node_ref=label_ref
                contenteditable=move || if editing.get() { "true" } else { "false" }
                on:click=open_edit
                on:blur=move |_| close_on_blur()
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        close_on_enter();
                    }
                }
            >
                {name.clone()}
            </div>
            <i
                class="fs-3 bi bi-x text-danger delete-icon"
                on:click=move |_| ctx.remove_item(&delete_id)
            ></i>
        </li>
    }
}
