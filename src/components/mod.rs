//! UI Components
//!
//! Leptos components projecting the store into the page.

mod new_item_form;
mod shopping_item;
mod item_list;
mod filter_bar;
mod list_status;

pub use new_item_form::NewItemForm;
pub use shopping_item::ShoppingItem;
pub use item_list::ItemList;
pub use filter_bar::FilterBar;
pub use list_status::{ClearButton, EmptyAlert, ItemSummary};
