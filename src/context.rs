//! Application Context
//!
//! Handlers shared via Leptos Context API. Each one runs a controller
//! operation, then refreshes the store projection.

use leptos::prelude::*;
use log::warn;

use crate::config::AppConfig;
use crate::controller::ShoppingController;
use crate::error::{DomainError, DomainResult};
use crate::filter::FilterMode;
use crate::models::Item;
use crate::storage::LocalStorage;
use crate::store::{store_sync, AppStore};

#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<ShoppingController<LocalStorage>>,
    store: AppStore,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(controller: ShoppingController<LocalStorage>, store: AppStore, config: AppConfig) -> Self {
        Self {
            controller: StoredValue::new(controller),
            store,
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    fn run<T>(&self, op: impl FnOnce(&mut ShoppingController<LocalStorage>) -> T) -> Option<T> {
        let result = self.controller.try_update_value(op);
        self.controller.with_value(|controller| store_sync(&self.store, controller));
        result
    }

    fn missing() -> DomainError {
        DomainError::NotFound("controller disposed".to_string())
    }

    pub fn add_item(&self, raw: &str) -> DomainResult<Item> {
        let now_ms = js_sys::Date::now() as u64;
        self.run(|c| c.add_item(raw, now_ms)).unwrap_or_else(|| Err(Self::missing()))
    }

    pub fn toggle_completed(&self, id: &str, completed: bool) {
        if let Some(Err(e)) = self.run(|c| c.toggle_completed(id, completed)) {
            warn!("toggle failed: {}", e);
        }
    }

    pub fn edit_name(&self, id: &str, text: &str) -> DomainResult<Item> {
        self.run(|c| c.edit_name(id, text)).unwrap_or_else(|| Err(Self::missing()))
    }

    pub fn remove_item(&self, id: &str) {
        if let Some(Err(e)) = self.run(|c| c.remove_item(id)) {
            warn!("remove failed: {}", e);
        }
    }

    pub fn clear_all(&self) {
        self.run(|c| c.clear_all());
    }

    pub fn select_filter(&self, mode: FilterMode) {
        self.run(|c| c.select_filter(mode));
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
