//! Application Configuration

use log::LevelFilter;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// localStorage key holding the serialized list
    pub storage_key: String,
    /// Notice shown when an empty item is submitted
    pub empty_input_notice: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: "shoppingItems".to_string(),
            empty_input_notice: "Please enter an item!".to_string(),
            log_level: if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info },
        }
    }
}
