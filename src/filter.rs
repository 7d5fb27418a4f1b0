//! Filter Engine
//!
//! Decides which items are shown for the active filter mode. Filtering only
//! hides rows; items are never removed from the list by it.

use crate::models::Item;

/// Which subset of the list is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    Completed,
    Incompleted,
}

impl FilterMode {
    /// Filter controls in display order
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Completed, FilterMode::Incompleted];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Completed => "completed",
            FilterMode::Incompleted => "incompleted",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Completed => "Completed",
            FilterMode::Incompleted => "Incompleted",
        }
    }

    pub fn shows(&self, completed: bool) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Completed => completed,
            FilterMode::Incompleted => !completed,
        }
    }

    /// Button class: exactly one control carries `btn-primary`
    pub fn button_class(&self, active: FilterMode) -> &'static str {
        if *self == active { "btn btn-sm btn-primary" } else { "btn btn-sm btn-secondary" }
    }
}

/// Display class for a row
pub fn display_class(visible: bool) -> &'static str {
    if visible { "d-flex" } else { "d-none" }
}

/// Visibility of every item, in list order
pub fn apply(mode: FilterMode, items: &[Item]) -> Vec<bool> {
    items.iter().map(|item| mode.shows(item.completed)).collect()
}
