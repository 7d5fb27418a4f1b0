//! UI State Reconciler
//!
//! Visibility of the empty-state alert, the clear button and the filter
//! group, derived from the item count alone.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiState {
    pub alert_visible: bool,
    pub clear_visible: bool,
    pub filters_visible: bool,
}

impl Default for UiState {
    fn default() -> Self {
        reconcile(0)
    }
}

pub fn reconcile(count: usize) -> UiState {
    let empty = count == 0;
    UiState {
        alert_visible: empty,
        clear_visible: !empty,
        filters_visible: !empty,
    }
}

/// Extra class hiding an element
pub fn hidden_class(visible: bool) -> &'static str {
    if visible { "" } else { " d-none" }
}
