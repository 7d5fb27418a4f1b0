//! Frontend Models
//!
//! Data structures persisted to local storage and projected into the view.

use serde::{Deserialize, Serialize};

/// A single shopping-list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Opaque unique token, derived from the creation timestamp
    pub id: String,
    /// Human-readable text
    pub name: String,
    /// Completion status
    pub completed: bool,
}

impl Item {
    /// Create a new, not yet completed item
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            completed: false,
        }
    }
}
