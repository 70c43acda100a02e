//! Selection state recomputed from live checkbox state.
//!
//! The checked flags in the document are the single source of truth; counts
//! and the master-checkbox flag are derived from a fresh scan after every
//! mutating action, never cached.

use crate::dom::{Document, NodeId};

/// Class of the individual row checkboxes.
pub const ITEM_CLASS: &str = "select-item";
/// Class of the master (select all) checkbox.
pub const MASTER_CLASS: &str = "select-all";
/// Class of the checkboxes carrying record ids for bulk actions.
pub const RESOURCE_CHECKBOX_CLASS: &str = "kaffy-resource-checkbox";

/// Point-in-time view of one checkbox group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub total: usize,
    pub checked: usize,
    /// Values of checked items, placeholders (empty values) excluded.
    pub values: Vec<String>,
}

impl SelectionSnapshot {
    /// Scans every checkbox of `class` currently in the document.
    #[must_use]
    pub fn scan(doc: &Document, class: &str) -> Self {
        let items = doc.elements_by_class(class);
        let total = items.len();
        let mut checked = 0;
        let mut values = Vec::new();
        for item in items {
            if doc.checked(item) {
                checked += 1;
                let value = doc.value(item);
                if !value.is_empty() {
                    values.push(value.to_owned());
                }
            }
        }
        Self {
            total,
            checked,
            values,
        }
    }

    #[must_use]
    pub fn all_checked(&self) -> bool {
        self.checked == self.total
    }

    /// Badge text shown next to the checkbox column.
    #[must_use]
    pub fn badge_text(&self) -> String {
        format!("{} / {} selected", self.checked, self.total)
    }

    /// Comma-joined id list transmitted through the bulk-action form.
    #[must_use]
    pub fn joined_values(&self) -> String {
        self.values.join(",")
    }
}

/// Item checkboxes of the shared group, in document order.
#[must_use]
pub fn item_checkboxes(doc: &Document) -> Vec<NodeId> {
    doc.elements_by_class(ITEM_CLASS)
}

/// The master checkbox, when the page renders one.
#[must_use]
pub fn master_checkbox(doc: &Document) -> Option<NodeId> {
    doc.elements_by_class(MASTER_CLASS).first().copied()
}
