//! Selection tracker for the bulk-action checkbox group.
//!
//! The checkbox group has no model of its own: every reaction flips DOM
//! state and then recomputes the count badge and master checkbox from a
//! fresh scan, which keeps the displayed count and the real selection from
//! ever drifting apart.

use tracing::trace;

use crate::backend::Notifier;
use crate::core::selection::{
    ITEM_CLASS, RESOURCE_CHECKBOX_CLASS, SelectionSnapshot, item_checkboxes, master_checkbox,
};
use crate::dom::{Document, NodeId};
use crate::interaction::EventOutcome;

/// Badge element showing the "n / total selected" count.
pub const COUNT_BADGE_ID: &str = "checkbox-selected-count";
/// Button toggling the whole selection.
pub const SELECT_ALL_BUTTON_ID: &str = "select-all";
/// Button inverting the selection.
pub const INVERT_BUTTON_ID: &str = "select-invert";
/// Button surfacing the currently selected values.
pub const SHOW_SELECTED_BUTTON_ID: &str = "selected";
/// Class of the bulk-action forms selection is serialized into.
pub const ACTION_FORM_CLASS: &str = "list-action";
/// Name of the hidden input carrying the selected id list.
pub const IDS_FIELD_NAME: &str = "ids";

/// Message shown when "show selected" finds nothing checked.
pub const NO_SELECTION_MESSAGE: &str = "no selected items!!!";

/// Stateless reactions over the shared checkbox group.
#[derive(Debug, Default)]
pub struct SelectionTracker;

impl SelectionTracker {
    /// "Select all" button: flip the master checkbox and propagate its new
    /// state to every item.
    pub fn select_all_clicked(doc: &mut Document) {
        let Some(master) = master_checkbox(doc) else {
            return;
        };
        let checked = doc.toggle_checked(master);
        Self::set_all_items(doc, checked);
        Self::refresh(doc);
    }

    /// The master checkbox itself was clicked; same propagation as the
    /// button, the toggle just originates on the checkbox.
    pub fn master_checkbox_clicked(doc: &mut Document) {
        Self::select_all_clicked(doc);
    }

    /// Invert every item checkbox individually; the master state is then
    /// recomputed, not assumed.
    pub fn invert_clicked(doc: &mut Document) {
        for item in item_checkboxes(doc) {
            doc.toggle_checked(item);
        }
        Self::refresh(doc);
    }

    /// An individual item checkbox was clicked (native toggle included).
    pub fn item_clicked(doc: &mut Document, item: NodeId) {
        doc.toggle_checked(item);
        Self::refresh(doc);
    }

    /// "Show selected": surface the checked values, or block with an alert
    /// when nothing (with a real value) is checked.
    ///
    /// Returns the appended results node, when one was produced.
    pub fn show_selected_clicked<N: Notifier>(
        doc: &mut Document,
        notifier: &mut N,
    ) -> Option<NodeId> {
        let snapshot = SelectionSnapshot::scan(doc, ITEM_CLASS);
        if snapshot.values.is_empty() {
            notifier.alert(NO_SELECTION_MESSAGE);
            return None;
        }
        let text = format!("selected:{}", snapshot.joined_values());
        Some(doc.append_div_to_body(&text))
    }

    /// Bulk-action form is about to submit: serialize the checked record
    /// ids into a hidden `ids` input appended just in time. The native
    /// submission always proceeds.
    pub fn action_form_submitting(doc: &mut Document, form: NodeId) -> EventOutcome {
        let snapshot = SelectionSnapshot::scan(doc, RESOURCE_CHECKBOX_CLASS);
        trace!(ids = %snapshot.joined_values(), "serializing selection into action form");
        doc.append_hidden_input(form, IDS_FIELD_NAME, &snapshot.joined_values());
        EventOutcome::submitted()
    }

    fn set_all_items(doc: &mut Document, checked: bool) {
        for item in item_checkboxes(doc) {
            doc.set_checked(item, checked);
        }
    }

    /// Recomputes the badge and the master checkbox from live DOM state.
    fn refresh(doc: &mut Document) {
        let snapshot = SelectionSnapshot::scan(doc, ITEM_CLASS);
        if let Some(badge) = doc.element_by_id(COUNT_BADGE_ID) {
            let text = snapshot.badge_text();
            doc.set_text(badge, &text);
        }
        if let Some(master) = master_checkbox(doc) {
            doc.set_checked(master, snapshot.all_checked());
        }
    }
}
