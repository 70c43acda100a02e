//! Cross-window record picker.
//!
//! Two halves in two browsing contexts of the same session: the opener page
//! turns a designated link into a popup, and the popup (detected by its
//! marker root) reports the clicked record back over an explicit message
//! channel, then closes. The channel schema is `{fieldName, recordId}`; the
//! opener-side write degrades silently when the opener navigated away, and
//! the popup closes either way so the user still sees "done".

use tracing::debug;

use crate::backend::{PickerMessage, WindowPort};
use crate::dom::{Document, NodeId};
use crate::interaction::EventOutcome;

/// Link that opens the pick listing in a new browsing context.
pub const PICK_LINK_ID: &str = "pick-raw-resource";
/// Marker root identifying a popup as the pick-result window.
pub const PICK_ROOT_ID: &str = "pick-resource";
/// Element whose text names the opener field to fill in.
pub const PICK_FIELD_NAME_ID: &str = "pick-field-name";

/// The record id is the final path segment of the clicked link's href.
#[must_use]
pub fn record_id_from_href(href: &str) -> &str {
    href.rsplit('/').next().unwrap_or(href)
}

/// True when this document is the pick-result window.
#[must_use]
pub fn is_pick_window(doc: &Document) -> bool {
    doc.element_by_id(PICK_ROOT_ID).is_some()
}

/// Opener half: the designated link opens its href in a new context
/// instead of navigating.
pub fn pick_link_clicked<W: WindowPort>(
    doc: &Document,
    link: NodeId,
    windows: &mut W,
) -> EventOutcome {
    let Some(href) = doc.attr(link, "href") else {
        return EventOutcome::ignored();
    };
    windows.open(href);
    EventOutcome::prevented()
}

/// Popup half: a result row's link was clicked.
///
/// Extracts the target field name and the record id, delivers them to the
/// opener and closes the popup. Delivery failure (opener gone, field gone)
/// is logged and otherwise ignored.
pub fn result_link_clicked<W: WindowPort>(
    doc: &Document,
    link: NodeId,
    windows: &mut W,
) -> EventOutcome {
    let field_name = doc
        .element_by_id(PICK_FIELD_NAME_ID)
        .map(|node| doc.text(node).to_owned())
        .unwrap_or_default();
    let record_id = doc
        .attr(link, "href")
        .map(record_id_from_href)
        .unwrap_or_default()
        .to_owned();

    let message = PickerMessage {
        field_name,
        record_id,
    };
    if !windows.deliver(&message) {
        debug!(field = %message.field_name, "opener gone, pick not delivered");
    }
    windows.close();
    EventOutcome::prevented()
}
