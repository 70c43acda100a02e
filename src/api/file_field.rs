//! File-upload field proxy.
//!
//! The visible browse button stands in for a hidden native file input; a
//! chosen file's name is mirrored into the visible text control with the
//! browser's `C:\fakepath\` prefix stripped. Lookups stay scoped to the
//! button's enclosing upload group so several upload fields can share a
//! page.

use crate::dom::{Document, NodeId};

/// Class of the visible browse buttons.
pub const BROWSE_CLASS: &str = "file-upload-browse";
/// Class of the hidden native file inputs.
pub const FILE_INPUT_CLASS: &str = "file-upload-default";
/// Class of the visible text control mirroring the chosen name.
pub const DISPLAY_CLASS: &str = "form-control";

const FAKEPATH_PREFIX: &str = "c:\\fakepath\\";

fn nearest_in_group(doc: &Document, from: NodeId, class: &str) -> Option<NodeId> {
    let mut scope = doc.parent(from);
    while let Some(node) = scope {
        if let Some(found) = doc
            .descendants(node)
            .into_iter()
            .find(|candidate| doc.has_class(*candidate, class))
        {
            return Some(found);
        }
        scope = doc.parent(node);
    }
    None
}

/// Browse button clicked: resolve the hidden file input whose native dialog
/// should open.
#[must_use]
pub fn proxy_target(doc: &Document, button: NodeId) -> Option<NodeId> {
    nearest_in_group(doc, button, FILE_INPUT_CLASS)
}

/// File input changed: mirror the chosen filename into the display control
/// of the same upload group.
pub fn file_chosen(doc: &mut Document, input: NodeId) {
    let raw = doc.value(input).to_owned();
    let name = strip_fakepath(&raw).to_owned();
    if let Some(display) = nearest_in_group(doc, input, DISPLAY_CLASS) {
        doc.set_value(display, &name);
    }
}

/// Strips a leading Windows fakepath prefix, case-insensitively.
#[must_use]
pub fn strip_fakepath(value: &str) -> &str {
    if value.len() >= FAKEPATH_PREFIX.len()
        && value[..FAKEPATH_PREFIX.len()].eq_ignore_ascii_case(FAKEPATH_PREFIX)
    {
        &value[FAKEPATH_PREFIX.len()..]
    } else {
        value
    }
}
