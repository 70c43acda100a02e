//! Rich-text editor attach sweep.
//!
//! Every designated textarea gets an editor instance with the panel's fixed
//! toolbar. A failed attach is logged and skipped; the rest of the page
//! keeps its editors.

use tracing::error;

use crate::backend::RichTextHost;
use crate::dom::Document;

/// Class of the textareas that receive a rich-text editor.
pub const EDITOR_CLASS: &str = "kaffy-editor";

/// Fixed toolbar layout, in display order.
pub const TOOLBAR: [&str; 16] = [
    "heading",
    "|",
    "bold",
    "italic",
    "link",
    "bulletedList",
    "numberedList",
    "blockQuote",
    "|",
    "indent",
    "outdent",
    "|",
    "insertTable",
    "|",
    "undo",
    "redo",
];

/// Attaches an editor to every designated textarea with an id.
///
/// Returns how many attachments succeeded.
pub fn attach_all<H: RichTextHost + ?Sized>(doc: &Document, host: &mut H) -> usize {
    let mut attached = 0;
    for textarea in doc.elements_by_class(EDITOR_CLASS) {
        let Some(id) = doc.id(textarea) else {
            continue;
        };
        match host.attach(id, &TOOLBAR) {
            Ok(()) => attached += 1,
            Err(err) => error!(textarea = %id, error = %err, "editor attach failed"),
        }
    }
    attached
}
