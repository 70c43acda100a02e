//! Filter-form synchronizer.
//!
//! Every control that should influence the next server request routes
//! through one controller owning the typed [`RequestState`]. Each handler is
//! stateless in the event sense: it reads the control's current value,
//! rewrites the canonical state in full, flushes it into the hidden form and
//! submits. Submitting is equivalent to a full page reload with new query
//! parameters and is the only state-transition mechanism in the layer.

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::backend::{FormSnapshot, FormSubmitter};
use crate::core::request_state::{
    CUSTOM_FILTER_PREFIX, FILTER_FORM_ID, ORDER_FIELD_INPUT_ID, ORDER_WAY_INPUT_ID, PAGE_INPUT_ID,
    RequestState, SEARCH_INPUT_ID, SortDirection,
};
use crate::dom::{Document, NodeId};
use crate::error::{BindError, BindResult};
use crate::interaction::{EventOutcome, Key};

/// Visible search box the user types into.
pub const SEARCH_FIELD_ID: &str = "kaffy-search-field";
/// Form wrapping the visible search box.
pub const SEARCH_FORM_ID: &str = "kaffy-search-form";
/// Class of the dropdown filters bound to custom filter fields.
pub const FILTER_CONTROL_CLASS: &str = "kaffy-filter";
/// Class of the column-header sort links.
pub const ORDER_LINK_CLASS: &str = "kaffy-order-field";
/// Attribute naming the server field a control writes to.
pub const FIELD_NAME_ATTR: &str = "data-field-name";
/// Attribute naming the field a sort link orders by.
pub const FIELD_ATTR: &str = "data-field";
/// Attribute carrying a sort link's direction.
pub const ORDER_ATTR: &str = "data-order";

/// Controller owning canonical request state and the hidden filter form.
#[derive(Debug)]
pub struct FilterFormController {
    form: NodeId,
    state: RequestState,
}

impl FilterFormController {
    /// Locates the hidden filter form and seeds state from the values the
    /// server rendered into it.
    pub fn attach(doc: &Document) -> BindResult<Self> {
        let form = doc
            .element_by_id(FILTER_FORM_ID)
            .ok_or_else(|| BindError::MissingElement(FILTER_FORM_ID.to_owned()))?;

        let mut state = RequestState::new();
        for child in doc.children(form) {
            let Some(id) = doc.id(*child) else { continue };
            let value = doc.value(*child);
            match id {
                SEARCH_INPUT_ID => state.set_search(value),
                ORDER_FIELD_INPUT_ID | ORDER_WAY_INPUT_ID => {}
                PAGE_INPUT_ID => {
                    if let Ok(page) = value.parse::<u32>() {
                        state.set_page(page);
                    }
                }
                custom => {
                    if let Some(field) = custom.strip_prefix(CUSTOM_FILTER_PREFIX) {
                        state.set_custom_filter(field, value);
                    }
                }
            }
        }
        // Ordering is seeded as a pair so a lone direction never survives.
        let order_field = Self::child_value(doc, form, ORDER_FIELD_INPUT_ID);
        let order_way = Self::child_value(doc, form, ORDER_WAY_INPUT_ID);
        if !order_field.is_empty() && !order_way.is_empty() {
            let way = SortDirection::parse(&order_way);
            let page = state.page();
            state.set_sort(&order_field, way);
            state.set_page(page);
        }

        Ok(Self { form, state })
    }

    fn child_value(doc: &Document, form: NodeId, id: &str) -> String {
        doc.children(form)
            .iter()
            .find(|child| doc.id(**child) == Some(id))
            .map(|child| doc.value(*child).to_owned())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Dropdown filter changed: mirror its value and submit.
    pub fn custom_filter_changed<S: FormSubmitter>(
        &mut self,
        doc: &mut Document,
        control: NodeId,
        submitter: &mut S,
    ) -> EventOutcome {
        let Some(field) = doc.attr(control, FIELD_NAME_ATTR).map(str::to_owned) else {
            debug!("filter control without {FIELD_NAME_ATTR}, ignoring change");
            return EventOutcome::ignored();
        };
        let value = doc.value(control).to_owned();
        trace!(field = %field, value = %value, "custom filter changed");
        self.state.set_custom_filter(&field, &value);
        self.flush_and_submit(doc, submitter);
        EventOutcome::submitted()
    }

    /// Keypress in the search box: only Enter submits.
    pub fn search_key_pressed<S: FormSubmitter>(
        &mut self,
        doc: &mut Document,
        key: Key,
        submitter: &mut S,
    ) -> EventOutcome {
        if key != Key::Enter {
            return EventOutcome::ignored();
        }
        self.capture_search(doc);
        self.flush_and_submit(doc, submitter);
        EventOutcome::submitted()
    }

    /// Search form submitted: mirror the search text, submit the filter form
    /// and suppress the native submission that would bypass it.
    pub fn search_form_submitted<S: FormSubmitter>(
        &mut self,
        doc: &mut Document,
        submitter: &mut S,
    ) -> EventOutcome {
        self.capture_search(doc);
        self.flush_and_submit(doc, submitter);
        EventOutcome::prevented_and_submitted()
    }

    /// Sort link clicked: write field and direction, return to page 1.
    pub fn sort_link_clicked<S: FormSubmitter>(
        &mut self,
        doc: &mut Document,
        link: NodeId,
        submitter: &mut S,
    ) -> EventOutcome {
        let Some(field) = doc.attr(link, FIELD_ATTR).map(str::to_owned) else {
            debug!("sort link without {FIELD_ATTR}, ignoring click");
            return EventOutcome::ignored();
        };
        let way = SortDirection::parse(doc.attr(link, ORDER_ATTR).unwrap_or_default());
        trace!(field = %field, way = way.as_str(), "sort link clicked");
        self.state.set_sort(&field, way);
        self.flush_and_submit(doc, submitter);
        EventOutcome::prevented_and_submitted()
    }

    /// Pagination control selected a page.
    pub fn page_selected<S: FormSubmitter>(
        &mut self,
        doc: &mut Document,
        page: u32,
        submitter: &mut S,
    ) -> EventOutcome {
        self.state.set_page(page);
        self.flush_and_submit(doc, submitter);
        EventOutcome::prevented_and_submitted()
    }

    fn capture_search(&mut self, doc: &Document) {
        let value = doc
            .element_by_id(SEARCH_FIELD_ID)
            .map(|field| doc.value(field).to_owned())
            .unwrap_or_default();
        self.state.set_search(&value);
    }

    /// Rewrites every canonical field into the form, then submits it whole.
    fn flush_and_submit<S: FormSubmitter>(&self, doc: &mut Document, submitter: &mut S) {
        for (id, value) in self.state.form_fields() {
            let input = doc.ensure_child_input(self.form, &id);
            doc.set_value(input, &value);
        }
        submitter.submit(&self.snapshot(doc));
    }

    /// Serialized view of the live form, including inputs the server added
    /// beyond the canonical set.
    #[must_use]
    pub fn snapshot(&self, doc: &Document) -> FormSnapshot {
        let mut fields = IndexMap::new();
        for child in doc.children(self.form) {
            let Some(key) = doc.id(*child).or_else(|| doc.attr(*child, "name")) else {
                continue;
            };
            fields.insert(key.to_owned(), doc.value(*child).to_owned());
        }
        FormSnapshot {
            form_id: FILTER_FORM_ID.to_owned(),
            fields,
        }
    }
}
