//! Table adapter: one server-driven table widget per page.
//!
//! The widget delegates paging and filtering to a query endpoint the server
//! wrote into the page; client-side ordering stays disabled so the filter
//! form remains the single source of truth for sort state. Per-column
//! filter controls bind directly to the widget's column search (no page
//! reload), validated against the advertised column list at initialization.

use tracing::{debug, warn};

use crate::backend::{TableConfig, TableWidget};
use crate::core::columns::{ColumnBindings, ResolvedFilter};
use crate::dom::{Document, NodeId};
use crate::error::{BindError, BindResult};

/// Element whose text is the table's query endpoint URL.
pub const API_URL_ID: &str = "kaffy-api-url";
/// Element whose text is the comma-separated column-name list.
pub const COLUMN_NAMES_ID: &str = "column-names";
/// Class of the per-column filter controls.
pub const COLUMN_FILTER_CLASS: &str = "kaffy-column-filter";
/// Attribute on a filter control naming the column field it narrows.
pub const COLUMN_FIELD_ATTR: &str = "data-field-name";

/// A configured table widget plus its resolved per-column filters.
#[derive(Debug)]
pub struct TableAdapter {
    filters: Vec<ResolvedFilter>,
}

impl TableAdapter {
    /// Reads the endpoint and column list, configures the widget and binds
    /// the per-column filter controls.
    ///
    /// A missing endpoint element is a hard error: the table cannot work at
    /// all without it. A filter control naming an unknown column is equally
    /// hard, so drifted markup fails at page load instead of silently
    /// narrowing the wrong column. A missing column list only disables the
    /// per-column binding; the table falls back to plain server paging.
    pub fn initialize<W: TableWidget + ?Sized>(doc: &Document, widget: &mut W) -> BindResult<Self> {
        let endpoint = doc
            .element_by_id(API_URL_ID)
            .map(|node| doc.text(node).to_owned())
            .ok_or_else(|| BindError::MissingElement(API_URL_ID.to_owned()))?;

        let columns = doc
            .element_by_id(COLUMN_NAMES_ID)
            .map(|node| ColumnBindings::from_csv(doc.text(node)));

        widget.configure(&TableConfig {
            endpoint,
            server_side: true,
            processing: true,
            ordering: false,
            columns: columns.as_ref().map(|c| c.names().to_vec()),
        });

        let filters = match &columns {
            Some(bindings) => Self::bind_filters(doc, bindings)?,
            None => {
                debug!("no column list advertised, skipping per-column filter binding");
                Vec::new()
            }
        };

        Ok(Self { filters })
    }

    fn bind_filters(doc: &Document, bindings: &ColumnBindings) -> BindResult<Vec<ResolvedFilter>> {
        let mut resolved = Vec::new();
        for control in doc.elements_by_class(COLUMN_FILTER_CLASS) {
            let control_id = doc.id(control).unwrap_or("<anonymous>").to_owned();
            let Some(field) = doc.attr(control, COLUMN_FIELD_ATTR) else {
                warn!(control = %control_id, "column filter without {COLUMN_FIELD_ATTR}, skipping");
                continue;
            };
            resolved.push(bindings.resolve(control, &control_id, field)?);
        }
        Ok(resolved)
    }

    #[must_use]
    pub fn filters(&self) -> &[ResolvedFilter] {
        &self.filters
    }

    /// A bound filter control changed: apply its value as that column's
    /// search term and redraw in place. This bypasses the filter form by
    /// design; it narrows the current listing without a round trip.
    pub fn column_filter_changed<W: TableWidget>(
        &self,
        doc: &Document,
        control: NodeId,
        widget: &mut W,
    ) {
        let Some(filter) = self.filters.iter().find(|f| f.control == control) else {
            debug!("change event from unbound filter control, ignoring");
            return;
        };
        widget.column_search(filter.column_index, doc.value(control));
        widget.redraw();
    }
}
