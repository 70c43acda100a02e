//! Page-level wiring of the five adapters.
//!
//! [`PanelBinder::bind`] is the page-load entry point: it sweeps the
//! document once, mounts charts and editors, configures the table when the
//! page advertises one, attaches the filter-form controller and prepares
//! the lazily-initialized bounds editor. Everything after that is driven by
//! discrete events routed to the individual adapters.

pub mod bounds_editor;
pub mod chart_adapter;
pub mod editor_adapter;
pub mod file_field;
pub mod filter_form;
pub mod picker;
pub mod selection_tracker;
pub mod table_adapter;

pub use bounds_editor::{BoundsEditor, BoundsMarker, LoaderState, ResourceLoader};
pub use filter_form::FilterFormController;
pub use selection_tracker::SelectionTracker;
pub use table_adapter::TableAdapter;

use tracing::debug;

use crate::backend::{ChartSurface, ChartTheme, RichTextHost, TableWidget};
use crate::dom::Document;
use crate::error::BindResult;

/// External collaborators needed at page-load time.
pub struct PanelBackends<'a> {
    pub charts: &'a mut dyn ChartSurface,
    pub table: &'a mut dyn TableWidget,
    pub editors: &'a mut dyn RichTextHost,
}

/// One page's worth of live bindings.
#[derive(Debug)]
pub struct PanelBinder {
    /// Present when the page carries the hidden filter form.
    pub filter_form: Option<FilterFormController>,
    /// Present when the page advertises a table query endpoint.
    pub table: Option<TableAdapter>,
    /// Always present; initializes itself on first panel reveal.
    pub bounds: BoundsEditor,
    /// This document is a pick-result popup.
    pub pick_window: bool,
    pub charts_mounted: usize,
    pub editors_attached: usize,
}

impl PanelBinder {
    /// Binds a freshly loaded page with the default chart theme.
    pub fn bind(doc: &Document, backends: &mut PanelBackends<'_>) -> BindResult<Self> {
        Self::bind_with_theme(doc, backends, &ChartTheme::default())
    }

    /// Binds a freshly loaded page.
    ///
    /// Fails loudly only on contract violations worth stopping the page
    /// for: a table whose filter controls reference unknown columns. Pages
    /// without a filter form or table simply skip those bindings.
    pub fn bind_with_theme(
        doc: &Document,
        backends: &mut PanelBackends<'_>,
        theme: &ChartTheme,
    ) -> BindResult<Self> {
        let charts_mounted = chart_adapter::scan(doc, backends.charts, theme);
        let editors_attached = editor_adapter::attach_all(doc, backends.editors);

        let filter_form = match FilterFormController::attach(doc) {
            Ok(controller) => Some(controller),
            Err(err) => {
                debug!(error = %err, "page has no filter form");
                None
            }
        };

        let table = if doc.element_by_id(table_adapter::API_URL_ID).is_some() {
            Some(TableAdapter::initialize(doc, backends.table)?)
        } else {
            None
        };

        Ok(Self {
            filter_form,
            table,
            bounds: BoundsEditor::new(),
            pick_window: picker::is_pick_window(doc),
            charts_mounted,
            editors_attached,
        })
    }
}
