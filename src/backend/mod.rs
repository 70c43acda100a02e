//! Contracts for the external widgets the binding layer drives.
//!
//! The charting engine, data-table widget, maps surface, rich-text editor,
//! popup windows, navigation and alert UI are all external collaborators.
//! Adapters hand them fully materialized, typed payloads so widget code
//! stays isolated from page scanning and form-state logic.

mod recording;

pub use recording::{
    RecordingChartSurface, RecordingMapSurface, RecordingNotifier, RecordingRichTextHost,
    RecordingScriptLoader, RecordingSubmitter, RecordingTableWidget, RecordingWindowPort,
};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{BoundsRect, ChartSeries, GeoPoint};
use crate::error::BindResult;

/// Fixed visual theme applied to every mounted chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartTheme {
    pub font_family: String,
    pub font_color: String,
    pub line_tension: f64,
    pub fill_color: String,
    pub stroke_color: String,
    pub point_radius: f64,
    pub point_border_color: String,
    pub point_hover_radius: f64,
    pub point_hit_radius: f64,
    pub point_border_width: f64,
    pub grid_color: String,
    pub x_tick_limit: u32,
    pub y_tick_limit: u32,
    pub legend_visible: bool,
    pub tooltip_background: String,
    pub tooltip_body_color: String,
    pub tooltip_title_color: String,
    pub tooltip_border_color: String,
    /// Tooltips follow the hovered index instead of requiring intersection.
    pub tooltip_index_mode: bool,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            font_family: "-apple-system,system-ui,BlinkMacSystemFont,\"Segoe UI\",Roboto,\"Helvetica Neue\",Arial,sans-serif".to_owned(),
            font_color: "#292b2c".to_owned(),
            line_tension: 0.3,
            fill_color: "rgba(2,117,216,0.2)".to_owned(),
            stroke_color: "rgba(2,117,216,1)".to_owned(),
            point_radius: 5.0,
            point_border_color: "rgba(255,255,255,0.8)".to_owned(),
            point_hover_radius: 5.0,
            point_hit_radius: 50.0,
            point_border_width: 2.0,
            grid_color: "rgb(234,236,244)".to_owned(),
            x_tick_limit: 7,
            y_tick_limit: 5,
            legend_visible: false,
            tooltip_background: "rgb(255,255,255)".to_owned(),
            tooltip_body_color: "#858796".to_owned(),
            tooltip_title_color: "#6e707e".to_owned(),
            tooltip_border_color: "#dddfeb".to_owned(),
            tooltip_index_mode: true,
        }
    }
}

/// Everything a chart backend needs to mount one line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Id of the canvas the chart renders into.
    pub canvas_id: String,
    pub series: ChartSeries,
    pub theme: ChartTheme,
}

/// Charting engine contract. Mounting is terminal and write-only: nothing
/// downstream consumes a mounted chart.
pub trait ChartSurface {
    fn mount(&mut self, spec: &ChartSpec);
}

/// Data-table widget bootstrap configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Query endpoint handling paging and filtering server side.
    pub endpoint: String,
    pub server_side: bool,
    pub processing: bool,
    /// Client-side sorting stays off; ordering is owned by the filter form.
    pub ordering: bool,
    /// Explicit column list pairing columns with server responses.
    pub columns: Option<Vec<String>>,
}

/// Paginated table widget contract (server-side processing engine).
pub trait TableWidget {
    fn configure(&mut self, config: &TableConfig);
    /// Applies a per-column search term; takes effect on the next redraw.
    fn column_search(&mut self, column_index: usize, value: &str);
    fn redraw(&mut self);
}

/// Serialized form state handed to the navigation layer on submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub form_id: String,
    /// Field id -> value, in document order.
    pub fields: IndexMap<String, String>,
}

/// Full-page form submission. Submitting is an irreversible transition: the
/// page navigates and this binding layer is torn down with it.
pub trait FormSubmitter {
    fn submit(&mut self, form: &FormSnapshot);
}

/// Blocking user-facing notice (alert dialog).
pub trait Notifier {
    fn alert(&mut self, message: &str);
}

/// Wire schema of the cross-window picker channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickerMessage {
    pub field_name: String,
    pub record_id: String,
}

/// Browsing-context operations used by the cross-window picker.
pub trait WindowPort {
    /// Opens `url` in a new browsing context.
    fn open(&mut self, url: &str);
    /// Delivers a picked record to the opener window. Returns `false` when
    /// the opener or its target field no longer exists; the caller treats
    /// that as a silent, acceptable failure.
    fn deliver(&mut self, message: &PickerMessage) -> bool;
    /// Closes the current (popup) window.
    fn close(&mut self);
}

/// Maps surface owning marker and rectangle rendering.
pub trait MapSurface {
    fn place_markers(&mut self, first: GeoPoint, second: GeoPoint);
    fn draw_rectangle(&mut self, rect: BoundsRect);
}

/// One-shot external script injection (the maps SDK).
pub trait ScriptLoader {
    fn request(&mut self, url: &str);
}

/// Rich-text editor engine attaching to designated textareas.
pub trait RichTextHost {
    fn attach(&mut self, textarea_id: &str, toolbar: &[&str]) -> BindResult<()>;
}
