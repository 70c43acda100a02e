//! Chart adapter: one chart instance per marker element.
//!
//! Charts are terminal, write-only consumers of the encoded data model; a
//! marker that cannot be mounted is skipped and the sweep continues, so a
//! single malformed chart never takes the page down.

use tracing::debug;

use crate::backend::{ChartSpec, ChartSurface, ChartTheme};
use crate::core::series::{self, CHART_MARKER_CLASS};
use crate::dom::Document;

/// Mounts a chart for every marker element on the page.
///
/// Returns how many charts were mounted; markers without an identifiable
/// canvas are skipped silently.
pub fn scan<C: ChartSurface + ?Sized>(doc: &Document, surface: &mut C, theme: &ChartTheme) -> usize {
    let mut mounted = 0;
    for marker in doc.elements_by_class(CHART_MARKER_CLASS) {
        let canvas_id = doc
            .first_child_by_tag(marker, "canvas")
            .and_then(|canvas| doc.id(canvas))
            .map(str::to_owned);
        let Some(canvas_id) = canvas_id else {
            debug!(marker = ?doc.id(marker), "chart marker has no canvas, skipping");
            continue;
        };
        if doc.element_by_id(&canvas_id).is_none() {
            debug!(canvas = %canvas_id, "canvas id does not resolve, skipping chart");
            continue;
        }

        let series = series::read_series(doc, marker);
        surface.mount(&ChartSpec {
            canvas_id,
            series,
            theme: theme.clone(),
        });
        mounted += 1;
    }
    mounted
}
