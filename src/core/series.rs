//! Encoded-data reader for chart markers.
//!
//! The server embeds each chart's data as comma-separated text inside fixed
//! sibling elements of a marker node. Reading is best effort by contract: a
//! malformed series degrades the rendered chart, it never aborts the page.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dom::{Document, NodeId};

/// Class of the marker elements the chart sweep looks for.
pub const CHART_MARKER_CLASS: &str = "kaffy-chart";
/// Class of the wrapper holding the encoded value spans.
pub const VALUES_CLASS: &str = "values";
/// Class of the span carrying comma-separated category labels.
pub const X_AXIS_CLASS: &str = "x-axis";
/// Class of the span carrying the series title.
pub const Y_TITLE_CLASS: &str = "y-title";
/// Class of the span carrying comma-separated numeric values.
pub const Y_AXIS_CLASS: &str = "y-axis";

/// One chart's worth of server-encoded data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Series title shown in tooltips (the y-axis title span).
    pub label: String,
    /// Ordered category labels for the x axis.
    pub categories: Vec<String>,
    /// Ordered y values; non-numeric tokens survive as `NaN`.
    pub values: Vec<f64>,
}

impl ChartSeries {
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.categories.len() == self.values.len()
    }
}

/// Splits comma-separated text into tokens without trimming.
///
/// Mirrors the markup contract: labels keep their surrounding whitespace,
/// and empty text still yields one (empty) token.
#[must_use]
pub fn split_tokens(text: &str) -> Vec<String> {
    text.split(',').map(str::to_owned).collect()
}

/// Coerces one encoded token into a number.
///
/// Whitespace-only tokens coerce to zero; anything that fails to parse as a
/// float becomes `NaN` and is carried through to the chart backend.
#[must_use]
pub fn parse_number(token: &str) -> f64 {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Reads the encoded series out of one marker element.
///
/// Missing value spans produce an empty (degraded) series rather than an
/// error; the chart still mounts and simply renders nothing useful.
#[must_use]
pub fn read_series(doc: &Document, marker: NodeId) -> ChartSeries {
    let Some(values) = doc.first_child_by_class(marker, VALUES_CLASS) else {
        debug!(marker = ?doc.id(marker), "chart marker has no values wrapper");
        return ChartSeries {
            label: String::new(),
            categories: Vec::new(),
            values: Vec::new(),
        };
    };

    let span_text = |class: &str| {
        doc.first_child_by_class(values, class)
            .map(|span| doc.text(span).to_owned())
            .unwrap_or_default()
    };

    let categories = split_tokens(&span_text(X_AXIS_CLASS));
    let label = span_text(Y_TITLE_CLASS);
    let values = split_tokens(&span_text(Y_AXIS_CLASS))
        .iter()
        .map(|token| parse_number(token))
        .collect();

    ChartSeries {
        label,
        categories,
        values,
    }
}
