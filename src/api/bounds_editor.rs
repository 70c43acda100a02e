//! Map-bounds editor.
//!
//! Two draggable markers span an axis-aligned rectangle; every drag
//! recomputes the rectangle and rewrites all of its mirrors (the visible
//! read-outs, the marker coordinate inputs and the hidden filter-form
//! fields) in one pass. Submission stays a separate, explicit user action.
//!
//! The maps SDK is loaded lazily on first reveal of the containing panel,
//! through an explicit loader state machine so a reopened panel can never
//! inject the script twice.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::backend::{MapSurface, Notifier, ScriptLoader};
use crate::core::bounds::{BoundsRect, GeoPoint};
use crate::core::request_state::{CUSTOM_FILTER_PREFIX, FILTER_FORM_ID};
use crate::dom::Document;

/// Meta tag carrying the maps API key.
pub const API_KEY_META: &str = "gmap-api-key";
/// Panel (modal) whose first reveal triggers SDK loading.
pub const MAP_MODAL_ID: &str = "modalMap";
/// Container element the map renders into.
pub const MAP_CONTAINER_ID: &str = "map";
/// Visible read-out for the first marker.
pub const TOP_READOUT_ID: &str = "top-corner";
/// Visible read-out for the second marker.
pub const BOTTOM_READOUT_ID: &str = "bot-corner";

/// `data-field-name` values of the four mirrored coordinate inputs.
pub const MARKER_FIELDS: [&str; 4] = [
    "map_marker_1_lat",
    "map_marker_1_lon",
    "map_marker_2_lat",
    "map_marker_2_lon",
];

/// Blocking notice raised when no API key is configured.
pub const MISSING_KEY_MESSAGE: &str = "Please set a meta tag in your markup containing your Google Maps API key: meta[name='gmap-api-key']";

/// Fallback map origin when no stored coordinates exist.
pub const FALLBACK_ORIGIN: GeoPoint = GeoPoint::new(51.5358025, 0.0198837000000367);
/// Default latitude offset keeping the two default markers visibly apart.
pub const FIRST_MARKER_LAT_OFFSET: f64 = 0.2;
/// Default longitude offset for the second marker.
pub const SECOND_MARKER_LON_OFFSET: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LoaderState {
    #[default]
    Unloaded,
    Loading,
    Ready,
    Failed,
}

/// One-shot external script loader, idempotent under repeated `begin` calls.
#[derive(Debug, Default)]
pub struct ResourceLoader {
    state: LoaderState,
}

impl ResourceLoader {
    #[must_use]
    pub fn state(&self) -> LoaderState {
        self.state
    }

    /// Starts loading on the first call; every later call is a no-op.
    /// A missing key raises the blocking notice and fails for good.
    pub fn begin<S: ScriptLoader, N: Notifier>(
        &mut self,
        api_key: Option<&str>,
        scripts: &mut S,
        notifier: &mut N,
    ) -> LoaderState {
        if self.state != LoaderState::Unloaded {
            return self.state;
        }
        match api_key {
            Some(key) => {
                scripts.request(&format!(
                    "https://maps.googleapis.com/maps/api/js?key={key}&callback=mapLoadedCallback"
                ));
                self.state = LoaderState::Loading;
            }
            None => {
                notifier.alert(MISSING_KEY_MESSAGE);
                self.state = LoaderState::Failed;
            }
        }
        self.state
    }

    /// Script-load completion callback.
    pub fn complete(&mut self) {
        if self.state == LoaderState::Loading {
            self.state = LoaderState::Ready;
        }
    }
}

/// Which of the two corner markers an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundsMarker {
    First,
    Second,
}

/// Lazily initialized editor over two draggable markers.
#[derive(Debug, Default)]
pub struct BoundsEditor {
    loader: ResourceLoader,
    markers: Option<(GeoPoint, GeoPoint)>,
}

impl BoundsEditor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn loader_state(&self) -> LoaderState {
        self.loader.state()
    }

    #[must_use]
    pub fn markers(&self) -> Option<(GeoPoint, GeoPoint)> {
        self.markers
    }

    /// Current rectangle, once the map has initialized.
    #[must_use]
    pub fn rect(&self) -> Option<BoundsRect> {
        self.markers
            .map(|(first, second)| BoundsRect::from_corners(first, second))
    }

    /// The containing panel was revealed: kick the loader.
    pub fn panel_revealed<S: ScriptLoader, N: Notifier>(
        &mut self,
        doc: &Document,
        scripts: &mut S,
        notifier: &mut N,
    ) -> LoaderState {
        let key = doc.meta_content(API_KEY_META).map(str::to_owned);
        self.loader.begin(key.as_deref(), scripts, notifier)
    }

    /// The maps SDK finished loading: place the markers and draw the
    /// initial rectangle. Stored coordinates win over the fallback origin.
    pub fn script_loaded<M: MapSurface>(&mut self, doc: &mut Document, map: &mut M) {
        self.loader.complete();
        if self.loader.state() != LoaderState::Ready {
            warn!(state = ?self.loader.state(), "script completion in unexpected loader state");
            return;
        }

        let first = GeoPoint::new(
            stored_coord(doc, MARKER_FIELDS[0])
                .unwrap_or(FALLBACK_ORIGIN.lat + FIRST_MARKER_LAT_OFFSET),
            stored_coord(doc, MARKER_FIELDS[1]).unwrap_or(FALLBACK_ORIGIN.lon),
        );
        let second = GeoPoint::new(
            stored_coord(doc, MARKER_FIELDS[2]).unwrap_or(FALLBACK_ORIGIN.lat),
            stored_coord(doc, MARKER_FIELDS[3])
                .unwrap_or(FALLBACK_ORIGIN.lon + SECOND_MARKER_LON_OFFSET),
        );
        self.markers = Some((first, second));
        map.place_markers(first, second);
        self.redraw(doc, map);
    }

    /// A marker finished dragging: recompute and mirror everything.
    pub fn marker_dragged<M: MapSurface>(
        &mut self,
        doc: &mut Document,
        marker: BoundsMarker,
        position: GeoPoint,
        map: &mut M,
    ) {
        let Some((first, second)) = self.markers.as_mut() else {
            debug!("drag before map initialization, ignoring");
            return;
        };
        match marker {
            BoundsMarker::First => *first = position,
            BoundsMarker::Second => *second = position,
        }
        self.redraw(doc, map);
    }

    /// Rewrites every mirror of the current rectangle: the map overlay, the
    /// two visible read-outs, the four coordinate inputs and the four
    /// hidden filter-form fields. Never submits.
    fn redraw<M: MapSurface>(&self, doc: &mut Document, map: &mut M) {
        let Some((first, second)) = self.markers else {
            return;
        };
        map.draw_rectangle(BoundsRect::from_corners(first, second));

        if let Some(readout) = doc.element_by_id(TOP_READOUT_ID) {
            let text = format!("{}::{}", first.lat, first.lon);
            doc.set_text(readout, &text);
        }
        if let Some(readout) = doc.element_by_id(BOTTOM_READOUT_ID) {
            let text = format!("{}::{}", second.lat, second.lon);
            doc.set_text(readout, &text);
        }

        let values: SmallVec<[(&str, f64); 4]> = SmallVec::from_buf([
            (MARKER_FIELDS[0], first.lat),
            (MARKER_FIELDS[1], first.lon),
            (MARKER_FIELDS[2], second.lat),
            (MARKER_FIELDS[3], second.lon),
        ]);
        let form = doc.element_by_id(FILTER_FORM_ID);
        for (field, value) in values {
            let rendered = value.to_string();
            for input in doc.elements_with_attr("data-field-name", field) {
                doc.set_value(input, &rendered);
            }
            if let Some(form) = form {
                let input = doc.ensure_child_input(form, &format!("{CUSTOM_FILTER_PREFIX}{field}"));
                doc.set_value(input, &rendered);
            }
        }
    }
}

fn stored_coord(doc: &Document, field: &str) -> Option<f64> {
    doc.elements_with_attr("data-field-name", field)
        .first()
        .and_then(|input| doc.value(*input).trim().parse::<f64>().ok())
}
