use approx::assert_relative_eq;

use panel_bind::api::bounds_editor::{
    API_KEY_META, BOTTOM_READOUT_ID, BoundsEditor, BoundsMarker, FALLBACK_ORIGIN,
    FIRST_MARKER_LAT_OFFSET, LoaderState, MARKER_FIELDS, MISSING_KEY_MESSAGE,
    SECOND_MARKER_LON_OFFSET, TOP_READOUT_ID,
};
use panel_bind::backend::{
    RecordingMapSurface, RecordingNotifier, RecordingScriptLoader,
};
use panel_bind::core::GeoPoint;
use panel_bind::core::request_state::FILTER_FORM_ID;
use panel_bind::dom::{Document, NodeId};

fn map_page(doc: &mut Document, api_key: Option<&str>) -> NodeId {
    if let Some(key) = api_key {
        let head = doc.head();
        let meta = doc.create_element("meta");
        doc.set_attr(meta, "name", API_KEY_META);
        doc.set_attr(meta, "content", key);
        doc.append_child(head, meta);
    }

    let body = doc.body();
    for id in [TOP_READOUT_ID, BOTTOM_READOUT_ID] {
        let readout = doc.create_element("span");
        doc.set_id(readout, id);
        doc.append_child(body, readout);
    }
    for field in MARKER_FIELDS {
        let input = doc.create_element("input");
        doc.set_attr(input, "data-field-name", field);
        doc.append_child(body, input);
    }

    let form = doc.create_element("form");
    doc.set_id(form, FILTER_FORM_ID);
    doc.append_child(body, form);
    form
}

fn form_field(doc: &Document, form: NodeId, id: &str) -> String {
    doc.children(form)
        .iter()
        .find(|child| doc.id(**child) == Some(id))
        .map(|child| doc.value(*child).to_owned())
        .unwrap_or_default()
}

fn stored_field(doc: &Document, field: &str) -> String {
    doc.elements_with_attr("data-field-name", field)
        .first()
        .map(|input| doc.value(*input).to_owned())
        .unwrap_or_default()
}

#[test]
fn missing_api_key_fails_with_blocking_notice() {
    let mut doc = Document::new();
    map_page(&mut doc, None);

    let mut editor = BoundsEditor::new();
    let mut scripts = RecordingScriptLoader::default();
    let mut notifier = RecordingNotifier::default();

    let state = editor.panel_revealed(&doc, &mut scripts, &mut notifier);
    assert_eq!(state, LoaderState::Failed);
    assert!(scripts.requested.is_empty());
    assert_eq!(notifier.alerts, vec![MISSING_KEY_MESSAGE.to_owned()]);

    // Failure is sticky; a reopened panel never retries nor re-alerts.
    let state = editor.panel_revealed(&doc, &mut scripts, &mut notifier);
    assert_eq!(state, LoaderState::Failed);
    assert_eq!(notifier.alerts.len(), 1);
}

#[test]
fn script_is_never_injected_twice() {
    let mut doc = Document::new();
    map_page(&mut doc, Some("key-123"));

    let mut editor = BoundsEditor::new();
    let mut scripts = RecordingScriptLoader::default();
    let mut notifier = RecordingNotifier::default();

    for _ in 0..3 {
        editor.panel_revealed(&doc, &mut scripts, &mut notifier);
    }
    assert_eq!(scripts.requested.len(), 1);
    assert!(scripts.requested[0].contains("key=key-123"));
    assert_eq!(editor.loader_state(), LoaderState::Loading);

    let mut map = RecordingMapSurface::default();
    editor.script_loaded(&mut doc, &mut map);
    assert_eq!(editor.loader_state(), LoaderState::Ready);

    editor.panel_revealed(&doc, &mut scripts, &mut notifier);
    assert_eq!(scripts.requested.len(), 1);
}

#[test]
fn default_markers_sit_apart_from_the_fallback_origin() {
    let mut doc = Document::new();
    map_page(&mut doc, Some("key-123"));

    let mut editor = BoundsEditor::new();
    let mut scripts = RecordingScriptLoader::default();
    let mut notifier = RecordingNotifier::default();
    editor.panel_revealed(&doc, &mut scripts, &mut notifier);

    let mut map = RecordingMapSurface::default();
    editor.script_loaded(&mut doc, &mut map);

    let (first, second) = editor.markers().expect("markers placed");
    assert_relative_eq!(first.lat, FALLBACK_ORIGIN.lat + FIRST_MARKER_LAT_OFFSET);
    assert_relative_eq!(first.lon, FALLBACK_ORIGIN.lon);
    assert_relative_eq!(second.lat, FALLBACK_ORIGIN.lat);
    assert_relative_eq!(second.lon, FALLBACK_ORIGIN.lon + SECOND_MARKER_LON_OFFSET);
    assert_eq!(map.markers, Some((first, second)));
    assert_eq!(map.rectangles.len(), 1);
}

#[test]
fn stored_coordinates_win_over_defaults() {
    let mut doc = Document::new();
    map_page(&mut doc, Some("key-123"));
    for (field, value) in [
        (MARKER_FIELDS[0], "52.5"),
        (MARKER_FIELDS[1], "1.25"),
        (MARKER_FIELDS[2], "51.5"),
        (MARKER_FIELDS[3], "0.75"),
    ] {
        let input = doc
            .elements_with_attr("data-field-name", field)
            .first()
            .copied()
            .expect("marker input");
        doc.set_value(input, value);
    }

    let mut editor = BoundsEditor::new();
    let mut scripts = RecordingScriptLoader::default();
    let mut notifier = RecordingNotifier::default();
    editor.panel_revealed(&doc, &mut scripts, &mut notifier);

    let mut map = RecordingMapSurface::default();
    editor.script_loaded(&mut doc, &mut map);

    let (first, second) = editor.markers().expect("markers placed");
    assert_relative_eq!(first.lat, 52.5);
    assert_relative_eq!(first.lon, 1.25);
    assert_relative_eq!(second.lat, 51.5);
    assert_relative_eq!(second.lon, 0.75);
}

#[test]
fn drag_rewrites_rectangle_readouts_and_all_mirrored_fields() {
    let mut doc = Document::new();
    let form = map_page(&mut doc, Some("key-123"));
    for (field, value) in [
        (MARKER_FIELDS[0], "51.5"),
        (MARKER_FIELDS[1], "0.4"),
        (MARKER_FIELDS[2], "51.0"),
        (MARKER_FIELDS[3], "0.3"),
    ] {
        let input = doc
            .elements_with_attr("data-field-name", field)
            .first()
            .copied()
            .expect("marker input");
        doc.set_value(input, value);
    }

    let mut editor = BoundsEditor::new();
    let mut scripts = RecordingScriptLoader::default();
    let mut notifier = RecordingNotifier::default();
    editor.panel_revealed(&doc, &mut scripts, &mut notifier);
    let mut map = RecordingMapSurface::default();
    editor.script_loaded(&mut doc, &mut map);

    editor.marker_dragged(
        &mut doc,
        BoundsMarker::First,
        GeoPoint::new(52.0, 0.5),
        &mut map,
    );

    let rect = editor.rect().expect("rectangle");
    assert_relative_eq!(rect.south_west().lat, 51.0);
    assert_relative_eq!(rect.south_west().lon, 0.3);
    assert_relative_eq!(rect.north_east().lat, 52.0);
    assert_relative_eq!(rect.north_east().lon, 0.5);

    let top = doc.element_by_id(TOP_READOUT_ID).expect("readout");
    assert_eq!(doc.text(top), "52::0.5");
    let bottom = doc.element_by_id(BOTTOM_READOUT_ID).expect("readout");
    assert_eq!(doc.text(bottom), "51::0.3");

    assert_eq!(stored_field(&doc, MARKER_FIELDS[0]), "52");
    assert_eq!(stored_field(&doc, MARKER_FIELDS[1]), "0.5");
    assert_eq!(stored_field(&doc, MARKER_FIELDS[2]), "51");
    assert_eq!(stored_field(&doc, MARKER_FIELDS[3]), "0.3");

    assert_eq!(form_field(&doc, form, "custom-filter-map_marker_1_lat"), "52");
    assert_eq!(form_field(&doc, form, "custom-filter-map_marker_1_lon"), "0.5");
    assert_eq!(form_field(&doc, form, "custom-filter-map_marker_2_lat"), "51");
    assert_eq!(form_field(&doc, form, "custom-filter-map_marker_2_lon"), "0.3");
}

#[test]
fn drag_before_initialization_is_ignored() {
    let mut doc = Document::new();
    map_page(&mut doc, Some("key-123"));

    let mut editor = BoundsEditor::new();
    let mut map = RecordingMapSurface::default();
    editor.marker_dragged(
        &mut doc,
        BoundsMarker::Second,
        GeoPoint::new(50.0, 0.0),
        &mut map,
    );

    assert!(editor.markers().is_none());
    assert!(map.rectangles.is_empty());
}
