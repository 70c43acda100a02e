use panel_bind::api::FilterFormController;
use panel_bind::api::filter_form::{FIELD_ATTR, FIELD_NAME_ATTR, ORDER_ATTR, SEARCH_FIELD_ID};
use panel_bind::backend::RecordingSubmitter;
use panel_bind::core::request_state::{
    FILTER_FORM_ID, ORDER_FIELD_INPUT_ID, ORDER_WAY_INPUT_ID, PAGE_INPUT_ID, SEARCH_INPUT_ID,
};
use panel_bind::dom::{Document, NodeId};
use panel_bind::interaction::Key;

fn page_with_form(doc: &mut Document) -> NodeId {
    let body = doc.body();
    let form = doc.create_element("form");
    doc.set_id(form, FILTER_FORM_ID);
    doc.append_child(body, form);
    form
}

fn field_value(doc: &Document, form: NodeId, id: &str) -> String {
    doc.children(form)
        .iter()
        .find(|child| doc.id(**child) == Some(id))
        .map(|child| doc.value(*child).to_owned())
        .unwrap_or_default()
}

#[test]
fn sort_click_writes_field_way_and_resets_page() {
    let mut doc = Document::new();
    let form = page_with_form(&mut doc);
    let page_input = doc.create_element("input");
    doc.set_id(page_input, PAGE_INPUT_ID);
    doc.set_value(page_input, "4");
    doc.append_child(form, page_input);

    let body = doc.body();
    let link = doc.create_element("a");
    doc.set_attr(link, FIELD_ATTR, "name");
    doc.set_attr(link, ORDER_ATTR, "desc");
    doc.append_child(body, link);

    let mut controller = FilterFormController::attach(&doc).expect("form present");
    let mut submitter = RecordingSubmitter::default();
    let outcome = controller.sort_link_clicked(&mut doc, link, &mut submitter);

    assert!(outcome.default_prevented);
    assert!(outcome.submitted);
    assert_eq!(submitter.submissions.len(), 1);
    assert_eq!(field_value(&doc, form, ORDER_FIELD_INPUT_ID), "name");
    assert_eq!(field_value(&doc, form, ORDER_WAY_INPUT_ID), "desc");
    assert_eq!(field_value(&doc, form, PAGE_INPUT_ID), "1");

    let fields = &submitter.submissions[0].fields;
    assert_eq!(fields.get(ORDER_FIELD_INPUT_ID).map(String::as_str), Some("name"));
    assert_eq!(fields.get(ORDER_WAY_INPUT_ID).map(String::as_str), Some("desc"));
    assert_eq!(fields.get(PAGE_INPUT_ID).map(String::as_str), Some("1"));
}

#[test]
fn dropdown_change_mirrors_custom_filter_and_submits() {
    let mut doc = Document::new();
    let form = page_with_form(&mut doc);

    let body = doc.body();
    let control = doc.create_element("select");
    doc.add_class(control, "kaffy-filter");
    doc.set_attr(control, FIELD_NAME_ATTR, "status");
    doc.set_value(control, "active");
    doc.append_child(body, control);

    let mut controller = FilterFormController::attach(&doc).expect("form present");
    let mut submitter = RecordingSubmitter::default();
    let outcome = controller.custom_filter_changed(&mut doc, control, &mut submitter);

    assert!(outcome.submitted);
    assert!(!outcome.default_prevented);
    assert_eq!(submitter.submissions.len(), 1);
    assert_eq!(field_value(&doc, form, "custom-filter-status"), "active");
}

#[test]
fn enter_in_search_box_submits_current_text() {
    let mut doc = Document::new();
    let form = page_with_form(&mut doc);

    let body = doc.body();
    let search = doc.create_element("input");
    doc.set_id(search, SEARCH_FIELD_ID);
    doc.set_value(search, "jane");
    doc.append_child(body, search);

    let mut controller = FilterFormController::attach(&doc).expect("form present");
    let mut submitter = RecordingSubmitter::default();

    let ignored = controller.search_key_pressed(&mut doc, Key::Other, &mut submitter);
    assert!(!ignored.submitted);
    assert!(submitter.submissions.is_empty());

    let outcome = controller.search_key_pressed(&mut doc, Key::Enter, &mut submitter);
    assert!(outcome.submitted);
    assert_eq!(submitter.submissions.len(), 1);
    assert_eq!(field_value(&doc, form, SEARCH_INPUT_ID), "jane");
}

#[test]
fn search_form_submit_is_prevented_and_rerouted() {
    let mut doc = Document::new();
    page_with_form(&mut doc);

    let body = doc.body();
    let search = doc.create_element("input");
    doc.set_id(search, SEARCH_FIELD_ID);
    doc.set_value(search, "query");
    doc.append_child(body, search);

    let mut controller = FilterFormController::attach(&doc).expect("form present");
    let mut submitter = RecordingSubmitter::default();
    let outcome = controller.search_form_submitted(&mut doc, &mut submitter);

    assert!(outcome.default_prevented);
    assert!(outcome.submitted);
    assert_eq!(submitter.submissions.len(), 1);
}

#[test]
fn sequential_mutations_accumulate_one_value_per_key() {
    let mut doc = Document::new();
    let form = page_with_form(&mut doc);

    let body = doc.body();
    let search = doc.create_element("input");
    doc.set_id(search, SEARCH_FIELD_ID);
    doc.set_value(search, "abc");
    doc.append_child(body, search);

    let link = doc.create_element("a");
    doc.set_attr(link, FIELD_ATTR, "inserted_at");
    doc.set_attr(link, ORDER_ATTR, "asc");
    doc.append_child(body, link);

    let mut controller = FilterFormController::attach(&doc).expect("form present");
    let mut submitter = RecordingSubmitter::default();

    controller.search_key_pressed(&mut doc, Key::Enter, &mut submitter);
    controller.sort_link_clicked(&mut doc, link, &mut submitter);

    assert_eq!(field_value(&doc, form, SEARCH_INPUT_ID), "abc");
    assert_eq!(field_value(&doc, form, ORDER_FIELD_INPUT_ID), "inserted_at");

    let search_inputs = doc
        .children(form)
        .iter()
        .filter(|child| doc.id(**child) == Some(SEARCH_INPUT_ID))
        .count();
    assert_eq!(search_inputs, 1);
}

#[test]
fn page_selection_writes_the_page_number_and_submits() {
    let mut doc = Document::new();
    let form = page_with_form(&mut doc);

    let mut controller = FilterFormController::attach(&doc).expect("form present");
    let mut submitter = RecordingSubmitter::default();
    let outcome = controller.page_selected(&mut doc, 5, &mut submitter);

    assert!(outcome.default_prevented);
    assert!(outcome.submitted);
    assert_eq!(submitter.submissions.len(), 1);
    assert_eq!(field_value(&doc, form, PAGE_INPUT_ID), "5");
}

#[test]
fn attach_seeds_state_from_server_rendered_values() {
    let mut doc = Document::new();
    let form = page_with_form(&mut doc);

    for (id, value) in [
        (SEARCH_INPUT_ID, "seeded"),
        (PAGE_INPUT_ID, "3"),
        ("custom-filter-status", "archived"),
    ] {
        let input = doc.create_element("input");
        doc.set_id(input, id);
        doc.set_value(input, value);
        doc.append_child(form, input);
    }

    let controller = FilterFormController::attach(&doc).expect("form present");
    assert_eq!(controller.state().search(), "seeded");
    assert_eq!(controller.state().page(), 3);
    assert_eq!(controller.state().custom_filter("status"), Some("archived"));
}

#[test]
fn missing_form_is_a_typed_error() {
    let doc = Document::new();
    assert!(FilterFormController::attach(&doc).is_err());
}
