use scraper::{ElementRef, Html, Selector};

#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    html.select(&Selector::parse("form").unwrap())
        .next()
        .expect("No form found")
}

#[track_caller]
pub(crate) fn assert_hx_endpoint(form: &ElementRef<'_>, endpoint: &str, attribute: &str) {
    let hx_endpoint = form
        .value()
        .attr(attribute)
        .unwrap_or_else(|| panic!("{attribute} attribute missing"));

    assert_eq!(
        hx_endpoint, endpoint,
        "want form with attribute {attribute}=\"{endpoint}\", got {hx_endpoint:?}"
    );
}

#[track_caller]
fn must_get_input<'a>(form: &ElementRef<'a>, name: &str, type_: &str) -> ElementRef<'a> {
    let input = form
        .select(&Selector::parse("input").unwrap())
        .find(|input| input.value().attr("name") == Some(name))
        .unwrap_or_else(|| panic!("No input found with name \"{name}\""));

    let input_type = input.value().attr("type").unwrap_or_default();
    assert_eq!(
        input_type, type_,
        "want input with type \"{type_}\", got {input_type:?}"
    );
    assert!(
        input.value().attr("required").is_some(),
        "want input with name {name} to have the required attribute but got none"
    );

    input
}

#[track_caller]
pub(crate) fn assert_form_input(form: &ElementRef<'_>, name: &str, type_: &str) {
    must_get_input(form, name, type_);
}

#[track_caller]
pub(crate) fn assert_form_input_with_value(
    form: &ElementRef<'_>,
    name: &str,
    type_: &str,
    value: &str,
) {
    let input = must_get_input(form, name, type_);
    let input_value = input.value().attr("value").unwrap_or_default();

    assert_eq!(
        input_value, value,
        "want input with value \"{value}\", got {input_value:?}"
    );
}

/// Assert that the form has a required select named `name` with the options
/// `want_options` (values) and that `want_selected` is the selected option.
#[track_caller]
pub(crate) fn assert_form_select(
    form: &ElementRef<'_>,
    name: &str,
    want_options: &[&str],
    want_selected: Option<&str>,
) {
    let select = form
        .select(&Selector::parse("select").unwrap())
        .find(|select| select.value().attr("name") == Some(name))
        .unwrap_or_else(|| panic!("No select found with name \"{name}\""));

    assert!(
        select.value().attr("required").is_some(),
        "want select with name {name} to have the required attribute but got none"
    );

    let options = select
        .select(&Selector::parse("option").unwrap())
        .collect::<Vec<_>>();
    let got_options = options
        .iter()
        .map(|option| option.value().attr("value").unwrap_or_default())
        .collect::<Vec<_>>();
    assert_eq!(got_options, want_options);

    let got_selected = options
        .iter()
        .find(|option| option.value().attr("selected").is_some())
        .and_then(|option| option.value().attr("value"));
    assert_eq!(got_selected, want_selected);
}

#[track_caller]
pub(crate) fn assert_form_submit_button_with_text(form: &ElementRef<'_>, text: &str) {
    let submit_button = form
        .select(&Selector::parse("button").unwrap())
        .find(|button| button.value().attr("type") == Some("submit"))
        .expect("No submit button found");

    let got_text = submit_button.text().collect::<Vec<_>>().join("");
    assert_eq!(text, got_text.trim());
}
