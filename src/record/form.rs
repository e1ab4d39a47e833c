//! The form for creating and editing records.

use maud::{Markup, html};

use crate::{
    category::Category,
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
};

/// How the record form is submitted.
pub(super) enum FormAction<'a> {
    /// POST a new record to the endpoint.
    Create(&'a str),
    /// PUT the updated record to the endpoint.
    Update(&'a str),
}

/// The values to pre-fill the record form with.
#[derive(Debug, Default)]
pub(super) struct RecordFormValues<'a> {
    pub name: &'a str,
    pub amount: Option<f64>,
    pub category_title: Option<&'a str>,
}

pub(super) fn record_form_view(
    action: FormAction,
    values: &RecordFormValues,
    categories: &[Category],
) -> Markup {
    let (hx_post, hx_put, submit_text) = match action {
        FormAction::Create(endpoint) => (Some(endpoint), None, "Create Record"),
        FormAction::Update(endpoint) => (None, Some(endpoint), "Update Record"),
    };

    html! {
        form
            hx-post=[hx_post]
            hx-put=[hx_put]
            hx-target-error="#alert-container"
            class="w-full space-y-4 md:space-y-6"
        {
            div
            {
                label for="name" class=(FORM_LABEL_STYLE) { "Name" }

                input
                    id="name"
                    type="text"
                    name="name"
                    placeholder="Lunch"
                    value=(values.name)
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                input
                    id="amount"
                    type="number"
                    name="amount"
                    step="0.01"
                    placeholder="0.00"
                    value=[values.amount]
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Category" }

                select
                    id="category"
                    name="category"
                    required
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for category in categories {
                        option
                            value=(category.title)
                            selected[values.category_title == Some(category.title.as_str())]
                        {
                            (category.title)
                        }
                    }
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { (submit_text) }
        }
    }
}
