//! Record creation page and endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    category::{Category, get_all_categories},
    endpoints,
    html::{FORM_CONTAINER_STYLE, base},
    navigation::NavBar,
    record::{
        NewRecord, create_record,
        domain::RecordFormData,
        form::{FormAction, RecordFormValues, record_form_view},
    },
};

/// The state needed for the record creation page and endpoint.
#[derive(Debug, Clone)]
pub struct CreateRecordState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateRecordState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Render the record creation page with the list of categories.
pub async fn get_new_record_page(
    State(state): State<CreateRecordState>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let categories = get_all_categories(&connection)
        .inspect_err(|error| tracing::error!("Failed to retrieve categories: {error}"))?;

    Ok(new_record_view(&categories).into_response())
}

/// Handle record creation form submission, redirects to the records page on success.
pub async fn create_record_endpoint(
    State(state): State<CreateRecordState>,
    Form(form): Form<RecordFormData>,
) -> Response {
    let new_record = match NewRecord::try_from(form) {
        Ok(new_record) => new_record,
        Err(error) => return error.into_alert_response(),
    };

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match create_record(new_record, &connection) {
        Ok(record) => {
            tracing::info!("Created record {} in category {}", record.id, record.category_id);

            (HxRedirect(endpoints::ROOT.to_owned()), StatusCode::SEE_OTHER).into_response()
        }
        Err(error @ Error::UnknownCategory(_)) => {
            tracing::warn!("Could not create record: {error}");
            error.into_alert_response()
        }
        Err(error) => {
            tracing::error!("An unexpected error occurred while creating a record: {error}");
            error.into_alert_response()
        }
    }
}

fn new_record_view(categories: &[Category]) -> Markup {
    let nav_bar = NavBar::new(endpoints::NEW_RECORD_VIEW).into_html();
    let form = record_form_view(
        FormAction::Create(endpoints::NEW_RECORD_VIEW),
        &RecordFormValues::default(),
        categories,
    );

    let content = html! {
        (nav_bar)
        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold mb-4" { "New Record" }
            (form)
        }
    };

    base("New Record", &content)
}
