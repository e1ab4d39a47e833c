//! Record editing page and endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
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
    endpoints::{self, format_endpoint},
    html::{FORM_CONTAINER_STYLE, base},
    navigation::NavBar,
    record::{
        NewRecord, RecordId, RecordWithCategory,
        domain::RecordFormData,
        form::{FormAction, RecordFormValues, record_form_view},
        get_record_with_category, update_record,
    },
};

/// The state needed for the edit record page.
#[derive(Debug, Clone)]
pub struct EditRecordPageState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for EditRecordPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The state needed for updating a record.
#[derive(Debug, Clone)]
pub struct UpdateRecordEndpointState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for UpdateRecordEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Render the record editing page, pre-filled with the record's current values.
///
/// Responds with the 404 page if the record does not exist.
pub async fn get_edit_record_page(
    Path(record_id): Path<RecordId>,
    State(state): State<EditRecordPageState>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let record = get_record_with_category(record_id, &connection).inspect_err(|error| {
        if *error != Error::NotFound {
            tracing::error!("Failed to retrieve record {record_id}: {error}");
        }
    })?;
    let categories = get_all_categories(&connection)
        .inspect_err(|error| tracing::error!("Failed to retrieve categories: {error}"))?;

    Ok(edit_record_view(&record, &categories).into_response())
}

/// Handle record update form submission, redirects to the records page on success.
pub async fn update_record_endpoint(
    Path(record_id): Path<RecordId>,
    State(state): State<UpdateRecordEndpointState>,
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

    match update_record(record_id, new_record, &connection) {
        Ok(record) => {
            tracing::info!("Updated record {record_id} in category {}", record.category_id);

            (HxRedirect(endpoints::ROOT.to_owned()), StatusCode::SEE_OTHER).into_response()
        }
        Err(error @ (Error::UpdateMissingRecord | Error::UnknownCategory(_))) => {
            tracing::warn!("Could not update record {record_id}: {error}");
            error.into_alert_response()
        }
        Err(error) => {
            tracing::error!("An unexpected error occurred while updating record {record_id}: {error}");
            error.into_alert_response()
        }
    }
}

fn edit_record_view(record: &RecordWithCategory, categories: &[Category]) -> Markup {
    let edit_endpoint = format_endpoint(endpoints::EDIT_RECORD_VIEW, record.id);
    let update_endpoint = format_endpoint(endpoints::RECORD, record.id);
    let nav_bar = NavBar::new(&edit_endpoint).into_html();
    let form = record_form_view(
        FormAction::Update(&update_endpoint),
        &RecordFormValues {
            name: record.name.as_ref(),
            amount: Some(record.amount),
            category_title: Some(&record.category.title),
        },
        categories,
    );

    let content = html! {
        (nav_bar)
        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold mb-4" { "Edit Record" }
            (form)
        }
    };

    base("Edit Record", &content)
}


#[cfg(test)]
mod update_record_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };
    use axum_extra::extract::Form;
    use rusqlite::Connection;

    use crate::{
        category::{create_category, get_category_record_ids},
        db::initialize,
        endpoints,
        record::{
            NewRecord, Record, RecordName, create_record,
            domain::RecordFormData,
            edit::{UpdateRecordEndpointState, update_record_endpoint},
            get_record,
        },
        test_utils::assert_hx_redirect,
    };

    fn get_state() -> UpdateRecordEndpointState {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        create_category("Food", &connection).unwrap();
        create_category("Transport", &connection).unwrap();
        create_record(
            NewRecord {
                name: RecordName::new_unchecked("Lunch"),
                amount: 12.0,
                category_title: "Food".to_owned(),
            },
            &connection,
        )
        .unwrap();

        UpdateRecordEndpointState {
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }

    fn form(name: &str, amount: f64, category: &str) -> RecordFormData {
        RecordFormData {
            name: name.to_owned(),
            amount,
            category: category.to_owned(),
        }
    }

    #[tokio::test]
    async fn can_update_record_and_move_category() {
        let state = get_state();

        let response = update_record_endpoint(
            Path(1),
            State(state.clone()),
            Form(form("Taxi", 30.0, "Transport")),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, endpoints::ROOT);
        let connection = state.db_connection.lock().unwrap();
        assert_eq!(
            get_record(1, &connection),
            Ok(Record {
                id: 1,
                name: RecordName::new_unchecked("Taxi"),
                amount: 30.0,
                category_id: 2,
            })
        );
        assert_eq!(get_category_record_ids(1, &connection), Ok(vec![]));
        assert_eq!(get_category_record_ids(2, &connection), Ok(vec![1]));
    }

    #[tokio::test]
    async fn update_missing_record_returns_not_found_alert() {
        let state = get_state();

        let response =
            update_record_endpoint(Path(42), State(state), Form(form("Taxi", 30.0, "Transport")))
                .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_with_unknown_category_leaves_record_unchanged() {
        let state = get_state();

        let response = update_record_endpoint(
            Path(1),
            State(state.clone()),
            Form(form("Rent", 900.0, "Housing")),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let connection = state.db_connection.lock().unwrap();
        assert_eq!(
            get_record(1, &connection).map(|record| record.name),
            Ok(RecordName::new_unchecked("Lunch"))
        );
        assert_eq!(get_category_record_ids(1, &connection), Ok(vec![1]));
    }
}
