//! Record deletion endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use rusqlite::Connection;

use crate::{
    AppState, Error, endpoints,
    record::{RecordId, delete_record},
};

/// The state needed for deleting a record.
#[derive(Debug, Clone)]
pub struct DeleteRecordState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DeleteRecordState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Delete a record, redirects to the records page on success.
pub async fn delete_record_endpoint(
    Path(record_id): Path<RecordId>,
    State(state): State<DeleteRecordState>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match delete_record(record_id, &connection) {
        Ok(()) => {
            tracing::info!("Deleted record {record_id}");

            (HxRedirect(endpoints::ROOT.to_owned()), StatusCode::SEE_OTHER).into_response()
        }
        Err(Error::DeleteMissingRecord) => {
            tracing::warn!("Tried to delete missing record {record_id}");
            Error::DeleteMissingRecord.into_alert_response()
        }
        Err(error) => {
            tracing::error!("An unexpected error occurred while deleting record {record_id}: {error}");
            error.into_alert_response()
        }
    }
}
