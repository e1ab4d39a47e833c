//! Expense tracker is a web app for recording expenses under categories.
//!
//! This library provides a REST API that directly serves HTML pages.
//! Expense records can be listed, filtered by category, sorted by amount,
//! searched by name, created, edited and deleted.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod category;
mod db;
mod endpoints;
mod error_page;
mod html;
mod logging;
mod navigation;
mod record;
mod routing;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use category::{
    Category, CategoryId, DEFAULT_CATEGORIES, get_all_categories, get_category,
    get_category_record_ids, seed_default_categories,
};
pub use db::initialize as initialize_db;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use record::{NewRecord, Record, RecordId, RecordName, create_record};
pub use routing::build_router;

use crate::{alert::Alert, error_page::ErrorPage};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// No category has the title given for a record.
    ///
    /// Categories are looked up by their exact title when records are created
    /// or updated, and are never created on the fly.
    #[error("there is no category titled \"{0}\"")]
    UnknownCategory(String),

    /// An empty string was used as a record name.
    #[error("Record name cannot be empty")]
    EmptyRecordName,

    /// Tried to update a record that does not exist
    #[error("tried to update a record that is not in the database")]
    UpdateMissingRecord,

    /// Tried to delete a record that does not exist
    #[error("tried to delete a record that is not in the database")]
    DeleteMissingRecord,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => ErrorPage::NotFound.into_response(),
            Error::DatabaseLockError => ErrorPage::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                ErrorPage::default().into_response()
            }
        }
    }
}

impl Error {
    /// Render the error as an alert fragment for HTMX requests.
    fn into_alert_response(self) -> Response {
        let (status_code, message, details) = match self {
            Error::UnknownCategory(title) => (
                StatusCode::BAD_REQUEST,
                "Unknown category",
                format!("Could not find a category titled \"{title}\". Choose one from the list."),
            ),
            Error::EmptyRecordName => (
                StatusCode::BAD_REQUEST,
                "Invalid record",
                "The record name cannot be empty.".to_owned(),
            ),
            Error::NotFound | Error::UpdateMissingRecord => (
                StatusCode::NOT_FOUND,
                "Could not update record",
                "The record could not be found.".to_owned(),
            ),
            Error::DeleteMissingRecord => (
                StatusCode::NOT_FOUND,
                "Could not delete record",
                "The record could not be found. \
                Try refreshing the page to see if the record has already been deleted."
                    .to_owned(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong",
                "An unexpected error occurred, check the server logs for more details.".to_owned(),
            ),
        };

        (
            status_code,
            Alert::Error {
                message: message.to_owned(),
                details,
            },
        )
            .into_response()
    }
}

#[cfg(test)]
mod error_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::Error;

    #[test]
    fn not_found_renders_404_page() {
        let response = Error::NotFound.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn sql_error_renders_500_page() {
        let response = Error::SqlError(rusqlite::Error::InvalidQuery).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn unknown_category_alert_is_bad_request() {
        let response = Error::UnknownCategory("Rent".to_owned()).into_alert_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_record_alerts_are_not_found() {
        assert_eq!(
            Error::UpdateMissingRecord.into_alert_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::DeleteMissingRecord.into_alert_response().status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn no_rows_maps_to_not_found() {
        assert_eq!(
            Error::from(rusqlite::Error::QueryReturnedNoRows),
            Error::NotFound
        );
    }
}
