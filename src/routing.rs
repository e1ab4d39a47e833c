//! Application router configuration.

use axum::{
    Router,
    routing::{get, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    error_page::{get_404_not_found, get_internal_server_error_page},
    record::{
        create_record_endpoint, delete_record_endpoint, get_edit_record_page,
        get_new_record_page, get_records_page, update_record_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_records_page))
        .route(endpoints::RECORDS_VIEW, get(get_records_page))
        .route(
            endpoints::NEW_RECORD_VIEW,
            get(get_new_record_page).post(create_record_endpoint),
        )
        .route(endpoints::EDIT_RECORD_VIEW, get(get_edit_record_page))
        .route(
            endpoints::RECORD,
            put(update_record_endpoint).delete(delete_record_endpoint),
        )
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}
