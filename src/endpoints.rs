//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/records/{record_id}', use [format_endpoint].

/// The root route which lists all records.
pub const ROOT: &str = "/";
/// The page for listing records with a category filter, sort order and keyword search.
pub const RECORDS_VIEW: &str = "/records";
/// The page for creating a new record, and the route the creation form is posted to.
pub const NEW_RECORD_VIEW: &str = "/records/new";
/// The page for editing an existing record.
pub const EDIT_RECORD_VIEW: &str = "/records/{record_id}/edit";
/// The route to update or delete a single record.
pub const RECORD: &str = "/records/{record_id}";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/records/{record_id}', '{record_id}' is the parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map_or(endpoint_path.len(), |offset| param_start + offset + 1);

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
