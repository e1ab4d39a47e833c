//! The full-page responses for missing pages and internal server errors.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// A page explaining that something went wrong.
pub enum ErrorPage<'a> {
    /// The requested page or record does not exist.
    NotFound,
    /// The server could not handle the request.
    InternalServerError {
        /// What went wrong.
        description: &'a str,
        /// What the user can do about it.
        fix: &'a str,
    },
}

impl Default for ErrorPage<'_> {
    fn default() -> Self {
        Self::InternalServerError {
            description: "Sorry, something went wrong.",
            fix: "Try again later or check the server logs",
        }
    }
}

impl IntoResponse for ErrorPage<'_> {
    fn into_response(self) -> Response {
        let (status_code, markup) = match self {
            ErrorPage::NotFound => (
                StatusCode::NOT_FOUND,
                error_view(
                    "Not Found",
                    "404",
                    "Something's missing.",
                    "Sorry, we can't find that page. Check the link or head back to your records.",
                ),
            ),
            ErrorPage::InternalServerError { description, fix } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_view("Internal Server Error", "500", description, fix),
            ),
        };

        (status_code, Html(markup.into_string())).into_response()
    }
}

/// The fallback route handler for paths that do not match any route.
pub async fn get_404_not_found() -> Response {
    ErrorPage::NotFound.into_response()
}

pub async fn get_internal_server_error_page() -> Response {
    ErrorPage::default().into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::test_utils::{assert_content_type, assert_valid_html, parse_html_document};

    use super::{get_404_not_found, get_internal_server_error_page};

    #[tokio::test]
    async fn not_found_page() {
        let response = get_404_not_found().await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_content_type(&response, "text/html; charset=utf-8");
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
    }

    #[tokio::test]
    async fn internal_server_error_page() {
        let response = get_internal_server_error_page().await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
    }
}
