//! Alert fragments for displaying error messages to users after HTMX requests.
//!
//! Alerts are swapped into the `#alert-container` element of the page shell
//! (see [base](crate::html::base)) and can be dismissed by the user.

use axum::response::{Html, IntoResponse, Response};
use maud::{Markup, html};

/// An error message shown in the alert container.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// Something went wrong while handling the request.
    Error {
        /// A short summary of the error.
        message: String,
        /// What the user can do about it.
        details: String,
    },
}

impl Alert {
    /// Render the alert as an HTML fragment.
    pub fn into_html(self) -> Markup {
        match self {
            Alert::Error { message, details } => html! {
                div
                    role="alert"
                    class="p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50
                        dark:bg-gray-800 dark:text-red-400 border border-red-300
                        dark:border-red-800 shadow"
                {
                    div class="flex items-start justify-between gap-4"
                    {
                        div
                        {
                            p class="font-medium" { (message) }

                            @if !details.is_empty() {
                                p class="mt-1" { (details) }
                            }
                        }

                        button
                            type="button"
                            aria-label="Dismiss"
                            class="text-red-800 dark:text-red-400 hover:opacity-75"
                            onclick="this.closest('#alert-container').classList.add('hidden')"
                        {
                            "×"
                        }
                    }
                }
            },
        }
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        Html(self.into_html().into_string()).into_response()
    }
}
