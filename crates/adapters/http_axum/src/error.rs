//! HTTP error response mapping.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use bandstand_domain::error::SiteError;

/// Minimal error page shell shared by all failure responses.
#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    status: u16,
    message: String,
}

/// Maps [`SiteError`] to an HTML response with the right status code.
pub struct PageError(SiteError);

impl From<SiteError> for PageError {
    fn from(err: SiteError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            SiteError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            SiteError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            SiteError::Content(err) => {
                tracing::error!(error = %err, "content store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        let page = ErrorTemplate {
            status: status.as_u16(),
            message,
        };
        (status, Html(page.to_string())).into_response()
    }
}
