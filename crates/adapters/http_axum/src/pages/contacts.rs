//! Contacts page.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use bandstand_app::ports::{ContentStore, NewsletterGateway};

use crate::state::AppState;

/// Contacts page template.
#[derive(Template)]
#[template(path = "contacts.html")]
pub struct ContactsTemplate {
    contact_email: String,
}

impl IntoResponse for ContactsTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /contacts` — booking and press contact details.
pub async fn show<C, N>(State(state): State<AppState<C, N>>) -> ContactsTemplate
where
    C: ContentStore + Send + Sync + 'static,
    N: NewsletterGateway + Send + Sync + 'static,
{
    ContactsTemplate {
        contact_email: state.meta.contact_email.clone(),
    }
}
