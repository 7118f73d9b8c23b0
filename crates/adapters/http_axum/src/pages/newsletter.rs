//! Newsletter form handler (PRG pattern).

use axum::extract::{Form, State};
use axum::response::Redirect;
use serde::Deserialize;

use bandstand_app::ports::{ContentStore, NewsletterGateway};
use bandstand_domain::error::SiteError;

use crate::state::AppState;

/// Form data posted by the signup box.
#[derive(Deserialize)]
pub struct SignupForm {
    pub email: String,
}

/// `POST /newsletter` — subscribe and bounce back to the form.
///
/// Always redirects; the outcome travels in the `signup` query
/// parameter so a reload never re-submits the form.
pub async fn subscribe<C, N>(
    State(state): State<AppState<C, N>>,
    Form(form): Form<SignupForm>,
) -> Redirect
where
    C: ContentStore + Send + Sync + 'static,
    N: NewsletterGateway + Send + Sync + 'static,
{
    let outcome = match state.newsletter_service.subscribe(&form.email).await {
        Ok(()) => "ok",
        Err(SiteError::Validation(_)) => "invalid",
        Err(err) => {
            tracing::warn!(error = %err, "newsletter signup failed");
            "error"
        }
    };
    Redirect::to(&format!("/?signup={outcome}#newsletter"))
}
