//! Merch page — the product catalog.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use bandstand_app::ports::{ContentStore, NewsletterGateway};

use crate::error::PageError;
use crate::state::AppState;
use crate::view::ProductCard;

/// Merch catalog template.
#[derive(Template)]
#[template(path = "merch_list.html")]
pub struct MerchListTemplate {
    products: Vec<ProductCard>,
    contact_email: String,
}

impl IntoResponse for MerchListTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /merch` — the catalog. Orders go through the contact address.
pub async fn list<C, N>(
    State(state): State<AppState<C, N>>,
) -> Result<MerchListTemplate, PageError>
where
    C: ContentStore + Send + Sync + 'static,
    N: NewsletterGateway + Send + Sync + 'static,
{
    let products = state.merch_service.products().await?;
    Ok(MerchListTemplate {
        products: products.iter().map(ProductCard::from).collect(),
        contact_email: state.meta.contact_email.clone(),
    })
}
