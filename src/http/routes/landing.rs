use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::Router;
use maud::Markup;

use crate::global::Global;
use crate::landing::LandingPage;

pub fn routes() -> Router<Arc<Global>> {
    Router::new().route("/", get(index))
}

#[derive(Debug, Default, serde::Deserialize)]
struct LandingQuery {
    contact: Option<String>,
}

/// GET /
///
/// `?contact=open` renders the page with the WhatsApp popover shown.
#[tracing::instrument(skip(global))]
async fn index(
    State(global): State<Arc<Global>>,
    Query(query): Query<LandingQuery>,
) -> Markup {
    let open = query.contact.as_deref() == Some("open");
    LandingPage::new(&global.config.contact)
        .with_whatsapp_open(open)
        .render()
}
