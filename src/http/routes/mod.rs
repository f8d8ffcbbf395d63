use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::endpoints::Endpoint;
use crate::global::Global;

pub mod landing;
pub mod news;


pub fn routes() -> Router<Arc<Global>> {
    Router::new()
        .route("/status", get(status))
        .merge(landing::routes())
        .merge(news::routes())
}

#[derive(serde::Serialize)]
struct EndpointInfo {
    name: &'static str,
    url: String,
}

#[derive(serde::Serialize)]
struct StatusResponse {
    message: &'static str,
    version: &'static str,
    uptime: u64,
    dashboard_views: u64,
    endpoints: Vec<EndpointInfo>,
}

#[tracing::instrument(skip(global))]
async fn status(State(global): State<Arc<Global>>) -> Json<StatusResponse> {
    let endpoints = Endpoint::ALL
        .iter()
        .map(|e| EndpointInfo {
            name: e.name(),
            url: global.config.endpoints.resolve(*e).to_string(),
        })
        .collect();

    Json(StatusResponse {
        message: "newsdesk",
        version: env!("CARGO_PKG_VERSION"),
        uptime: global.started_at.elapsed().as_secs(),
        dashboard_views: global.dashboard.views(),
        endpoints,
    })
}
