use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use maud::Markup;
use serde::Deserialize;

use crate::dashboard::{render_dashboard, StateSnapshot, POLL_PATH};
use crate::global::Global;
use crate::http::error::ApiError;
use crate::types::{Category, NewsId};

pub fn routes() -> Router<Arc<Global>> {
    Router::new()
        .route("/news", get(dashboard))
        .route("/news/state", get(state))
        .route("/news/refresh", post(refresh))
        .route("/news/refresh/:category", post(refresh_category))
        .route("/news/telegram/:id", post(post_to_telegram))
}

#[derive(Debug, Default, Deserialize)]
struct DashboardQuery {
    #[serde(default)]
    poll: bool,
}

/// GET /news
///
/// A plain request is a fresh display of the view and reloads the list.
/// `?poll=true` re-renders the view while operations are pending and only
/// loads if nothing was ever loaded.
#[tracing::instrument(skip(global))]
async fn dashboard(
    State(global): State<Arc<Global>>,
    Query(query): Query<DashboardQuery>,
) -> Markup {
    let state = global.dashboard.snapshot();
    if !query.poll || (!state.initial_load_settled() && !state.is_loading()) {
        let _ = global.dashboard.display();
    }

    let toasts = global.toasts.drain();
    render_dashboard(&global.dashboard.snapshot(), &toasts)
}

#[tracing::instrument(skip(global))]
async fn state(State(global): State<Arc<Global>>) -> Response {
    let state = global.dashboard.snapshot();
    Json(StateSnapshot::from(&state)).into_response()
}

#[tracing::instrument(skip(global))]
async fn refresh(State(global): State<Arc<Global>>) -> Redirect {
    global.dashboard.spawn_fetch(Category::default());
    Redirect::to(POLL_PATH)
}

#[tracing::instrument(skip(global))]
async fn refresh_category(
    State(global): State<Arc<Global>>,
    Path(category): Path<String>,
) -> Result<Redirect, ApiError> {
    let category: Category = category.parse()?;

    global.dashboard.spawn_fetch(category);
    Ok(Redirect::to(POLL_PATH))
}

#[tracing::instrument(skip(global))]
async fn post_to_telegram(
    State(global): State<Arc<Global>>,
    Path(id): Path<String>,
) -> Result<Redirect, ApiError> {
    let id: NewsId = id.parse().map_err(|_| ApiError::invalid_news_id(&id))?;

    global.dashboard.spawn_post(id);
    Ok(Redirect::to(POLL_PATH))
}
