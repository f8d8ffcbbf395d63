use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use super::NewsBackend;
use crate::endpoints::{Endpoint, EndpointMap};
use crate::error::BackendError;
use crate::types::{
    Category, FetchNewsResponse, NewsId, NewsListResponse, TelegramPostRequest,
    TelegramPostResponse,
};

/// [`NewsBackend`] over HTTP, resolving every call through an [`EndpointMap`].
///
/// No timeout is set on the requests; they are bounded only by the client's
/// own defaults.
#[derive(Debug, Clone)]
pub struct HttpNewsBackend {
    client: reqwest::Client,
    endpoints: EndpointMap,
}

impl HttpNewsBackend {
    pub fn new(client: reqwest::Client, endpoints: EndpointMap) -> Self {
        Self { client, endpoints }
    }

    pub fn endpoints(&self) -> &EndpointMap {
        &self.endpoints
    }

    async fn send<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        request: RequestBuilder,
    ) -> Result<T, BackendError> {
        let resp = request.send().await.map_err(|source| {
            tracing::error!(error = %source, %endpoint, "backend request failed");
            BackendError::Transport { endpoint, source }
        })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::error!(%status, %endpoint, "backend returned an error status");
            return Err(BackendError::Status { endpoint, status });
        }

        resp.json().await.map_err(|source| {
            tracing::error!(error = %source, %endpoint, "failed to parse backend response");
            BackendError::Decode { endpoint, source }
        })
    }
}

#[async_trait]
impl NewsBackend for HttpNewsBackend {
    #[tracing::instrument(skip(self))]
    async fn list_news(&self) -> Result<NewsListResponse, BackendError> {
        let url = self.endpoints.resolve(Endpoint::NewsList).clone();
        self.send(Endpoint::NewsList, self.client.get(url)).await
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_news(&self, category: Category) -> Result<FetchNewsResponse, BackendError> {
        let url = self.endpoints.resolve(Endpoint::NewsFetch).clone();
        let request = self.client.get(url).query(&[("category", category.slug())]);
        self.send(Endpoint::NewsFetch, request).await
    }

    #[tracing::instrument(skip(self))]
    async fn post_to_telegram(&self, news_id: NewsId) -> Result<TelegramPostResponse, BackendError> {
        let url = self.endpoints.resolve(Endpoint::TelegramPost).clone();
        let request = self.client.post(url).json(&TelegramPostRequest { news_id });
        self.send(Endpoint::TelegramPost, request).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use axum::extract::{Query, State};
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use reqwest::Url;
    use serde_json::{json, Value};
    use tracing_test::traced_test;

    use super::*;

    #[derive(Clone, Default)]
    struct Recorded {
        queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
        bodies: Arc<Mutex<Vec<Value>>>,
    }

    async fn news_list() -> Json<Value> {
        Json(json!({
            "news": [{
                "id": 1,
                "title": "Первая",
                "description": "Описание",
                "content": null,
                "source": "РИА",
                "url": "https://example.com/1",
                "image_url": null,
                "published_at": "2024-05-01T10:00:00+00:00",
                "created_at": null,
                "telegram_posted": false
            }],
            "total": 1,
            "limit": 20,
            "offset": 0
        }))
    }

    async fn news_fetch(
        State(recorded): State<Recorded>,
        Query(query): Query<HashMap<String, String>>,
    ) -> Json<Value> {
        let category = query.get("category").cloned().unwrap_or_default();
        recorded.queries.lock().unwrap().push(query);
        Json(json!({ "success": true, "total": 20, "inserted": 3, "category": category }))
    }

    async fn telegram_post(State(recorded): State<Recorded>, Json(body): Json<Value>) -> Json<Value> {
        recorded.bodies.lock().unwrap().push(body);
        Json(json!({ "success": true, "message_id": 77 }))
    }

    async fn spawn_backend(app: Router) -> (HttpNewsBackend, tokio::task::JoinHandle<()>) {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("listener should bind");
        let address = listener.local_addr().expect("local addr should exist");
        let join_handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server should run");
        });

        let base = Url::parse(&format!("http://{address}/")).unwrap();
        let backend = HttpNewsBackend::new(
            reqwest::Client::new(),
            EndpointMap::with_base(&base).unwrap(),
        );
        (backend, join_handle)
    }

    fn fake_backend(recorded: Recorded) -> Router {
        Router::new()
            .route("/news-list", get(news_list))
            .route("/news-fetch", get(news_fetch))
            .route("/telegram-post", post(telegram_post))
            .with_state(recorded)
    }

    #[tokio::test]
    async fn lists_news() {
        let (backend, server) = spawn_backend(fake_backend(Recorded::default())).await;

        let resp = backend.list_news().await.unwrap();
        assert_eq!(resp.news.len(), 1);
        assert_eq!(resp.news[0].source_name(), Some("РИА"));
        assert_eq!(resp.total, Some(1));

        server.abort();
    }

    #[tokio::test]
    async fn fetch_sends_category_query() {
        let recorded = Recorded::default();
        let (backend, server) = spawn_backend(fake_backend(recorded.clone())).await;

        for category in Category::ALL {
            let resp = backend.fetch_news(category).await.unwrap();
            assert!(resp.success);
            assert_eq!(resp.inserted, 3);
        }

        let categories: Vec<String> = recorded
            .queries
            .lock()
            .unwrap()
            .iter()
            .map(|q| q["category"].clone())
            .collect();
        let expected: Vec<String> = Category::ALL.iter().map(|c| c.slug().to_string()).collect();
        assert_eq!(categories, expected);

        server.abort();
    }

    #[tokio::test]
    async fn post_sends_news_id_body() {
        let recorded = Recorded::default();
        let (backend, server) = spawn_backend(fake_backend(recorded.clone())).await;

        let resp = backend.post_to_telegram(42).await.unwrap();
        assert!(resp.success);
        assert_eq!(resp.message_id, Some(77));
        assert_eq!(recorded.bodies.lock().unwrap().as_slice(), &[json!({ "news_id": 42 })]);

        server.abort();
    }

    #[tokio::test]
    #[traced_test]
    async fn error_status_is_reported() {
        let app = Router::new().route(
            "/news-fetch",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "Failed to fetch news" }))) }),
        );
        let (backend, server) = spawn_backend(app).await;

        let err = backend.fetch_news(Category::Science).await.unwrap_err();
        assert!(matches!(
            err,
            BackendError::Status { endpoint: Endpoint::NewsFetch, status } if status == reqwest::StatusCode::INTERNAL_SERVER_ERROR
        ));
        assert!(logs_contain("backend returned an error status"));

        server.abort();
    }

    #[tokio::test]
    async fn undecodable_body_is_reported() {
        let app = Router::new().route("/news-list", get(|| async { "<html>not json</html>" }));
        let (backend, server) = spawn_backend(app).await;

        let err = backend.list_news().await.unwrap_err();
        assert!(matches!(err, BackendError::Decode { endpoint: Endpoint::NewsList, .. }));

        server.abort();
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);

        let base = Url::parse(&format!("http://{address}/")).unwrap();
        let backend = HttpNewsBackend::new(reqwest::Client::new(), EndpointMap::with_base(&base).unwrap());

        let err = backend.post_to_telegram(1).await.unwrap_err();
        assert_eq!(err.endpoint(), Endpoint::TelegramPost);
        assert!(matches!(err, BackendError::Transport { .. }));
    }
}
