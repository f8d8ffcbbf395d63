use async_trait::async_trait;

use crate::error::BackendError;
use crate::types::{Category, FetchNewsResponse, NewsId, NewsListResponse, TelegramPostResponse};

mod http;

pub use http::HttpNewsBackend;

/// The three operations the news backend exposes.
#[async_trait]
pub trait NewsBackend: Send + Sync {
    async fn list_news(&self) -> Result<NewsListResponse, BackendError>;

    /// Asks the backend to pull fresh articles for `category` from its sources.
    async fn fetch_news(&self, category: Category) -> Result<FetchNewsResponse, BackendError>;

    async fn post_to_telegram(&self, news_id: NewsId) -> Result<TelegramPostResponse, BackendError>;
}
