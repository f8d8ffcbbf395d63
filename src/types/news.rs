use serde::{Deserialize, Serialize};

use super::deserialize_null_default;

pub type NewsId = i64;

/// A single article as returned by the news-list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: NewsId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    pub url: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub telegram_posted: bool,
}

impl NewsItem {
    /// The backend stores missing images as empty strings.
    pub fn image(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|s| !s.trim().is_empty())
    }

    pub fn source_name(&self) -> Option<&str> {
        self.source.as_deref().filter(|s| !s.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsListResponse {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub news: Vec<NewsItem>,
    #[serde(default)]
    pub total: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FetchNewsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub inserted: u64,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramPostRequest {
    pub news_id: NewsId,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelegramPostResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message_id: Option<i64>,
}
