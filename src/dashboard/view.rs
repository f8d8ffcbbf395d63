use chrono::{DateTime, NaiveDateTime};
use reqwest::Url;

use super::ViewState;
use crate::types::{NewsId, NewsItem};

const DESCRIPTION_LIMIT: usize = 200;
const DATE_PLACEHOLDER: &str = "Дата не указана";

/// What the dashboard shows; exactly one variant applies at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardView {
    Loading,
    Empty,
    Articles(Vec<ArticleCard>),
}

impl DashboardView {
    pub fn from_state(state: &ViewState) -> Self {
        if !state.initial_load_settled() {
            return Self::Loading;
        }

        if state.news.is_empty() {
            return Self::Empty;
        }

        Self::Articles(
            state
                .news
                .iter()
                .map(|item| ArticleCard::new(item, PublishAction::for_item(state, item)))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishAction {
    Idle,
    Posting,
    Published,
}

impl PublishAction {
    fn for_item(state: &ViewState, item: &NewsItem) -> Self {
        if item.telegram_posted {
            Self::Published
        } else if state.is_posting(item.id) {
            Self::Posting
        } else {
            Self::Idle
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Опубликовать в Telegram",
            Self::Posting => "Публикация...",
            Self::Published => "Опубликовано",
        }
    }

    pub fn disabled(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Idle => "btn btn-primary",
            Self::Posting => "btn btn-primary busy",
            Self::Published => "btn btn-outline published",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCard {
    pub id: NewsId,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub published: String,
    pub source: Option<String>,
    /// `None` unless the article link is an absolute http(s) URL.
    pub url: Option<String>,
    pub action: PublishAction,
}

impl ArticleCard {
    fn new(item: &NewsItem, action: PublishAction) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            description: item
                .description
                .as_deref()
                .filter(|d| !d.trim().is_empty())
                .map(|d| truncate(d, DESCRIPTION_LIMIT)),
            image_url: item.image().and_then(web_url),
            published: format_published(item.published_at.as_deref()),
            source: item.source_name().map(str::to_owned),
            url: web_url(&item.url),
            action,
        }
    }
}

/// `dd.mm.yyyy, HH:MM` in the timestamp's own offset.
pub fn format_published(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return DATE_PLACEHOLDER.to_string();
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d.%m.%Y, %H:%M").to_string();
    }

    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(dt) => dt.format("%d.%m.%Y, %H:%M").to_string(),
        Err(_) => DATE_PLACEHOLDER.to_string(),
    }
}

fn web_url(raw: &str) -> Option<String> {
    let url = Url::parse(raw.trim()).ok()?;
    matches!(url.scheme(), "http" | "https").then(|| url.to_string())
}

fn truncate(text: &str, limit: usize) -> String {
    let text = text.trim();
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}…", text[..cut].trim_end()),
        None => text.to_string(),
    }
}
