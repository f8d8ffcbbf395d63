//! Operator view over the news backend: list articles, refresh a category
//! from the news sources, and publish single articles to Telegram.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;

use crate::backend::NewsBackend;
use crate::notifier::{Notifier, Toast};
use crate::types::{Category, NewsId};

mod render;
mod state;
mod view;

pub use render::{render_dashboard, POLL_PATH};
pub use state::{StateSnapshot, ViewState};
pub use view::{ArticleCard, DashboardView, PublishAction};

use state::{lock, BusyGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed,
    /// Nothing was sent, e.g. the article is already published.
    Skipped,
}

pub struct Dashboard {
    backend: Arc<dyn NewsBackend>,
    notifier: Arc<dyn Notifier>,
    state: Arc<Mutex<ViewState>>,
    views: AtomicU64,
}

impl Dashboard {
    pub fn new(backend: Arc<dyn NewsBackend>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            backend,
            notifier,
            state: Arc::new(Mutex::new(ViewState::default())),
            views: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> ViewState {
        lock(&self.state).clone()
    }

    /// Starts a fresh load of the article list for a newly displayed view.
    ///
    /// Every display loads exactly once; re-renders of the same view while
    /// it polls for pending operations must not call this.
    pub fn display(self: &Arc<Self>) -> JoinHandle<Outcome> {
        let view = self.views.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(view, "dashboard displayed, loading news");

        let guard = BusyGuard::loading(&self.state);
        let this = Arc::clone(self);
        tokio::spawn(async move { this.run_load(guard).await })
    }

    /// Number of times the view has been displayed since startup.
    pub fn views(&self) -> u64 {
        self.views.load(Ordering::SeqCst)
    }

    #[tracing::instrument(skip(self))]
    pub async fn load_news(&self) -> Outcome {
        let guard = BusyGuard::loading(&self.state);
        self.run_load(guard).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn fetch_news(&self, category: Category) -> Outcome {
        let guard = BusyGuard::fetching(&self.state);
        self.run_fetch(category, guard).await
    }

    /// Marks the view as fetching right away and runs the refresh detached.
    pub fn spawn_fetch(self: &Arc<Self>, category: Category) -> JoinHandle<Outcome> {
        let guard = BusyGuard::fetching(&self.state);
        let this = Arc::clone(self);
        tokio::spawn(async move { this.run_fetch(category, guard).await })
    }

    #[tracing::instrument(skip(self))]
    pub async fn post_to_telegram(&self, news_id: NewsId) -> Outcome {
        match BusyGuard::posting(&self.state, news_id) {
            Some(guard) => self.run_post(news_id, guard).await,
            None => {
                tracing::debug!(news_id, "post skipped, already posted or in flight");
                Outcome::Skipped
            }
        }
    }

    /// Like [`Self::post_to_telegram`] but detached; `None` when skipped.
    pub fn spawn_post(self: &Arc<Self>, news_id: NewsId) -> Option<JoinHandle<Outcome>> {
        let Some(guard) = BusyGuard::posting(&self.state, news_id) else {
            tracing::debug!(news_id, "post skipped, already posted or in flight");
            return None;
        };

        let this = Arc::clone(self);
        Some(tokio::spawn(async move { this.run_post(news_id, guard).await }))
    }

    async fn run_load(&self, _guard: BusyGuard) -> Outcome {
        match self.backend.list_news().await {
            Ok(resp) => {
                tracing::info!(count = resp.news.len(), "news loaded");
                lock(&self.state).news = resp.news;
                Outcome::Succeeded
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load news");
                self.notifier
                    .notify(Toast::failure("Ошибка", "Не удалось загрузить новости"));
                Outcome::Failed
            }
        }
    }

    async fn run_fetch(&self, category: Category, _guard: BusyGuard) -> Outcome {
        match self.backend.fetch_news(category).await {
            Ok(resp) if resp.success => {
                tracing::info!(category = category.slug(), inserted = resp.inserted, "news fetched");
                self.notifier.notify(Toast::success(
                    "Новости обновлены",
                    format!("Добавлено новостей: {}", resp.inserted),
                ));
                self.invalidate_news().await;
                Outcome::Succeeded
            }
            Ok(_) => {
                tracing::warn!(category = category.slug(), "news fetch reported failure");
                self.fetch_failed();
                Outcome::Failed
            }
            Err(e) => {
                tracing::warn!(category = category.slug(), error = %e, "news fetch failed");
                self.fetch_failed();
                Outcome::Failed
            }
        }
    }

    fn fetch_failed(&self) {
        self.notifier
            .notify(Toast::failure("Ошибка", "Не удалось получить новости"));
    }

    async fn run_post(&self, news_id: NewsId, _guard: BusyGuard) -> Outcome {
        let failed = match self.backend.post_to_telegram(news_id).await {
            Ok(resp) if resp.success => {
                tracing::info!(news_id, message_id = ?resp.message_id, "news posted to telegram");
                self.notifier
                    .notify(Toast::success("Опубликовано", "Новость отправлена в Telegram"));
                self.invalidate_news().await;
                return Outcome::Succeeded;
            }
            Ok(_) => "telegram post reported failure".to_string(),
            Err(e) => e.to_string(),
        };

        tracing::warn!(news_id, error = %failed, "failed to post news");
        self.notifier
            .notify(Toast::failure("Ошибка", "Не удалось опубликовать новость"));
        Outcome::Failed
    }

    /// A successful mutation makes the current list stale; reload it.
    async fn invalidate_news(&self) {
        tracing::debug!("news list invalidated");
        self.load_news().await;
    }
}
