use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use crate::types::{NewsId, NewsItem};

/// Client-local state of one dashboard instance.
///
/// Busy markers are counters rather than plain flags so that overlapping
/// requests of the same kind do not clear each other's marker early.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub news: Vec<NewsItem>,
    loads_in_flight: usize,
    fetches_in_flight: usize,
    posting: BTreeSet<NewsId>,
    initial_load_settled: bool,
}

impl ViewState {
    /// True while a load of the list is in flight.
    pub fn is_loading(&self) -> bool {
        self.loads_in_flight > 0
    }

    pub fn initial_load_settled(&self) -> bool {
        self.initial_load_settled
    }

    pub fn is_fetching(&self) -> bool {
        self.fetches_in_flight > 0
    }

    pub fn is_posting(&self, id: NewsId) -> bool {
        self.posting.contains(&id)
    }

    pub fn posting(&self) -> impl Iterator<Item = NewsId> + '_ {
        self.posting.iter().copied()
    }

    pub fn is_posted(&self, id: NewsId) -> bool {
        self.news.iter().any(|item| item.id == id && item.telegram_posted)
    }

    pub fn is_busy(&self) -> bool {
        self.is_loading() || self.is_fetching() || !self.posting.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn loaded(news: Vec<NewsItem>) -> Self {
        Self {
            news,
            initial_load_settled: true,
            ..Self::default()
        }
    }

    #[cfg(test)]
    pub(crate) fn with_posting(mut self, id: NewsId) -> Self {
        self.posting.insert(id);
        self
    }
}

/// JSON view of [`ViewState`].
#[derive(Debug, Serialize)]
pub struct StateSnapshot<'a> {
    pub news: &'a [NewsItem],
    pub loading: bool,
    pub fetching: bool,
    pub posting: Vec<NewsId>,
}

impl<'a> From<&'a ViewState> for StateSnapshot<'a> {
    fn from(state: &'a ViewState) -> Self {
        Self {
            news: &state.news,
            loading: state.is_loading(),
            fetching: state.is_fetching(),
            posting: state.posting().collect(),
        }
    }
}

pub(super) fn lock(state: &Mutex<ViewState>) -> MutexGuard<'_, ViewState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Busy {
    Loading,
    Fetching,
    Posting(NewsId),
}

/// Marks the view busy for as long as it lives.
///
/// Dropping the guard clears the marker whether the request succeeded,
/// failed, or its future was dropped mid-flight.
#[derive(Debug)]
pub(super) struct BusyGuard {
    state: Arc<Mutex<ViewState>>,
    busy: Busy,
}

impl BusyGuard {
    pub(super) fn loading(state: &Arc<Mutex<ViewState>>) -> Self {
        lock(state).loads_in_flight += 1;
        Self {
            state: Arc::clone(state),
            busy: Busy::Loading,
        }
    }

    pub(super) fn fetching(state: &Arc<Mutex<ViewState>>) -> Self {
        lock(state).fetches_in_flight += 1;
        Self {
            state: Arc::clone(state),
            busy: Busy::Fetching,
        }
    }

    /// `None` if the article is already published or a post for it is
    /// still outstanding.
    pub(super) fn posting(state: &Arc<Mutex<ViewState>>, id: NewsId) -> Option<Self> {
        let mut guard = lock(state);
        if guard.is_posted(id) || !guard.posting.insert(id) {
            return None;
        }
        drop(guard);

        Some(Self {
            state: Arc::clone(state),
            busy: Busy::Posting(id),
        })
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        let mut state = lock(&self.state);
        match self.busy {
            Busy::Loading => {
                state.loads_in_flight = state.loads_in_flight.saturating_sub(1);
                state.initial_load_settled = true;
            }
            Busy::Fetching => {
                state.fetches_in_flight = state.fetches_in_flight.saturating_sub(1);
            }
            Busy::Posting(id) => {
                state.posting.remove(&id);
            }
        }
    }
}
