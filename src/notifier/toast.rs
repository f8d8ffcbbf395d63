use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{Notifier, Severity, Toast};

const MAX_PENDING: usize = 32;

/// Holds toasts until the next page render picks them up.
///
/// Only the most recent [`MAX_PENDING`] toasts are kept.
#[derive(Debug, Default)]
pub struct ToastQueue {
    pending: Mutex<VecDeque<Toast>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn pending(&self) -> MutexGuard<'_, VecDeque<Toast>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn drain(&self) -> Vec<Toast> {
        self.pending().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, toast: Toast) {
        match toast.severity {
            Severity::Default => {
                tracing::info!(title = %toast.title, description = %toast.description, "toast")
            }
            Severity::Destructive => {
                tracing::warn!(title = %toast.title, description = %toast.description, "toast")
            }
        }

        let mut pending = self.pending();
        if pending.len() == MAX_PENDING {
            pending.pop_front();
        }
        pending.push_back(toast);
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    #[test]
    #[traced_test]
    fn drains_in_order_and_logs() {
        let queue = ToastQueue::new();
        queue.notify(Toast::success("Готово", "Добавлено новостей: 3"));
        queue.notify(Toast::failure("Ошибка", "Не удалось загрузить новости"));

        assert!(logs_contain("Добавлено новостей: 3"));
        assert!(logs_contain("Не удалось загрузить новости"));

        let toasts = queue.drain();
        assert_eq!(toasts.len(), 2);
        assert!(!toasts[0].is_destructive());
        assert!(toasts[1].is_destructive());
        assert!(queue.is_empty());
    }

    #[test]
    fn keeps_only_recent_toasts() {
        let queue = ToastQueue::new();
        for i in 0..MAX_PENDING + 5 {
            queue.notify(Toast::success("t", i.to_string()));
        }

        let toasts = queue.drain();
        assert_eq!(toasts.len(), MAX_PENDING);
        assert_eq!(toasts[0].description, "5");
    }
}
