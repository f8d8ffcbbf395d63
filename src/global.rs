use std::sync::Arc;

use anyhow::Context as _;

use crate::backend::{HttpNewsBackend, NewsBackend};
use crate::config::Config;
use crate::dashboard::Dashboard;
use crate::endpoints::Endpoint;
use crate::notifier::ToastQueue;

pub struct Global {
    pub config: Config,
    pub dashboard: Arc<Dashboard>,
    pub toasts: Arc<ToastQueue>,
    pub started_at: std::time::Instant,
}

impl Global {
    pub fn init(config: Config) -> anyhow::Result<Arc<Self>> {
        let http_client = reqwest::Client::builder()
            .user_agent(&config.http.user_agent)
            .build()
            .context("http client")?;

        let backend = HttpNewsBackend::new(http_client, config.endpoints.clone());

        for endpoint in Endpoint::ALL {
            let url = backend.endpoints().resolve(endpoint);
            tracing::info!(%endpoint, %url, "resolved endpoint");
        }

        Ok(Self::with_backend(config, Arc::new(backend)))
    }

    /// Wires the views to an arbitrary backend.
    pub fn with_backend(config: Config, backend: Arc<dyn NewsBackend>) -> Arc<Self> {
        let toasts = Arc::new(ToastQueue::new());
        let dashboard = Arc::new(Dashboard::new(backend, toasts.clone()));

        Arc::new(Self {
            config,
            dashboard,
            toasts,
            started_at: std::time::Instant::now(),
        })
    }
}
