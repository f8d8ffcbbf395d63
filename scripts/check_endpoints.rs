//! Smoke test for the configured backend endpoints.
//!
//! Loads the same configuration as the server, requests the news list and
//! prints what came back. Nothing is written to the backend.
//!
//! Run with: cargo run --bin check-endpoints

use newsdesk::backend::{HttpNewsBackend, NewsBackend};
use newsdesk::config::Config;
use newsdesk::endpoints::Endpoint;
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .compact();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new("debug"))
        .with(fmt_layer)
        .init();

    let config = Config::load()?;

    for endpoint in Endpoint::ALL {
        println!("{:>14} -> {}", endpoint.name(), config.endpoints.resolve(endpoint));
    }

    let client = reqwest::Client::builder()
        .user_agent(&config.http.user_agent)
        .build()?;
    let backend = HttpNewsBackend::new(client, config.endpoints.clone());

    let resp = backend.list_news().await?;
    println!(
        "news-list returned {} articles (total: {})",
        resp.news.len(),
        resp.total.map_or_else(|| "unknown".to_string(), |t| t.to_string()),
    );

    for item in resp.news.iter().take(5) {
        let posted = if item.telegram_posted { "posted" } else { "new" };
        println!("  #{:<6} [{posted}] {}", item.id, item.title);
    }

    Ok(())
}
