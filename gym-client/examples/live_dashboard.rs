//! Live Dashboard Example
//!
//! Logs in, subscribes to the access-event stream and keeps the
//! operational summary reconciled while printing notices.
//!
//! Run: cargo run --example live_dashboard
//!
//! Environment: GYM_API, GYM_STREAM, GYM_EMAIL, GYM_PASSWORD

use std::time::Duration;

use anyhow::Result;
use gym_client::{
    ClientConfig, DashboardService, EventStreamClient, NotificationEmitter, Session,
};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let base_url = std::env::var("GYM_API").unwrap_or_else(|_| "http://localhost:8080/api".into());
    let stream_addr = std::env::var("GYM_STREAM").unwrap_or_else(|_| "127.0.0.1:8082".into());
    let email = std::env::var("GYM_EMAIL").unwrap_or_else(|_| "admin@example.com".into());
    let password = std::env::var("GYM_PASSWORD").unwrap_or_else(|_| "admin".into());

    let config = ClientConfig::new(base_url).with_stream_addr(stream_addr);
    let http = config.build_http_client();

    let session = Session::login(&http, &email, &password).await?;
    println!("Hello, {}!", session.first_name());

    let emitter = NotificationEmitter::new(config.notice_ttl);
    let mut dashboard = DashboardService::new(http.clone(), emitter);

    let snapshot = dashboard.refresh().await?;
    println!(
        "Today: {} entries, {} collected; {} active members",
        snapshot.entries_today, snapshot.payments_today_amount, snapshot.active_clients
    );

    let stream = EventStreamClient::from_config(&config)?;
    let (tx, rx) = mpsc::channel(64);
    stream.connect(session.access_topic(), tx).await?;

    // Reconcile live events, refreshing the snapshot every minute,
    // until interrupted.
    tokio::select! {
        _ = dashboard.run(rx, Some(Duration::from_secs(60))) => {}
        _ = tokio::signal::ctrl_c() => {}
    }

    stream.disconnect().await;
    Ok(())
}
