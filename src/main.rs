use std::net::TcpListener;
use std::sync::Arc;

use matchup_backend::run;
use matchup_backend::config::settings::get_config;
use matchup_backend::db::{seed::seed_demo_data, MemoryStorage};
use matchup_backend::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Panic if we can't read the config
    let config = get_config().expect("Failed to read the config.");

    let subscriber = get_subscriber(
        "matchup-backend".into(),
        config.application.log_level.clone(),
        std::io::stdout
    );
    init_subscriber(subscriber);

    let storage = Arc::new(MemoryStorage::new());
    if config.application.seed_demo_data {
        if let Err(e) = seed_demo_data(&storage).await {
            tracing::error!("Failed to seed demo data: {}", e);
            std::process::exit(1);
        }
    }
    if !config.map.has_access_token() {
        tracing::warn!("No map access token configured; the map page will ask for one");
    }

    let address = format!("{}:{}", config.application.host, config.application.port);
    let listener = TcpListener::bind(&address)?;
    tracing::info!("Listening on {}", address);

    run(listener, storage, &config)?.await
}
