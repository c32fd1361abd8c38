use std::net::TcpListener;
use std::sync::Arc;
use once_cell::sync::Lazy;

use matchup_backend::run;
use matchup_backend::config::settings::get_config;
use matchup_backend::db::{seed::seed_demo_data, MemoryStorage};
use matchup_backend::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::stdout
        );
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::sink
        );
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub storage: Arc<MemoryStorage>,
}

/// Start the server on a random port with an empty store.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(false).await
}

/// Start the server with the demo places, players and matches loaded.
pub async fn spawn_seeded_app() -> TestApp {
    spawn_app_with(true).await
}

async fn spawn_app_with(seed: bool) -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    // Get port assigned by the OS
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let mut configuration = get_config().expect("Failed to read configuration.");
    configuration.map.access_token = None;

    let storage = Arc::new(MemoryStorage::new());
    if seed {
        seed_demo_data(&storage).await.expect("Failed to seed demo data");
    }

    let server = run(listener, storage.clone(), &configuration)
        .expect("Failed to bind address");
    // Launch the server as a background task
    let _ = tokio::spawn(server);

    TestApp {
        address,
        storage,
    }
}
