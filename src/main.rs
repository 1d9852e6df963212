use std::net::SocketAddr;

use shift_roster::api::{create_router, AppState};
use shift_roster::config::ConfigLoader;
use shift_roster::seed::seed_from_config;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG_PATH: &str = "./config/roster.yaml";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shift_roster=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_path =
        std::env::var("ROSTER_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    let config = ConfigLoader::load_or_default(&config_path)
        .expect("Failed to load configuration")
        .into_config();

    let state = AppState::from_config(&config);

    match seed_from_config(state.roster(), &config).await {
        Ok(report) if config.seed.enabled => tracing::info!(
            inserted = report.inserted,
            skipped = report.skipped,
            "Seed roster applied"
        ),
        Ok(_) => {}
        // Already logged with the scope hint.
        Err(_) => std::process::exit(1),
    }

    let app = create_router(state).layer(TraceLayer::new_for_http());

    let host = std::env::var("HOST").unwrap_or(config.server.host);
    let port: u16 = match std::env::var("PORT") {
        Ok(port) => port.parse().expect("PORT must be a number"),
        Err(_) => config.server.port,
    };

    let addr = SocketAddr::new(host.parse().expect("Invalid HOST"), port);
    tracing::info!(
        scope = ?config.validation_scope,
        max_per_slot = config.rules.max_per_slot,
        "Starting server on {addr}"
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
