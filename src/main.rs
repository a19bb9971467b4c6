mod batch;
mod bos_client;
mod config;
mod errors;
mod extractor;
mod handlers;
mod models;
mod signature;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::bos_client::BosApiClient;
use crate::config::Config;

/// Main entry point for the application.
///
/// Initializes logging, loads configuration, constructs the BOS client and
/// starts the Axum server with the relay routes.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bos_relay_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize BOS client
    let bos_client = BosApiClient::new(&config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize BOS client: {}", e))?;
    tracing::info!("✓ BOS API client initialized: {}", config.bos_base_url);

    // Build application state
    let app_state = Arc::new(handlers::AppState { bos_client });

    // Configure rate limiter: 10 requests/second per IP, burst of 20
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(10)
            .burst_size(20)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .unwrap(),
    );

    // Build relay routes with security layers
    let relay_routes = Router::new()
        .route(
            "/api/calculate_golden_card",
            post(handlers::calculate_golden_card),
        )
        .route("/check-ip", get(handlers::check_ip))
        .layer(
            ServiceBuilder::new()
                // 1 MiB cap on batch payloads
                .layer(RequestBodyLimitLayer::new(1024 * 1024))
                .layer(GovernorLayer {
                    config: governor_conf,
                }),
        );

    // Build final app with the status route outside the rate limiter
    let app = Router::new()
        .route("/", get(handlers::status))
        .merge(relay_routes)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
