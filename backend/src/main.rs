//! AgriGuru - Backend Server
//!
//! Serves the farmer dashboard widgets: weather forecast summaries, soil
//! health reports and the farming advice chat.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod models;
mod routes;
mod services;

pub use config::Config;

use error::AppResult;
use external::{AdvisorClient, SoilGridsClient, WeatherClient};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather_client: WeatherClient,
    pub soil_client: SoilGridsClient,
    pub advisor_client: AdvisorClient,
}

impl AppState {
    /// Build the upstream clients from configuration
    pub fn from_config(config: Config) -> AppResult<Self> {
        Ok(Self {
            weather_client: WeatherClient::with_base_url(
                config.weather.api_key.clone(),
                config.weather.api_endpoint.clone(),
            ),
            soil_client: SoilGridsClient::new(config.soil.api_endpoint.clone()),
            advisor_client: AdvisorClient::new(
                config.advisor.api_endpoint.clone(),
                config.advisor.timeout_secs,
            )?,
            config: Arc::new(config),
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agriguru_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting AgriGuru Server");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Default location: {}", config.location.coordinates());

    if config.weather.api_key.trim().is_empty() {
        tracing::warn!("AGRIGURU__WEATHER__API_KEY is not set; weather endpoints will fail");
    }

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    // Create application state
    let state = AppState::from_config(config)?;

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "AgriGuru Farming Dashboard API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
