mod booking;
mod cms;
mod config;
mod datetime;
mod routes;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::Config::from_env().expect("invalid configuration");
    if config.api_key.is_empty() {
        tracing::warn!("NEXT_PUBLIC_STRAPI_API_KEY not set; GraphQL requests are unauthenticated");
    }
    let port = config.port;
    let api_url = config.api_url.clone();

    let cms = cms::CmsClient::new(config).expect("CMS client init failed");
    tracing::info!(graphql = cms.graphql().endpoint(), "CMS client initialized");

    let state = state::AppState::new(Arc::new(cms), &api_url);
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "slotbook listening");
    axum::serve(listener, app).await.expect("server failed");
}
