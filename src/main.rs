use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use sms_relay::config::AppConfig;
use sms_relay::services::messaging::vonage::VonageSmsProvider;
use sms_relay::services::token_store::firebase::FirebaseTokenStore;
use sms_relay::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    anyhow::ensure!(!config.token_store_url.is_empty(), "FIREBASE_URL must be set");
    if config.vonage_api_key.is_empty() || config.vonage_api_secret.is_empty() {
        tracing::warn!("VONAGE_API_KEY or VONAGE_API_SECRET is empty, sends will be rejected by the provider");
    }

    let token_store = FirebaseTokenStore::new(&config.token_store_url)?;
    let sms = VonageSmsProvider::new(
        config.vonage_api_key.clone(),
        config.vonage_api_secret.clone(),
        config.vonage_sender.clone(),
        config.vonage_url.clone(),
    )?;

    tracing::info!(
        sender = %config.vonage_sender,
        client_auth = config.client_auth_enabled(),
        quota = config.quota_enforced,
        "relay configured"
    );

    let state = Arc::new(AppState {
        config: config.clone(),
        token_store: Box::new(token_store),
        sms: Box::new(sms),
    });

    let app = sms_relay::router(state).layer(CorsLayer::permissive());

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
