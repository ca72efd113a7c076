mod billing;
mod config;
mod errors;
mod gate;
mod generation;
mod llm_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, Method};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::billing::{BillingProvider, DevBilling, UnavailableBilling};
use crate::config::{Config, GeneratorBackend};
use crate::gate::store::FileStore;
use crate::gate::UsageGate;
use crate::generation::engine::{BioGenerator, RemoteGenerator, TemplateGenerator};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on inconsistent env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Hooky Bio API v{}", env!("CARGO_PKG_VERSION"));

    // Persisted profile store (usage record, entitlement, first-use marker)
    let store = Arc::new(FileStore::open(&config.data_dir)?);
    let gate = UsageGate::new(store);
    info!("Profile store opened at {}", config.data_dir.display());

    // Generation engine — remote completion or local templates
    let generator: Arc<dyn BioGenerator> = match config.generator_backend {
        GeneratorBackend::Remote => {
            let api_key = config
                .openai_api_key
                .clone()
                .expect("checked by Config::from_env");
            Arc::new(RemoteGenerator::new(LlmClient::new(api_key)))
        }
        GeneratorBackend::Local => Arc::new(TemplateGenerator),
    };
    info!("Generation engine: {}", generator.backend());

    // Billing backend
    let billing: Arc<dyn BillingProvider> = if config.billing_dev_grant {
        info!("Billing: dev-override backend enabled");
        Arc::new(DevBilling::default())
    } else {
        Arc::new(UnavailableBilling)
    };

    let state = AppState {
        generator,
        billing,
        gate,
    };

    // CORS: any origin, simple methods only — the PWA is served elsewhere.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
