//! Backend entry-point: loads settings, connects to the document store, and
//! serves the product API with health probes and OpenAPI docs.

mod server;

use std::sync::Arc;

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use product_service::inbound::http::health::HealthState;
use product_service::outbound::persistence::MongoContext;
use product_service::settings::AppSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        AppSettings::load().map_err(|err| eyre!("failed to load settings: {err}"))?;
    let bind_addr = settings.bind_addr().wrap_err("invalid bind address")?;

    // Startup aborts when the store cannot be reached or prepared.
    let store = MongoContext::connect(&settings.store_config())
        .await
        .wrap_err("failed to prepare the document store")?;

    let health_state =
        web::Data::new(HealthState::new().with_dependency(Arc::new(store.clone())));
    let config = ServerConfig::new(bind_addr, store).with_status_policy(settings.status_policy());

    create_server(health_state, config)?.await?;
    Ok(())
}
