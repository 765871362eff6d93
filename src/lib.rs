pub mod api;
pub mod client;
pub mod config;
pub mod db;
pub mod entities;
pub mod mirror;
pub mod models;
pub mod monitor;
pub mod services;

pub use config::Config;

use tracing::info;
use tracing_subscriber::EnvFilter;

pub async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    config.validate()?;

    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let fmt_layer = tracing_subscriber::fmt::layer();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    let port = config.server.port;
    let state = api::create_app_state(config).await;
    let app = api::router(state);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Server running on port {port}");
    axum::serve(listener, app).await?;

    Ok(())
}
