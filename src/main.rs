use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod app_state;
mod config;
mod domain;
mod errors;
mod routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config::AppConfig::from_env();
    let addr: SocketAddr = config.bind_addr.parse()?;
    let state = app_state::build_app_state(&config);

    let app = routes::app_router().with_state(state);

    info!("listening on {addr} (environment: {})", config.environment);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    // Connect-info makes the client address available to debug metadata.
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
