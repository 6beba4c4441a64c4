//! Car-bon API: OBD-II frame decoding and CO2 estimation over HTTP.
//!
//! Bridges post raw frames, session arrays or trip samples; the server
//! decodes and estimates them statelessly.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use cb_api::config::ApiConfig;
use cb_api::routes;
use cb_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "cb-api starting");

    let config = ApiConfig::from_env()?;

    let state = AppState::from_config(&config)?;
    match &config.fuel_table_path {
        Some(path) => tracing::info!(path = %path.display(), "fuel table loaded"),
        None => tracing::info!("using built-in fuel table"),
    }
    tracing::info!(
        fuels = ?state.fuel_table.fuel_types().collect::<Vec<_>>(),
        default_fuel_type = %state.default_fuel_type,
        displacement_l = state.engine.displacement_l,
        "estimator ready"
    );

    let app = routes::build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
