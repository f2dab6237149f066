use std::sync::Arc;
use skyhigh_api::{app, app_config::Config, state::{AppState, SystemClock}};
use skyhigh_catalog::StaticCatalog;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skyhigh_api=debug,skyhigh_booking=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    let catalog = StaticCatalog::load()?;

    let app_state = AppState::new(
        Arc::new(catalog),
        Arc::new(SystemClock),
        config.booking.page_title.clone(),
    );

    let app = app(app_state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("SkyHigh booking page listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
