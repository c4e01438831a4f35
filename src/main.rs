mod model;
mod server;

use tracing_subscriber::{fmt, EnvFilter};

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;

    let app = router::router()
        .with_state(AppState::new(db))
        .layer(session);

    let listener = startup::bind_listener(&config).await?;

    tracing::info!("Starting server on {}:{}", config.host, config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
