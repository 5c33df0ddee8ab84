use shareit::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::setup_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let app = router::router(AppState::new(db));

    let listener = tokio::net::TcpListener::bind(config.server_addr)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to bind {}: {}", config.server_addr, e)))?;

    tracing::info!("Starting server on {}", config.server_addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))?;

    Ok(())
}
