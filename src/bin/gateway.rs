use shareit::{
    gateway::{
        client::ServerClient, config::GatewayConfig, error::GatewayError, router,
        state::GatewayState,
    },
    server::startup,
};

#[tokio::main]
async fn main() -> Result<(), GatewayError> {
    dotenvy::dotenv().ok();
    startup::setup_tracing();

    let config = GatewayConfig::from_env()?;

    let client = ServerClient::new(reqwest::Client::new(), config.server_url.clone());
    let app = router::router(GatewayState::new(client));

    let listener = tokio::net::TcpListener::bind(config.gateway_addr).await?;

    tracing::info!(
        "Starting gateway on {}, forwarding to {}",
        config.gateway_addr,
        config.server_url
    );

    axum::serve(listener, app).await?;

    Ok(())
}
