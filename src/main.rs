use std::sync::Arc;

use iex_gateway::client::IexHttpClient;
use iex_gateway::config::Config;
use iex_gateway::routes::{app_router, AppState};
use iex_gateway::service::IexService;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let config = Config::from_env();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let client = Arc::new(IexHttpClient::new(config.base_url, config.api_token));
    let state = AppState {
        iex: IexService::new(client),
    };
    let app = app_router(state);

    tracing::info!("listening on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .expect("failed to bind listen address");
    axum::serve(listener, app).await.expect("server error");
}
