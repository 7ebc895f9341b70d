use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use poem::{EndpointExt, Server, listener::TcpListener, middleware::Tracing};
use tokio::main;
use tracing_subscriber::EnvFilter;

use menu_bot::{
    config::Config,
    infrastructure::messaging::graph::{GraphSendApi, GraphSendApiConfig},
    presentation::http::{build_routes, endpoints::root::ApiState},
};

#[main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::try_parse().context("invalid configuration")?;
    let server_url = config.server_url();

    tracing::info!(?config, "starting messenger menu bot at {}", server_url);
    if !config.main_menu_postback {
        tracing::warn!("MAIN_MENU postbacks are answered with the fallback reply");
    }

    let send_api = GraphSendApi::new(GraphSendApiConfig {
        base_url: config.graph_api_base.clone(),
        api_version: config.graph_api_version.clone(),
        access_token: config.page_access_token.clone(),
        timeout: config.send_timeout,
    })?;

    let state = Arc::new(ApiState::new(&config, send_api));
    let app = build_routes(state, &server_url).with(Tracing);

    Server::new(TcpListener::bind(config.bind_addr()))
        .run_with_graceful_shutdown(
            app,
            async {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("shutdown signal received");
            },
            Some(Duration::from_secs(5)),
        )
        .await
        .context("server stopped with an error")
}
