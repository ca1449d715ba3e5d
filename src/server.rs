use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::net::TcpListener;

use crate::{
    Res, api,
    config::Settings,
    resolve::{LinkUpstream, SongLinkUpstream, links::PROXY_LINKS_PATH},
    success, utils,
};

pub fn router(upstream: Arc<dyn LinkUpstream>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route(PROXY_LINKS_PATH, get(api::songlink))
        .route("/resolve", get(api::songlink))
        .layer(Extension(upstream))
}

/// Serves `router` on an already bound listener until the task is dropped.
pub async fn serve(listener: TcpListener, router: Router) -> Res<()> {
    axum::serve(listener, router).await?;
    Ok(())
}

pub async fn start_api_server(settings: &Settings) -> Res<()> {
    let addr = SocketAddr::from_str(&settings.server_addr)
        .map_err(|e| format!("Failed to parse server address: {}", e))?;

    let client = utils::http_client(settings.http_timeout)?;
    let upstream: Arc<dyn LinkUpstream> = Arc::new(SongLinkUpstream::new(
        client,
        settings.songlink_url.clone(),
        settings.proxy_user_agent.clone(),
    ));

    let listener = TcpListener::bind(&addr).await?;
    success!("Proxy listening on http://{}", listener.local_addr()?);
    tracing::info!(%addr, upstream = %settings.songlink_url, "proxy server started");

    serve(listener, router(upstream)).await
}
