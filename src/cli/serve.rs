use crate::{config::Settings, error, info, server};

pub async fn serve(settings: &Settings) {
    info!("Starting proxy on {}...", settings.server_addr);
    if let Err(e) = server::start_api_server(settings).await {
        error!("Proxy server stopped. Err: {}", e);
    }
}
