use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    config::Settings,
    error,
    mood::{BrowserSharer, Session, ViewState},
    resolve::Resolver,
    success,
    types::MoodSelection,
    utils,
};

use super::{open_player, render, run_pick};

/// One pick, printed as a result screen.
///
/// Exits with status 1 and the generic failure message when the pick fails.
pub async fn pick(settings: Arc<Settings>, selection: MoodSelection, share: bool, open: bool) {
    let client = match utils::http_client(settings.http_timeout) {
        Ok(client) => client,
        Err(e) => error!("Cannot create HTTP client. Err: {}", e),
    };
    let resolver = Resolver::from_settings(client, &settings);
    let session = Arc::new(Mutex::new(Session::new()));

    let task = run_pick(
        &session,
        resolver,
        settings.catalog.clone(),
        settings.timings,
        selection,
    )
    .await;
    // Nothing else to show meanwhile, so wait for the outcome
    if let Err(e) = task.await {
        tracing::warn!(error = %e, "pick task failed");
    }

    let session = session.lock().await;
    let result = match session.state() {
        ViewState::Result(result) => result.clone(),
        ViewState::Home { notice } => error!(
            "{}",
            notice
                .as_deref()
                .unwrap_or(crate::error::GENERIC_FAILURE_MESSAGE)
        ),
        ViewState::Loading { .. } => error!("{}", crate::error::GENERIC_FAILURE_MESSAGE),
    };

    let player = match utils::embed_url(&settings.embed_base_url, &result.universal_link_url) {
        Ok(url) => url.to_string(),
        Err(_) => result.universal_link_url.clone(),
    };
    println!(
        "{}",
        render::result_screen(
            &settings.identity,
            &result,
            &player,
            &settings.curator_credit,
        )
    );

    if share {
        let sharer = BrowserSharer::new(settings.share_compose_url.clone());
        match session.share(&sharer, &settings.share_app_url) {
            Ok(()) => success!("Opened the share composer"),
            Err(e) => tracing::debug!(error = %e, "share failed"),
        }
    }

    if open {
        open_player(&player);
    }
}
