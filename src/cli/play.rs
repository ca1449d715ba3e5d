use std::{
    io::{self, Write},
    sync::Arc,
};

use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::Mutex,
};

use crate::{
    config::Settings,
    error,
    mood::{BrowserSharer, Session, ViewState},
    resolve::Resolver,
    success,
    utils,
};

use super::{open_player, render, run_pick};

/// Interactive session: home, loading and result screens until the user quits.
pub async fn play(settings: Arc<Settings>) {
    let client = match utils::http_client(settings.http_timeout) {
        Ok(client) => client,
        Err(e) => error!("Cannot create HTTP client. Err: {}", e),
    };
    let resolver = Resolver::from_settings(client, &settings);
    let sharer = BrowserSharer::new(settings.share_compose_url.clone());
    let session = Arc::new(Mutex::new(Session::new()));
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let state = session.lock().await.state().clone();

        match state {
            ViewState::Home { notice } => {
                println!(
                    "{}",
                    render::home_screen(
                        &settings.identity,
                        notice.as_deref(),
                        &settings.curator_credit,
                    )
                );
                let Some(line) = prompt(&mut input, "Pick a mood").await else {
                    break;
                };

                match line.as_str() {
                    "q" | "quit" => break,
                    // header: already home
                    "h" | "home" | "" => session.lock().await.go_home(),
                    choice => match utils::parse_menu_choice(choice) {
                        Some(selection) => {
                            // Detached: a pick that outlives max_loading finishes in the background
                            let _ = run_pick(
                                &session,
                                resolver.clone(),
                                settings.catalog.clone(),
                                settings.timings,
                                selection,
                            )
                            .await;
                        }
                        None => crate::warning!("Unknown choice: {}", choice),
                    },
                }
            }
            ViewState::Result(result) => {
                let player = match utils::embed_url(
                    &settings.embed_base_url,
                    &result.universal_link_url,
                ) {
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
                let Some(line) = prompt(&mut input, render::RESULT_ACTIONS).await else {
                    break;
                };

                match line.as_str() {
                    "s" | "share" => {
                        match session
                            .lock()
                            .await
                            .share(&sharer, &settings.share_app_url)
                        {
                            Ok(()) => success!("Opened the share composer"),
                            Err(e) => tracing::debug!(error = %e, "share failed"),
                        }
                    }
                    "t" | "try again" => session.lock().await.try_again(),
                    "h" | "home" => session.lock().await.go_home(),
                    "o" | "open" => open_player(&player),
                    "q" | "quit" => break,
                    other => crate::warning!("Unknown action: {}", other),
                }
            }
            // Picks are awaited in place, so the loop never observes Loading.
            ViewState::Loading { .. } => continue,
        }
    }
}

async fn prompt<R>(input: &mut tokio::io::Lines<R>, label: &str) -> Option<String>
where
    R: tokio::io::AsyncBufRead + Unpin,
{
    print!("{} > ", label);
    let _ = io::stdout().flush();
    match input.next_line().await {
        Ok(Some(line)) => Some(line.trim().to_lowercase()),
        Ok(None) => None,
        Err(e) => {
            tracing::warn!(error = %e, "cannot read input");
            None
        }
    }
}
