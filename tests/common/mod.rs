#![allow(dead_code)]

use std::{collections::HashMap, time::Duration};

use axum::{
    Json, Router,
    extract::Query,
    http::{HeaderMap, StatusCode},
    routing::get,
};
use moodpick::config::{LinkRoute, MoodCatalog, Timings};
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub const FEEL_GOOD_LIST: &str = "Song A, Artist A\nSong B, Artist B\nSong C, Artist C\n\n";
pub const PAGE_URL: &str = "https://song.link/abc";

/// Binds `router` on an ephemeral port and returns its base URL.
pub async fn spawn_app(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Fake track lists, song search and link aggregation in one server.
///
/// - `/lists/good` serves three tracks, `/lists/empty` serves nothing
/// - `/search` answers with a storefront URL unless the term contains "Unknown"
/// - `/links` answers with [`PAGE_URL`] after `links_delay`, or without
///   `pageUrl` when the url contains "nolink"
pub fn fake_upstreams(links_delay: Duration) -> Router {
    Router::new()
        .route("/lists/good", get(|| async { FEEL_GOOD_LIST }))
        .route("/lists/empty", get(|| async { "\n\n" }))
        .route(
            "/search",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let term = params.get("term").cloned().unwrap_or_default();
                if term.contains("Unknown") {
                    return Json(json!({ "resultCount": 0, "results": [] }));
                }
                let slug = term.replace(' ', "-").to_lowercase();
                Json(json!({
                    "resultCount": 1,
                    "results": [{ "trackViewUrl": format!("https://music.apple.com/song/{}", slug) }]
                }))
            }),
        )
        .route(
            "/links",
            get(
                move |Query(params): Query<HashMap<String, String>>, headers: HeaderMap| async move {
                    tokio::time::sleep(links_delay).await;
                    let url = params.get("url").cloned().unwrap_or_default();
                    if url.contains("nolink") {
                        return (StatusCode::OK, Json(json!({ "entityUniqueId": "x" })));
                    }
                    let agent = headers
                        .get("user-agent")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    (
                        StatusCode::OK,
                        Json(json!({ "pageUrl": PAGE_URL, "requested": url, "agent": agent })),
                    )
                },
            ),
        )
        .route(
            "/broken",
            get(|| async { (StatusCode::NOT_FOUND, Json(Value::Null)) }),
        )
}

pub fn catalog(base: &str, list: &str) -> MoodCatalog {
    let url = format!("{}/lists/{}", base, list);
    MoodCatalog::new(url.clone(), url.clone(), url)
}

pub fn direct_route(base: &str) -> LinkRoute {
    LinkRoute::Direct(format!("{}/links", base))
}

pub fn timings(min_ms: u64, max_ms: u64) -> Timings {
    Timings {
        min_loading: Duration::from_millis(min_ms),
        max_loading: Duration::from_millis(max_ms),
    }
}
