use std::sync::Arc;

use tokio::{sync::Mutex, time::sleep};

use crate::{
    config::{MoodCatalog, Timings},
    error::MoodError,
    resolve::Resolver,
    types::{MoodSelection, ResolutionResult},
};

use super::{picker::pick_mood, session::Session};

/// Runs the resolver chain for one selection: track list, song search, link aggregation.
pub async fn resolve_pick(
    resolver: &Resolver,
    catalog: &MoodCatalog,
    selection: MoodSelection,
) -> Result<ResolutionResult, MoodError> {
    let pick = pick_mood(resolver.client(), catalog, selection).await?;
    tracing::debug!(mood = %pick.mood, track = %pick.track.name, artist = %pick.track.artist, "picked track");

    let storefront_url = resolver.storefront_url(&pick.track).await?;
    tracing::debug!(%storefront_url, "resolved storefront page");

    let universal_link_url = resolver.universal_link(&storefront_url).await?;
    tracing::debug!(%universal_link_url, "resolved universal link");

    Ok(ResolutionResult {
        display_mood: pick.mood.display_label(),
        track: pick.track,
        universal_link_url,
    })
}

/// Drives a session through one pick.
///
/// Enters Loading, keeps it visible for at least `timings.min_loading` and
/// drops back to Home if `timings.max_loading` passes first. The outcome is
/// applied under the generation issued by [`Session::begin`], so a newer pick
/// always wins over an older one.
///
/// Returns the generation of the pick, or `None` when a pick was already
/// loading and this one was refused.
pub async fn get_mood(
    session: Arc<Mutex<Session>>,
    resolver: &Resolver,
    catalog: &MoodCatalog,
    selection: MoodSelection,
    timings: Timings,
) -> Option<u64> {
    let generation = session.lock().await.begin()?;

    let min_floor = sleep(timings.min_loading);
    let max_guard = {
        let session = Arc::clone(&session);
        tokio::spawn(async move {
            sleep(timings.max_loading).await;
            if session.lock().await.expire(generation) {
                tracing::debug!(generation, "loading exceeded its maximum duration");
            }
        })
    };

    let outcome = resolve_pick(resolver, catalog, selection).await;

    max_guard.abort();
    min_floor.await;
    session.lock().await.settle(generation, outcome);

    Some(generation)
}
