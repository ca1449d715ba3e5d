//! # CLI Module
//!
//! Terminal front end for the mood song picker. Screens follow the session
//! state machine in [`crate::mood::Session`]:
//!
//! ```text
//! Home --(mood)--> Loading --(settled)--> Result | Home (with notice)
//! Result --(try again | header)--> Home
//! Result --(share)--> Result
//! ```
//!
//! ## Commands
//!
//! - [`play`] - Interactive session (the default when no command is given)
//! - [`pick`] - One-shot pick, optionally sharing and opening the player
//! - [`moods`] - Table of the configured moods and their track lists
//! - [`serve`] - Runs the link-aggregation proxy
//!
//! ## Usage Patterns
//!
//! ```bash
//! moodpick                          # interactive
//! moodpick pick nostalgic --open    # one pick, open the player
//! moodpick serve                    # proxy on SERVER_ADDRESS
//! ```

mod moods;
mod pick;
mod play;
pub mod render;
mod serve;

use std::{sync::Arc, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tokio::{sync::Mutex, task::JoinHandle};

use crate::{
    config::{MoodCatalog, Timings},
    mood::{Session, get_mood},
    resolve::Resolver,
    types::MoodSelection,
};

pub use moods::moods;
pub use pick::pick;
pub use play::play;
pub use serve::serve;

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

/// Starts a pick in the background and shows a spinner while the session is Loading.
///
/// Returns as soon as the session leaves Loading, which may be the max-duration
/// expiry rather than the outcome. The pick keeps running in the returned task;
/// its outcome is dropped by the session if a newer pick has begun by then.
pub async fn run_pick(
    session: &Arc<Mutex<Session>>,
    resolver: Resolver,
    catalog: MoodCatalog,
    timings: Timings,
    selection: MoodSelection,
) -> JoinHandle<Option<u64>> {
    let pb = spinner(format!("Finding a {} song...", selection));
    let before = session.lock().await.generation();

    let task = {
        let session = Arc::clone(session);
        tokio::spawn(async move { get_mood(session, &resolver, &catalog, selection, timings).await })
    };

    let mut ticker = tokio::time::interval(Duration::from_millis(50));
    loop {
        ticker.tick().await;
        if task.is_finished() {
            break;
        }
        let session = session.lock().await;
        // begin() has run and the session already left Loading
        if session.generation() > before && !session.is_loading() {
            break;
        }
    }

    pb.finish_and_clear();
    task
}

fn open_player(url: &str) {
    if let Err(e) = webbrowser::open(url) {
        crate::warning!("Could not open the player. Visit {} instead. Err: {}", url, e);
    }
}
