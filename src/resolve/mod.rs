//! # Resolve Module
//!
//! Outbound HTTP clients for the three calls a pick makes, in order:
//!
//! ```text
//! Mood track list (plain text)
//!          ↓
//! Song search API      → storefront page URL
//!          ↓
//! Link aggregation API → universal link (direct or via proxy)
//! ```
//!
//! None of the calls retry. Non-2xx responses surface as
//! [`MoodError::Network`](crate::error::MoodError::Network).

pub mod catalog;
pub mod links;
pub mod tracklist;

use reqwest::Client;

use crate::{
    config::{LinkRoute, Settings},
    error::MoodError,
    types::Track,
};

pub use catalog::resolve_storefront_url;
pub use links::{LinkUpstream, SongLinkUpstream, resolve_universal_link};
pub use tracklist::fetch_track_list;

/// Everything the resolver chain needs to reach the outside world.
#[derive(Debug, Clone)]
pub struct Resolver {
    client: Client,
    search_url: String,
    link_route: LinkRoute,
}

impl Resolver {
    pub fn new(client: Client, search_url: String, link_route: LinkRoute) -> Self {
        Self {
            client,
            search_url,
            link_route,
        }
    }

    pub fn from_settings(client: Client, settings: &Settings) -> Self {
        Self::new(
            client,
            settings.search_url.clone(),
            settings.link_route.clone(),
        )
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub async fn storefront_url(&self, track: &Track) -> Result<String, MoodError> {
        resolve_storefront_url(&self.client, &self.search_url, track).await
    }

    pub async fn universal_link(&self, storefront_url: &str) -> Result<String, MoodError> {
        resolve_universal_link(&self.client, &self.link_route, storefront_url).await
    }
}
