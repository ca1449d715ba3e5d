use async_trait::async_trait;
use reqwest::{Client, header::USER_AGENT};
use serde_json::Value;

use crate::{
    config::LinkRoute,
    error::{MoodError, error_chain},
    types::LinksResponse,
};

/// Path the proxy serves link-aggregation lookups on.
pub const PROXY_LINKS_PATH: &str = "/api/songlink";

/// Turns a storefront URL into a universal cross-platform link.
///
/// Both routes send `?url=<storefront_url>` and expect a JSON body carrying
/// `pageUrl`; they differ only in the host they talk to.
///
/// # Errors
///
/// - [`MoodError::NoUniversalLink`] when `pageUrl` is missing or empty
/// - [`MoodError::Network`] on transport failures and non-2xx statuses
pub async fn resolve_universal_link(
    client: &Client,
    route: &LinkRoute,
    storefront_url: &str,
) -> Result<String, MoodError> {
    let endpoint = match route {
        LinkRoute::Direct(api_url) => api_url.clone(),
        LinkRoute::Proxy(base) => format!("{}{}", base.trim_end_matches('/'), PROXY_LINKS_PATH),
    };

    let res = client
        .get(&endpoint)
        .query(&[("url", storefront_url)])
        .send()
        .await?
        .error_for_status()?
        .json::<LinksResponse>()
        .await?;

    res.page_url
        .filter(|url| !url.is_empty())
        .ok_or_else(|| MoodError::NoUniversalLink(storefront_url.to_string()))
}

/// The link-aggregation service as seen by the proxy endpoint.
#[async_trait]
pub trait LinkUpstream: Send + Sync {
    /// Returns the upstream JSON body for `url` untouched.
    async fn fetch_links(&self, url: &str) -> Result<Value, MoodError>;
}

/// Talks to the real link-aggregation API with an identifying user agent.
#[derive(Debug, Clone)]
pub struct SongLinkUpstream {
    client: Client,
    api_url: String,
    user_agent: String,
}

impl SongLinkUpstream {
    pub fn new(client: Client, api_url: String, user_agent: String) -> Self {
        Self {
            client,
            api_url,
            user_agent,
        }
    }
}

#[async_trait]
impl LinkUpstream for SongLinkUpstream {
    async fn fetch_links(&self, url: &str) -> Result<Value, MoodError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("url", url)])
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| MoodError::UpstreamFailure(error_chain(&e)))?;

        let response = response
            .error_for_status()
            .map_err(|e| MoodError::UpstreamFailure(error_chain(&e)))?;

        response
            .json::<Value>()
            .await
            .map_err(|e| MoodError::UpstreamFailure(error_chain(&e)))
    }
}
