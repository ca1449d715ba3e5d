use crate::{
    error::ShareError,
    types::{ResolutionResult, SharePayload},
    utils,
};

/// Host action that composes a social post.
pub trait Sharer {
    fn share(&self, payload: &SharePayload) -> Result<(), ShareError>;
}

/// Composes the post in the browser through a compose-intent URL.
#[derive(Debug, Clone)]
pub struct BrowserSharer {
    compose_url: String,
}

impl BrowserSharer {
    pub fn new(compose_url: String) -> Self {
        Self { compose_url }
    }
}

impl Sharer for BrowserSharer {
    fn share(&self, payload: &SharePayload) -> Result<(), ShareError> {
        let url = utils::compose_url(&self.compose_url, &payload.text, &payload.embeds)
            .map_err(ShareError::InvalidUrl)?;
        webbrowser::open(url.as_str())?;
        Ok(())
    }
}

/// Builds the post from the structured result, with the universal link as the embed.
pub fn build_share_payload(result: &ResolutionResult, app_url: &str) -> SharePayload {
    SharePayload {
        text: utils::share_text(result, app_url),
        embeds: vec![result.universal_link_url.clone()],
    }
}
