use crate::{
    error::{GENERIC_FAILURE_MESSAGE, MoodError, ShareError},
    types::ResolutionResult,
};

use super::share::{Sharer, build_share_payload};

/// What the screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Mood choices. `notice` carries the failure text of the last pick, if any.
    Home { notice: Option<String> },
    Loading { generation: u64 },
    Result(ResolutionResult),
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::Home { notice: None }
    }
}

/// One user's screen state.
///
/// Every accepted pick gets a new generation. Outcomes and timer expiries
/// carry the generation they were issued for, and anything older than the
/// current generation is dropped.
#[derive(Debug, Default)]
pub struct Session {
    state: ViewState,
    generation: u64,
    settled: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading { .. })
    }

    pub fn result(&self) -> Option<&ResolutionResult> {
        match &self.state {
            ViewState::Result(result) => Some(result),
            _ => None,
        }
    }

    /// Enters Loading and returns the generation for this pick.
    ///
    /// Returns `None` while a pick is loading: mood controls are disabled.
    pub fn begin(&mut self) -> Option<u64> {
        if self.is_loading() {
            return None;
        }

        self.generation += 1;
        self.settled = false;
        self.state = ViewState::Loading {
            generation: self.generation,
        };
        Some(self.generation)
    }

    /// Max-duration timer fired: leave Loading without a result.
    pub fn expire(&mut self, generation: u64) -> bool {
        match self.state {
            ViewState::Loading { generation: g } if g == generation => {
                self.state = ViewState::Home { notice: None };
                true
            }
            _ => false,
        }
    }

    /// Applies the outcome of pick `generation`. Returns whether it was applied.
    pub fn settle(
        &mut self,
        generation: u64,
        outcome: Result<ResolutionResult, MoodError>,
    ) -> bool {
        if generation != self.generation || self.settled {
            tracing::debug!(generation, current = self.generation, "dropping stale outcome");
            return false;
        }

        self.settled = true;
        self.state = match outcome {
            Ok(result) => ViewState::Result(result),
            Err(e) => {
                tracing::debug!(generation, error = %e, "pick failed");
                ViewState::Home {
                    notice: Some(GENERIC_FAILURE_MESSAGE.to_string()),
                }
            }
        };
        true
    }

    /// "Try Again" on the result screen.
    pub fn try_again(&mut self) {
        self.go_home();
    }

    /// Header tapped. Ignored while loading.
    pub fn go_home(&mut self) {
        if !self.is_loading() {
            self.state = ViewState::Home { notice: None };
        }
    }

    /// Shares the current result. Never changes the session.
    pub fn share<S: Sharer + ?Sized>(&self, sharer: &S, app_url: &str) -> Result<(), ShareError> {
        let result = self.result().ok_or(ShareError::NothingToShare)?;
        sharer.share(&build_share_payload(result, app_url))
    }
}
